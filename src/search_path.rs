/// Splits a raw `PATH`-style string into its directory fields.
///
/// Fields are separated by `:` only; embedded spaces stay part of a field.
/// Empty fields from doubled or trailing separators are kept so the field
/// positions stay aligned with the raw string. An empty input means no
/// directories at all, not one empty directory.
pub fn parse(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(':').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_directories() {
        assert_eq!(parse(""), Vec::<String>::new());
    }

    #[test]
    fn single_directory() {
        assert_eq!(parse("/usr/bin"), vec!["/usr/bin"]);
    }

    #[test]
    fn splits_on_colons_in_order() {
        assert_eq!(
            parse("/usr/bin:/bin:/usr/local/bin"),
            vec!["/usr/bin", "/bin", "/usr/local/bin"]
        );
    }

    #[test]
    fn keeps_spaces_inside_fields() {
        assert_eq!(
            parse("/usr/bin:/Applications/My App/bin:/bin"),
            vec!["/usr/bin", "/Applications/My App/bin", "/bin"]
        );
    }

    #[test]
    fn trailing_separator_keeps_empty_field() {
        assert_eq!(parse("/usr/bin:/bin:"), vec!["/usr/bin", "/bin", ""]);
    }

    #[test]
    fn doubled_separator_keeps_empty_field() {
        assert_eq!(parse("/usr/bin::/bin"), vec!["/usr/bin", "", "/bin"]);
    }

    #[test]
    fn field_count_is_separator_count_plus_one() {
        let raw = ":/usr/bin::/bin:";
        let separators = raw.matches(':').count();
        assert_eq!(parse(raw).len(), separators + 1);
    }
}

use std::path::Path;

use crate::search_path;

/// Outcome of resolving one command name against the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub command: String,
    /// Directory the command was found in; empty when `found` is false.
    pub directory: String,
    pub found: bool,
}

/// Walks `directories` in order and returns the first one containing an
/// entry named `command`. Existence is the only criterion: directories and
/// non-executable files with the right name count, and a failed stat on a
/// candidate is treated as "not here" so the search moves on.
pub fn resolve(command: &str, directories: &[String]) -> LookupResult {
    for dir in directories {
        let candidate = Path::new(dir).join(command);
        if candidate.exists() {
            return LookupResult {
                command: command.to_owned(),
                directory: dir.clone(),
                found: true,
            };
        }
    }
    LookupResult {
        command: command.to_owned(),
        directory: String::new(),
        found: false,
    }
}

/// Resolves every command against `raw_path`, parsing it once. Results come
/// back in input order, one per command, duplicates included.
pub fn resolve_all(commands: &[String], raw_path: &str) -> Vec<LookupResult> {
    let directories = search_path::parse(raw_path);
    commands
        .iter()
        .map(|command| resolve(command, &directories))
        .collect()
}

mod lookup;
mod search_path;

use clap::Parser;
use colored::Colorize;

use crate::lookup::LookupResult;

#[derive(Parser, Debug)]
#[command(version, about = "Locate commands on the PATH search directories")]
struct WhichTools {
    /// Command names to resolve, in order
    commands: Vec<String>,
}

impl WhichTools {
    pub fn run(self) {
        if self.commands.is_empty() {
            println!("No arguments provided.");
            return;
        }

        let path_env = std::env::var("PATH").unwrap_or_default();
        let results = lookup::resolve_all(&self.commands, &path_env);
        print_results(&results);
    }
}

fn format_result(result: &LookupResult) -> String {
    if result.found {
        format!(
            "Found {} in {}",
            result.command,
            result.directory.as_str().green()
        )
    } else {
        format!("{} not found in PATH directories", result.command)
            .red()
            .to_string()
    }
}

fn print_results(results: &[LookupResult]) {
    for result in results {
        println!("{}", format_result(result));
    }
}

fn main() {
    let context = WhichTools::parse();
    context.run();
}

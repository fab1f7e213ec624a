use clap::{Parser as ClapParser, Subcommand};
use stateql::cli::{self, CliError, Repl};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "stateql")]
#[command(about = "A mini query language for filtering U.S. state records")]
#[command(version)]
struct Cli {
    /// Dataset file (defaults to the embedded fifty-state dataset;
    /// required for `import`, which merges into it)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt (the default)
    Repl,

    /// Evaluate a single query and print the result
    Query {
        /// The query to evaluate, e.g. "region == northeast"
        query: String,
    },

    /// Merge a JSON array of records into the --data store file, keyed by uuid
    Import {
        /// Source file with the records to import
        file: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => Repl::new(cli.data).run(),
        Commands::Query { query } => {
            let output = cli::execute_query(&query, cli.data.as_deref())?;
            println!("{}", output);
            Ok(())
        }
        Commands::Import { file } => {
            let into = cli.data.ok_or(CliError::MissingStoreFile)?;
            let summary = cli::import_dataset(&file, &into)?;
            println!(
                "Imported {} records ({} now in the store).",
                summary.imported, summary.total
            );
            Ok(())
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn import_takes_the_global_data_flag() {
        let cli =
            Cli::try_parse_from(["stateql", "import", "new_states.json", "--data", "store.json"])
                .unwrap();
        assert_eq!(cli.data.as_deref(), Some(Path::new("store.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Import { ref file }) if file == Path::new("new_states.json")
        ));
    }

    #[test]
    fn import_without_a_store_file_is_rejected() {
        let cli = Cli::try_parse_from(["stateql", "import", "new_states.json"]).unwrap();
        assert!(matches!(run(cli), Err(CliError::MissingStoreFile)));
    }
}

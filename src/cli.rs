use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "passlist",
    about = "Keep a small list of named passwords: view, search, favorite, edit, delete.",
    version
)]
pub struct Cli {
    /// Config file to read instead of .passlist/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter .passlist/config.toml with the built-in entries.
    Init,

    /// Open the interactive shell (the default).
    Shell,

    /// Print the entries.
    List {
        /// Only favorite entries.
        #[arg(long)]
        favorites: bool,

        /// Only entries whose name contains this text (case-insensitive).
        #[arg(long)]
        search: Option<String>,

        /// Print passwords instead of a mask.
        #[arg(long)]
        reveal: bool,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print one entry, password included.
    Show {
        /// The entry name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["passlist"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_list_flags() {
        let cli =
            Cli::try_parse_from(["passlist", "-vv", "list", "--favorites", "--search", "go"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::List {
                favorites,
                search,
                reveal,
                json,
            }) => {
                assert!(favorites);
                assert_eq!(search.as_deref(), Some("go"));
                assert!(!reveal);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep a small roster of people: add, edit, search and page through records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the collection and config.json (falls back to $ROSTER_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally filtered by a search term
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match against name, email and role
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (invalid values fall back to 1)
        #[arg(short, long)]
        page: Option<String>,

        /// Raw query string, e.g. "search=adm&page=2"
        #[arg(long, conflicts_with_all = ["search", "page"])]
        query: Option<String>,
    },

    /// Add a new record
    #[command(alias = "new")]
    Add {
        name: String,
        email: String,
        role: String,
    },

    /// Show full details of records (positions, ranges or ids)
    #[command(alias = "view")]
    Show {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of a single record
    Edit {
        selector: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Permanently remove records
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Key to get or set (e.g. page-size)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn list_with_search_and_page() {
        let cli = Cli::try_parse_from(["roster", "list", "-s", "adm", "-p", "2"]).unwrap();
        match cli.command {
            Some(Commands::List {
                search,
                page,
                query,
            }) => {
                assert_eq!(search.as_deref(), Some("adm"));
                assert_eq!(page.as_deref(), Some("2"));
                assert!(query.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn query_conflicts_with_search() {
        assert!(Cli::try_parse_from(["roster", "list", "--query", "page=2", "-s", "x"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["roster", "add", "Ann", "a@x.com", "Admin", "--data-dir", "/tmp/r", "-v"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/r")));
        assert!(cli.verbose);
    }

    #[test]
    fn delete_accepts_many_selectors() {
        let cli = Cli::try_parse_from(["roster", "rm", "1", "3-4"]).unwrap();
        match cli.command {
            Some(Commands::Delete { selectors }) => assert_eq!(selectors, vec!["1", "3-4"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn delete_requires_a_selector() {
        assert!(Cli::try_parse_from(["roster", "delete"]).is_err());
    }
}

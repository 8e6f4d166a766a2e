use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extended help shown after `platecheck find --help`.
/// Documents where catalog files live and what they must contain.
pub const FIND_AFTER_HELP: &str = "\
Where the catalog comes from:
  Platecheck reads catalog files from a data directory:
    1. --data-dir <path> when given
    2. $PLATECHECK_DATA_DIR when set
    3. <home>/catalog (home is $PLATECHECK_HOME or ~/.platecheck)

  Files in the data directory:
    assignments.csv        assignment sheet (required for searching)
    texts.csv              legacy positional text table (optional)
    deliveries.csv         delivery-service table (optional)
    restaurant-texts.json  structured text catalog (optional)

  assignments.csv columns (by header name):
    Тестировщик, № волны, Партнер, Ресторан, Адрес, Город,
    Способ проверки, ID (ID/Id/id all accepted)

  Only rows whose wave is exactly `Волна 1` or `Волна 2` (case and
  padding ignored) are in scope. The name you search with matches any
  tester containing it, ignoring case, spacing, and ё/е.

What to do next:
  1. Run `platecheck catalog status` to confirm the files are found.
  2. Run `platecheck find \"<фамилия>\"` to list assignments.
  3. Run `platecheck show \"<фамилия>\" --pick <n>` to read the
     instruction for one assignment from that list.
";

#[derive(Debug, Parser)]
#[command(
    name = "platecheck",
    version,
    about = "restaurant-check assignment desk",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a tester's assignments by full or partial name
    #[command(after_long_help = FIND_AFTER_HELP)]
    Find {
        /// Tester name, full or partial (e.g. "Иванов")
        name: String,
        /// Directory holding the catalog files
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Render the instruction for one assignment from a find result
    Show {
        /// Tester name used for the search (and in the rendered text)
        name: String,
        /// 1-based number of the assignment in the find list
        #[arg(long)]
        pick: usize,
        /// Directory holding the catalog files
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Manage per-assignment completion flags
    #[command(arg_required_else_help = true)]
    Done {
        #[command(subcommand)]
        command: DoneCommand,
    },
    /// Inspect what catalog data is loadable
    #[command(arg_required_else_help = true)]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DoneCommand {
    /// Mark an assignment as completed
    Mark {
        partner: String,
        restaurant: String,
        method: String,
        /// Tester name carried in the mirror record
        #[arg(long)]
        tester: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove the completion mark from an assignment
    Clear {
        partner: String,
        restaurant: String,
        method: String,
        /// Tester name carried in the mirror record
        #[arg(long)]
        tester: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Flip the completion flag and report the new state
    Toggle {
        partner: String,
        restaurant: String,
        method: String,
        /// Tester name carried in the mirror record
        #[arg(long)]
        tester: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the current completion flag for an assignment
    Status {
        partner: String,
        restaurant: String,
        method: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List all stored completion records
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommand {
    /// Show the data directory and per-file load status
    Status {
        /// Directory holding the catalog files
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use super::{CatalogCommand, Commands, DoneCommand, parse_from};

    #[test]
    fn parses_find_with_data_dir_and_json() {
        let parsed = parse_from(["platecheck", "find", "Иванов", "--data-dir", "/tmp/c", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            match cli.command {
                Commands::Find { name, data_dir, json } => {
                    assert_eq!(name, "Иванов");
                    assert!(data_dir.is_some());
                    assert!(json);
                }
                other => panic!("expected find, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_show_with_required_pick() {
        let parsed = parse_from(["platecheck", "show", "Иванов", "--pick", "2"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            match cli.command {
                Commands::Show { pick, json, .. } => {
                    assert_eq!(pick, 2);
                    assert!(!json);
                }
                other => panic!("expected show, got {other:?}"),
            }
        }
    }

    #[test]
    fn show_without_pick_is_rejected() {
        assert!(parse_from(["platecheck", "show", "Иванов"]).is_err());
    }

    #[test]
    fn parses_done_subcommands() {
        let toggle = parse_from([
            "platecheck", "done", "toggle", "Вкусно", "Точка 1", "Доставка", "--tester", "Иванов",
        ]);
        assert!(toggle.is_ok());
        if let Ok(cli) = toggle {
            match cli.command {
                Commands::Done {
                    command: DoneCommand::Toggle { tester, .. },
                } => assert_eq!(tester.as_deref(), Some("Иванов")),
                other => panic!("expected done toggle, got {other:?}"),
            }
        }

        let list = parse_from(["platecheck", "done", "list", "--json"]);
        assert!(list.is_ok());
        if let Ok(cli) = list {
            assert!(matches!(
                cli.command,
                Commands::Done {
                    command: DoneCommand::List { json: true }
                }
            ));
        }
    }

    #[test]
    fn parses_catalog_status() {
        let parsed = parse_from(["platecheck", "catalog", "status"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Catalog {
                    command: CatalogCommand::Status { .. }
                }
            ));
        }
    }

    #[test]
    fn bare_done_requires_a_subcommand() {
        assert!(parse_from(["platecheck", "done"]).is_err());
    }
}

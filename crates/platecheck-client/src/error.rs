use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `platecheck {cmd} --help` for usage."),
            None => "Run `platecheck --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn empty_search_name() -> Self {
        Self::invalid_argument_with_recovery(
            "Tester name is empty.",
            vec![
                "Pass a (partial) tester name: `platecheck find \"Иванов\"`.".to_string(),
                "Run `platecheck find --help` for usage.".to_string(),
            ],
        )
    }

    pub fn catalog_dir_not_found(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "catalog_dir_not_found",
            &format!("Catalog directory `{location}` does not exist."),
            vec![
                format!("Create `{location}` and place the catalog files in it."),
                "Pass `--data-dir <path>` or set `PLATECHECK_DATA_DIR` to the directory holding \
                 assignments.csv."
                    .to_string(),
                "Run `platecheck catalog status` to check what is loadable.".to_string(),
            ],
        )
    }

    pub fn assignments_missing(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "assignments_missing",
            &format!("Assignment sheet `{location}` is missing or unreadable: {detail}"),
            vec![
                format!("Export the assignment sheet as CSV to `{location}`."),
                "Run `platecheck catalog status` to see which catalog files were found."
                    .to_string(),
            ],
        )
    }

    pub fn pick_out_of_range(pick: usize, available: usize) -> Self {
        Self::new(
            "pick_out_of_range",
            &format!("Pick {pick} is out of range: the search returned {available} assignments."),
            vec![
                "Run `platecheck find <name>` and use a pick number from that list.".to_string(),
                format!("Valid picks are 1..{available}."),
            ],
        )
        .with_data(json!({
            "pick": pick,
            "available": available,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn store_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_permission_denied",
            &format!("Cannot initialize completion store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `PLATECHECK_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_locked",
            &format!("Completion store database is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn store_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_corrupt",
            &format!("Completion store database appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid SQLite store file or delete it to start over."
            )],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Completion store migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Completion store initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

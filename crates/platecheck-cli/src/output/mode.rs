use crate::cli::{CatalogCommand, Commands, DoneCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Find { json, .. } | Commands::Show { json, .. } => *json,
        Commands::Done { command } => match command {
            DoneCommand::Mark { json, .. }
            | DoneCommand::Clear { json, .. }
            | DoneCommand::Toggle { json, .. }
            | DoneCommand::Status { json, .. }
            | DoneCommand::List { json } => *json,
        },
        Commands::Catalog {
            command: CatalogCommand::Status { json, .. },
        } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

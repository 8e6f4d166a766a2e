use platecheck_client::commands;
use platecheck_client::{ClientResult, SuccessEnvelope};

use crate::cli::{CatalogCommand, Cli, Commands, DoneCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Find { name, data_dir, .. } => commands::find::run(name, data_dir.as_deref()),
        Commands::Show {
            name,
            pick,
            data_dir,
            ..
        } => commands::show::run(name, *pick, data_dir.as_deref()),
        Commands::Done { command } => match command {
            DoneCommand::Mark {
                partner,
                restaurant,
                method,
                tester,
                ..
            } => commands::done::mark(partner, restaurant, method, tester.clone()),
            DoneCommand::Clear {
                partner,
                restaurant,
                method,
                tester,
                ..
            } => commands::done::clear(partner, restaurant, method, tester.clone()),
            DoneCommand::Toggle {
                partner,
                restaurant,
                method,
                tester,
                ..
            } => commands::done::toggle(partner, restaurant, method, tester.clone()),
            DoneCommand::Status {
                partner,
                restaurant,
                method,
                ..
            } => commands::done::status(partner, restaurant, method),
            DoneCommand::List { .. } => commands::done::list(),
        },
        Commands::Catalog { command } => match command {
            CatalogCommand::Status { data_dir, .. } => {
                commands::catalog::status(data_dir.as_deref())
            }
        },
    }
}

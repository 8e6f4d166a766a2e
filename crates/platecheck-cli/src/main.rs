mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use platecheck_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Platecheck - restaurant-check assignment desk

Usage:
  platecheck <command>

Start here:
  platecheck catalog status
  platecheck find \"<фамилия>\"
  platecheck find --help
";

const TOP_LEVEL_HELP: &str = "Platecheck — restaurant-check assignment desk

USAGE: platecheck <command>

Look up your assignments:
  1. platecheck catalog status                            Confirm the catalog files are loadable
  2. platecheck find \"<фамилия>\"                          List wave 1/2 assignments for a tester
  3. platecheck show \"<фамилия>\" --pick <n>               Render the instruction for one assignment

Track what you have checked:
  platecheck done mark <партнер> <ресторан> <способ>      Mark an assignment as completed
  platecheck done toggle <партнер> <ресторан> <способ>    Flip the completion flag
  platecheck done status <партнер> <ресторан> <способ>    Show the current flag
  platecheck done list                                    List everything marked done

Catalog location:
  Files are read from --data-dir, $PLATECHECK_DATA_DIR, or
  <home>/catalog (home is $PLATECHECK_HOME or ~/.platecheck).

Want the full workflow and file formats?
  Run `platecheck find --help` for catalog file details,
  or `platecheck <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    if is_top_level_help_request(&raw_args) {
                        if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                            return Err(ExitCode::from(2));
                        }
                    } else if write_stdout_text(&err.to_string()).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                parse_error_with_command_hint(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
///
/// Collects non-flag arguments after the binary name to form a command
/// string like "done toggle" or "catalog status".
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["find", ..] => Some("find"),
        ["show", ..] => Some("show"),
        ["done", "mark", ..] => Some("done mark"),
        ["done", "clear", ..] => Some("done clear"),
        ["done", "toggle", ..] => Some("done toggle"),
        ["done", "status", ..] => Some("done status"),
        ["done", "list", ..] => Some("done list"),
        ["done", ..] => Some("done"),
        ["catalog", "status", ..] => Some("catalog status"),
        ["catalog", ..] => Some("catalog"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn parse_error_with_command_hint(clean_message: &str, command_hint: Option<&str>) -> ClientError {
    if command_hint == Some("show") && clean_message.contains("--pick") {
        return ClientError::invalid_argument_with_recovery(
            clean_message,
            vec![
                "Run `platecheck find \"<фамилия>\"` to see the numbered assignment list."
                    .to_string(),
                "Re-run with `--pick <n>` using a number from that list.".to_string(),
            ],
        );
    }

    ClientError::invalid_argument_for_command(clean_message, command_hint)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "store_init_permission_denied"
                | "store_locked"
                | "store_corrupt"
                | "migration_failed"
                | "store_init_failed"
        )
}

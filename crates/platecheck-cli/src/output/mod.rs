mod catalog_text;
mod done_text;
mod error_text;
mod find_text;
mod format;
mod json;
mod mode;
mod show_text;

use std::io;

use platecheck_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "find" => find_text::render_find(&success.data),
        "show" => show_text::render_show(&success.data),
        "done mark" | "done clear" | "done toggle" | "done status" => {
            done_text::render_done_flag(&success.data)
        }
        "done list" => done_text::render_done_list(&success.data),
        "catalog status" => catalog_text::render_catalog_status(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

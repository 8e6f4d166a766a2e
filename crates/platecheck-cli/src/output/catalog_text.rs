use std::io;

use serde_json::Value;

use super::format::warning_lines;

pub fn render_catalog_status(data: &Value) -> io::Result<String> {
    let data_dir = data
        .get("data_dir")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("catalog status output requires data_dir"))?;
    let files = data
        .get("files")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("catalog status output requires files"))?;

    let mut lines = vec![format!("Catalog directory: {data_dir}"), String::new()];

    let name_width = files
        .iter()
        .map(|file| file_field(file, "file").chars().count())
        .max()
        .unwrap_or(0);

    for file in files {
        let name = file_field(file, "file");
        let present = file.get("present").and_then(Value::as_bool) == Some(true);
        let padding = " ".repeat(name_width.saturating_sub(name.chars().count()));
        if present {
            let rows = file.get("rows").and_then(Value::as_i64).unwrap_or(0);
            lines.push(format!("  {name}{padding}  ok ({rows} rows)"));
        } else {
            lines.push(format!("  {name}{padding}  missing"));
        }
    }

    lines.extend(warning_lines(data.get("warnings").unwrap_or(&Value::Null)));

    Ok(lines.join("\n"))
}

fn file_field(file: &Value, name: &str) -> String {
    file.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

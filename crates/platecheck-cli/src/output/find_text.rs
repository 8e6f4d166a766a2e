use std::io;

use serde_json::Value;

use super::format::warning_lines;

pub fn render_find(data: &Value) -> io::Result<String> {
    let query = data
        .get("query")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("find output requires query"))?;
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("find output requires rows"))?;

    let mut lines = Vec::new();

    if rows.is_empty() {
        lines.push(format!("No wave 1/2 assignments found for \"{query}\"."));
        lines.push(String::new());
        lines.push("Check the spelling (partial names work) or run".to_string());
        lines.push("`platecheck catalog status` to confirm the catalog loaded.".to_string());
    } else {
        lines.push(format!(
            "Found {} assignment{} for \"{query}\":",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" }
        ));
        lines.push(String::new());

        for row in rows {
            lines.extend(render_row(row));
        }

        lines.push(format!(
            "Next: `platecheck show \"{query}\" --pick <n>` for the instruction text."
        ));
    }

    lines.extend(warning_lines(data.get("warnings").unwrap_or(&Value::Null)));

    Ok(lines.join("\n"))
}

fn render_row(row: &Value) -> Vec<String> {
    let pick = row.get("pick").and_then(Value::as_i64).unwrap_or(0);
    let marker = if row.get("completed").and_then(Value::as_bool) == Some(true) {
        "[x]"
    } else {
        "[ ]"
    };
    let partner = field(row, "partner");
    let restaurant = field(row, "restaurant");
    let address = field(row, "address");
    let city = field(row, "city");
    let method = field(row, "method");
    let wave = field(row, "wave");

    let place = if city.is_empty() {
        address.clone()
    } else {
        format!("{address}, {city}")
    };

    vec![
        format!("  {pick}. {marker} {partner} — {restaurant}  (волна {wave})"),
        format!("       {place}"),
        format!("       Способ проверки: {method}"),
        String::new(),
    ]
}

fn field(row: &Value, name: &str) -> String {
    row.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

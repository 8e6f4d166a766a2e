pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| {
            let label_padding = " ".repeat(label_width.saturating_sub(label.chars().count()));
            format!("{padding}{label}{label_padding}  {value}")
        })
        .collect()
}

pub fn warning_lines(warnings: &serde_json::Value) -> Vec<String> {
    let Some(entries) = warnings.as_array() else {
        return Vec::new();
    };
    if entries.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), "Warnings:".to_string()];
    for entry in entries {
        let message = entry
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown warning");
        lines.push(format!("  - {message}"));
    }
    lines
}

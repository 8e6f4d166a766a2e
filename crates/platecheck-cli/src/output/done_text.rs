use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_done_flag(data: &Value) -> io::Result<String> {
    let action = data
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("done output requires action"))?;
    let completed = data
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let mirrored = data
        .get("mirrored")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut lines = Vec::new();
    lines.push(headline(action, completed).to_string());
    lines.push(String::new());

    let entries = vec![
        ("Партнер:", field(data, "partner")),
        ("Ресторан:", field(data, "restaurant")),
        ("Способ проверки:", field(data, "method")),
        ("Key:", field(data, "key")),
    ];
    lines.extend(key_value_rows(&entries, 2));

    if mirrored {
        lines.push(String::new());
        lines.push("The change was also pushed to the mirror endpoint.".to_string());
    }

    Ok(lines.join("\n"))
}

pub fn render_done_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("done list output requires rows"))?;

    if rows.is_empty() {
        return Ok("No completed checks recorded yet.".to_string());
    }

    let mut lines = vec![format!(
        "{} completed check{}:",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    )];
    lines.push(String::new());

    for row in rows {
        let key = row.get("key").and_then(Value::as_str).unwrap_or("");
        let updated_at = row.get("updated_at").and_then(Value::as_str).unwrap_or("");
        lines.push(format!("  {key}  ({updated_at})"));
    }

    Ok(lines.join("\n"))
}

fn headline(action: &str, completed: bool) -> &'static str {
    match action {
        "mark" => "Marked as done.",
        "clear" => "Cleared the done flag.",
        "toggle" if completed => "Toggled: now done.",
        "toggle" => "Toggled: now not done.",
        "status" if completed => "This check is done.",
        _ => "This check is not done.",
    }
}

fn field(data: &Value, name: &str) -> String {
    data.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_done_flag, render_done_list};

    fn flag_data(action: &str, completed: bool, mirrored: bool) -> serde_json::Value {
        json!({
            "action": action,
            "key": "completion_Вкусно_Точка_1_Доставка",
            "partner": "Вкусно",
            "restaurant": "Точка 1",
            "method": "Доставка",
            "completed": completed,
            "mirrored": mirrored
        })
    }

    #[test]
    fn mark_reports_key_and_mirror_push() {
        let rendered = render_done_flag(&flag_data("mark", true, true));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Marked as done."));
            assert!(text.contains("completion_Вкусно_Точка_1_Доставка"));
            assert!(text.contains("mirror endpoint"));
        }
    }

    #[test]
    fn status_without_mirror_stays_local() {
        let rendered = render_done_flag(&flag_data("status", false, false));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("This check is not done."));
            assert!(!text.contains("mirror endpoint"));
        }
    }

    #[test]
    fn toggle_headline_follows_resulting_state() {
        let on = render_done_flag(&flag_data("toggle", true, false));
        assert!(on.is_ok());
        if let Ok(text) = on {
            assert!(text.starts_with("Toggled: now done."));
        }
        let off = render_done_flag(&flag_data("toggle", false, false));
        assert!(off.is_ok());
        if let Ok(text) = off {
            assert!(text.starts_with("Toggled: now not done."));
        }
    }

    #[test]
    fn empty_list_has_a_friendly_message() {
        let rendered = render_done_list(&json!({ "rows": [] }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert_eq!(text, "No completed checks recorded yet.");
        }
    }

    #[test]
    fn list_shows_keys_with_timestamps() {
        let rendered = render_done_list(&json!({
            "rows": [
                { "key": "completion_Вкусно_Точка_1_Доставка", "updated_at": "2026-08-30T10:00:00+00:00" }
            ]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("1 completed check:"));
            assert!(
                text.contains("completion_Вкусно_Точка_1_Доставка  (2026-08-30T10:00:00+00:00)")
            );
        }
    }
}

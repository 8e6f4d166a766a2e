use std::io;

use serde_json::Value;

use super::format::{key_value_rows, warning_lines};

pub fn render_show(data: &Value) -> io::Result<String> {
    let assignment = data
        .get("assignment")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("show output requires assignment"))?;
    let rendered = data
        .get("rendered")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("show output requires rendered text"))?;

    let mut lines = Vec::new();

    let display = assignment
        .get("display")
        .and_then(Value::as_str)
        .unwrap_or("");
    lines.push(display.to_string());
    lines.push(String::new());

    let mut entries = vec![
        ("Партнер:", object_field(assignment, "partner")),
        ("Ресторан:", object_field(assignment, "restaurant")),
        ("Адрес:", object_field(assignment, "address")),
    ];
    let city = object_field(assignment, "city");
    if !city.is_empty() {
        entries.push(("Город:", city));
    }
    entries.push(("Способ проверки:", object_field(assignment, "method")));
    entries.push(("Волна:", object_field(assignment, "wave")));

    let delivery = data
        .get("delivery_service")
        .and_then(Value::as_str)
        .unwrap_or("");
    if !delivery.is_empty() {
        entries.push(("Сервис доставки:", delivery.to_string()));
    }

    lines.extend(key_value_rows(&entries, 2));

    lines.push(String::new());
    lines.push("Инструкция:".to_string());
    lines.push(String::new());
    lines.push(rendered.to_string());

    let completed = assignment
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    lines.push(String::new());
    if completed {
        lines.push("Status: done. Clear it with `platecheck done clear`.".to_string());
    } else {
        lines.push("Status: not done. Mark it with `platecheck done mark`.".to_string());
    }

    lines.extend(warning_lines(data.get("warnings").unwrap_or(&Value::Null)));

    Ok(lines.join("\n"))
}

fn object_field(object: &serde_json::Map<String, Value>, name: &str) -> String {
    object
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_show;

    fn sample_data() -> serde_json::Value {
        json!({
            "query": "Иванов",
            "assignment": {
                "pick": 1,
                "id": "101",
                "partner": "Вкусно",
                "restaurant": "Точка 1",
                "address": "Ленина 1",
                "city": "Москва",
                "method": "Доставка",
                "wave": "1",
                "display": "Вкусно → Точка 1 → Ленина 1 → Доставка",
                "completed": false
            },
            "text_source": "structured",
            "delivery_service": "https://delivery.example/101",
            "rendered": "Закажите блюдо и проверьте чек.",
            "warnings": []
        })
    }

    #[test]
    fn leads_with_display_line_and_details() {
        let rendered = render_show(&sample_data());
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Вкусно → Точка 1 → Ленина 1 → Доставка"));
            assert!(text.contains("Способ проверки:"));
            assert!(text.contains("Сервис доставки:  https://delivery.example/101"));
            assert!(text.contains("Закажите блюдо и проверьте чек."));
            assert!(text.contains("Status: not done."));
        }
    }

    #[test]
    fn omits_empty_city_and_delivery_rows() {
        let mut data = sample_data();
        data["assignment"]["city"] = json!("");
        data["delivery_service"] = json!("");
        let rendered = render_show(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(!text.contains("Город:"));
            assert!(!text.contains("Сервис доставки:"));
        }
    }

    #[test]
    fn completed_assignment_suggests_clearing() {
        let mut data = sample_data();
        data["assignment"]["completed"] = json!(true);
        let rendered = render_show(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Status: done."));
            assert!(text.contains("platecheck done clear"));
        }
    }
}

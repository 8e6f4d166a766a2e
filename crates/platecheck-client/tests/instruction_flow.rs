use std::fs;
use std::path::{Path, PathBuf};

use platecheck_client::commands::show::{self, ShowOptions};
use serde_json::Value;
use tempfile::tempdir;

const ASSIGNMENTS_CSV: &str = "\
Тестировщик,№ волны,Партнер,Ресторан,Адрес,Город,Способ проверки,ID
Иванов Иван,Волна 1,Вкусно,Точка 1,Ленина 1,Москва,Доставка,101
Иванов Иван,Волна 2,Бургер,Точка 2,Мира 2,Казань,Зал,
Иванов Иван,Волна 1,Неизвестный,Точка 4,Тверская 4,Москва,Обзвон,
";

const TEXT_CATALOG_JSON: &str = r#"{
  "specific_texts": {
    "vkusno_delivery": {
      "partner": "Вкусно",
      "method": "Доставка",
      "content": "Закажите в <Название> (<Адрес>) через <Сервис для оформления доставки>"
    }
  },
  "templates": {
    "general": {
      "content": "Тестировщик: <ФИО>\nПроверка: <Способ проверки>\n{SPECIFIC_TEXT}"
    }
  }
}"#;

const LEGACY_TEXTS_CSV: &str = "\
,Бургер,Вкусно
,Зал,Самовывоз
,Текст зала,Текст самовывоза,Запасная инструкция
";

const DELIVERIES_CSV: &str = "\
ID,Партнер,Ресторан,Адрес,Сервис для оформления доставки
101,Другой,Другая,Другая,https://by-id.example/order
,Вкусно,Точка 1,Ленина 1,https://fallback.example/order
";

fn temp_workspace() -> std::io::Result<(tempfile::TempDir, PathBuf, PathBuf)> {
    let dir = tempdir()?;
    let home = dir.path().join("platecheck-home");
    let data_dir = dir.path().join("catalog");
    fs::create_dir_all(&data_dir)?;
    Ok((dir, home, data_dir))
}

fn write_file(data_dir: &Path, file_name: &str, body: &str) {
    let result = fs::write(data_dir.join(file_name), body);
    assert!(result.is_ok());
}

fn write_full_catalog(data_dir: &Path) {
    write_file(data_dir, "assignments.csv", ASSIGNMENTS_CSV);
    write_file(data_dir, "restaurant-texts.json", TEXT_CATALOG_JSON);
    write_file(data_dir, "texts.csv", LEGACY_TEXTS_CSV);
    write_file(data_dir, "deliveries.csv", DELIVERIES_CSV);
}

fn run_show(
    query: &str,
    pick: usize,
    data_dir: &Path,
    home: &Path,
) -> platecheck_client::ClientResult<Value> {
    show::run_with_options(
        query,
        pick,
        ShowOptions {
            data_dir_override: Some(data_dir),
            home_override: Some(home),
        },
    )
    .map(|envelope| envelope.data)
}

#[test]
fn structured_entry_renders_both_template_tiers() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_full_catalog(&data_dir);

        let data = run_show("Иванов", 1, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["text_source"], "structured");
            let rendered = data["rendered"].as_str().unwrap_or("");
            assert!(rendered.contains("Тестировщик: Иванов"));
            assert!(rendered.contains("Проверка: Доставка"));
            assert!(rendered.contains("Закажите в Точка 1 (Ленина 1)"));
            // Substitution is total: no marker survives in any form.
            assert!(!rendered.contains("<Название>"));
            assert!(!rendered.contains("&lt;"));
            assert!(!rendered.contains("{SPECIFIC_TEXT}"));
        }
    }
}

#[test]
fn id_based_delivery_lookup_beats_partner_fallback() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_full_catalog(&data_dir);

        let data = run_show("Иванов", 1, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["delivery_service"], "https://by-id.example/order");
            let rendered = data["rendered"].as_str().unwrap_or("");
            assert!(rendered.contains(
                "<a href=\"https://by-id.example/order\" target=\"_blank\" \
                 rel=\"noopener noreferrer\">"
            ));
        }
    }
}

#[test]
fn partner_fallback_resolves_when_assignment_has_no_id() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        // Same catalog, but the assignment row under test (pick 1) gets
        // its id stripped so only the partner+address path remains.
        let stripped = ASSIGNMENTS_CSV.replace(",101\n", ",\n");
        write_file(&data_dir, "assignments.csv", &stripped);
        write_file(&data_dir, "restaurant-texts.json", TEXT_CATALOG_JSON);
        write_file(&data_dir, "deliveries.csv", DELIVERIES_CSV);

        let data = run_show("Иванов", 1, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["delivery_service"], "https://fallback.example/order");
        }
    }
}

#[test]
fn unresolved_delivery_uses_link_not_found_placeholder() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_file(&data_dir, "assignments.csv", ASSIGNMENTS_CSV);
        write_file(&data_dir, "restaurant-texts.json", TEXT_CATALOG_JSON);

        let data = run_show("Иванов", 1, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["delivery_service"], "");
            let rendered = data["rendered"].as_str().unwrap_or("");
            assert!(rendered.contains("сервис доставки (ссылка не найдена)"));
        }
    }
}

#[test]
fn legacy_table_serves_pairs_missing_from_structured_catalog() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_full_catalog(&data_dir);

        let data = run_show("Иванов", 2, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["text_source"], "legacy");
            assert_eq!(data["rendered"], "Текст зала");
        }
    }
}

#[test]
fn unmatched_pair_falls_back_to_catch_all_default() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_full_catalog(&data_dir);

        let data = run_show("Иванов", 3, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["text_source"], "default");
            assert_eq!(data["rendered"], "Запасная инструкция");
        }
    }
}

#[test]
fn short_legacy_table_renders_empty_instruction() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_file(&data_dir, "assignments.csv", ASSIGNMENTS_CSV);
        write_file(&data_dir, "texts.csv", ",Бургер\n,Зал\n");

        let data = run_show("Иванов", 2, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["text_source"], "legacy");
            assert_eq!(data["rendered"], "");
        }
    }
}

#[test]
fn absent_catch_all_cell_renders_not_found_message() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_file(&data_dir, "assignments.csv", ASSIGNMENTS_CSV);
        write_file(&data_dir, "texts.csv", ",Бургер\n,Зал\n,\n");

        let data = run_show("Иванов", 3, &data_dir, &home);
        assert!(data.is_ok());
        if let Ok(data) = data {
            assert_eq!(data["text_source"], "missing");
            let rendered = data["rendered"].as_str().unwrap_or("");
            assert!(rendered.starts_with("Инструкция не найдена"));
        }
    }
}

#[test]
fn pick_outside_result_range_is_rejected_with_range_hint() {
    let workspace = temp_workspace();
    assert!(workspace.is_ok());
    if let Ok((_dir, home, data_dir)) = workspace {
        write_full_catalog(&data_dir);

        for pick in [0usize, 4, 99] {
            let result = run_show("Иванов", pick, &data_dir, &home);
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "pick_out_of_range");
            }
        }
    }
}

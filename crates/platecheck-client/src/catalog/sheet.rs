use std::collections::HashMap;

use super::model::{AssignmentRow, DeliveryRow, LegacyTextTable};

const COLUMN_TESTER: &str = "Тестировщик";
const COLUMN_WAVE: &str = "№ волны";
const COLUMN_PARTNER: &str = "Партнер";
const COLUMN_RESTAURANT: &str = "Ресторан";
const COLUMN_ADDRESS: &str = "Адрес";
const COLUMN_CITY: &str = "Город";
const COLUMN_METHOD: &str = "Способ проверки";
const COLUMN_SERVICE: &str = "Сервис для оформления доставки";

// The id column drifted across sheet revisions.
const COLUMN_ID_VARIANTS: [&str; 3] = ["ID", "Id", "id"];

pub(crate) fn parse_assignment_sheet(content: &str) -> Result<Vec<AssignmentRow>, String> {
    let mut reader = header_reader(content);
    let index_by_name = header_index(&mut reader)?;

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|error| format!("malformed CSV row: {error}"))?;
        rows.push(AssignmentRow {
            tester: value_for(&record, &index_by_name, COLUMN_TESTER),
            wave: value_for(&record, &index_by_name, COLUMN_WAVE),
            partner: value_for(&record, &index_by_name, COLUMN_PARTNER),
            restaurant: value_for(&record, &index_by_name, COLUMN_RESTAURANT),
            address: value_for(&record, &index_by_name, COLUMN_ADDRESS),
            city: value_for(&record, &index_by_name, COLUMN_CITY),
            method: value_for(&record, &index_by_name, COLUMN_METHOD),
            id: id_value_for(&record, &index_by_name),
        });
    }

    Ok(rows)
}

pub(crate) fn parse_delivery_sheet(content: &str) -> Result<Vec<DeliveryRow>, String> {
    let mut reader = header_reader(content);
    let index_by_name = header_index(&mut reader)?;

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|error| format!("malformed CSV row: {error}"))?;
        rows.push(DeliveryRow {
            id: id_value_for(&record, &index_by_name),
            partner: value_for(&record, &index_by_name, COLUMN_PARTNER),
            restaurant: value_for(&record, &index_by_name, COLUMN_RESTAURANT),
            address: value_for(&record, &index_by_name, COLUMN_ADDRESS),
            service: value_for(&record, &index_by_name, COLUMN_SERVICE),
        });
    }

    Ok(rows)
}

/// The legacy table is positional, not named: no header semantics, and
/// rows may have uneven lengths.
pub(crate) fn parse_legacy_text_table(content: &str) -> Result<LegacyTextTable, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|error| format!("malformed CSV row: {error}"))?;
        rows.push(
            record
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<String>>(),
        );
    }

    Ok(LegacyTextTable { rows })
}

fn header_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes())
}

fn header_index(reader: &mut csv::Reader<&[u8]>) -> Result<HashMap<String, usize>, String> {
    let headers = reader
        .headers()
        .map_err(|error| format!("header row is missing or unreadable: {error}"))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    Ok(headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>())
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    column_name: &str,
) -> String {
    index_by_name
        .get(column_name)
        .and_then(|index| record.get(*index))
        .unwrap_or("")
        .to_string()
}

fn id_value_for(record: &csv::StringRecord, index_by_name: &HashMap<String, usize>) -> String {
    for variant in COLUMN_ID_VARIANTS {
        let value = value_for(record, index_by_name, variant);
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}

use serde::Deserialize;
use serde_json::Value;

use super::model::{TextCatalog, TextEntry};

#[derive(Debug, Deserialize)]
struct TextCatalogFile {
    // serde_json's preserve_order keeps the file's entry order here,
    // which first-match-wins lookups rely on.
    #[serde(default)]
    specific_texts: serde_json::Map<String, Value>,
    #[serde(default)]
    templates: Option<TemplatesSection>,
}

#[derive(Debug, Deserialize)]
struct TemplatesSection {
    #[serde(default)]
    general: Option<TemplateBody>,
}

#[derive(Debug, Deserialize)]
struct TemplateBody {
    #[serde(default)]
    content: String,
}

pub(crate) fn parse_text_catalog(content: &str) -> Result<TextCatalog, String> {
    let file = serde_json::from_str::<TextCatalogFile>(content)
        .map_err(|error| format!("invalid JSON: {error}"))?;

    let entries = file
        .specific_texts
        .values()
        .map(|value| TextEntry {
            partner: string_field(value, "partner"),
            method: string_field(value, "method"),
            content: string_field(value, "content"),
        })
        .collect::<Vec<TextEntry>>();

    let general_template = file
        .templates
        .and_then(|templates| templates.general)
        .map(|general| general.content);

    Ok(TextCatalog {
        entries,
        general_template,
    })
}

fn string_field(value: &Value, field_name: &str) -> String {
    value
        .get(field_name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

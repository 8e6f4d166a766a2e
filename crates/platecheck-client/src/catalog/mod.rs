mod model;
mod sheet;
mod texts;

use std::fs;
use std::path::{Path, PathBuf};

use crate::contracts::types::CatalogWarning;
use crate::{ClientError, ClientResult};

pub use model::{AssignmentRow, DeliveryRow, LegacyTextTable, TextCatalog, TextEntry};

pub const ASSIGNMENTS_FILE: &str = "assignments.csv";
pub const LEGACY_TEXTS_FILE: &str = "texts.csv";
pub const DELIVERIES_FILE: &str = "deliveries.csv";
pub const TEXT_CATALOG_FILE: &str = "restaurant-texts.json";

/// One immutable load of all catalog files. Auxiliary files degrade to
/// warnings; only the assignment sheet is mandatory for searching, and
/// even that is enforced by the caller, not here.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub data_dir: PathBuf,
    pub assignments: Option<Vec<AssignmentRow>>,
    pub legacy_texts: LegacyTextTable,
    pub deliveries: Vec<DeliveryRow>,
    pub texts: Option<TextCatalog>,
    pub warnings: Vec<CatalogWarning>,
}

impl CatalogSnapshot {
    pub fn require_assignments(&self) -> ClientResult<&[AssignmentRow]> {
        match &self.assignments {
            Some(rows) => Ok(rows),
            None => {
                let detail = self
                    .warnings
                    .iter()
                    .find(|warning| warning.code == "assignments_unavailable")
                    .map(|warning| warning.message.clone())
                    .unwrap_or_else(|| "file not found".to_string());
                Err(ClientError::assignments_missing(
                    &self.data_dir.join(ASSIGNMENTS_FILE),
                    &detail,
                ))
            }
        }
    }
}

pub fn load_snapshot(data_dir: &Path) -> ClientResult<CatalogSnapshot> {
    if !data_dir.is_dir() {
        return Err(ClientError::catalog_dir_not_found(data_dir));
    }

    let mut warnings = Vec::new();

    let assignments = match read_file(data_dir, ASSIGNMENTS_FILE) {
        Ok(content) => match sheet::parse_assignment_sheet(&content) {
            Ok(rows) => Some(rows),
            Err(detail) => {
                warnings.push(warning("assignments_unavailable", ASSIGNMENTS_FILE, &detail));
                None
            }
        },
        Err(detail) => {
            warnings.push(warning("assignments_unavailable", ASSIGNMENTS_FILE, &detail));
            None
        }
    };

    let legacy_texts = match read_file(data_dir, LEGACY_TEXTS_FILE) {
        Ok(content) => match sheet::parse_legacy_text_table(&content) {
            Ok(table) => table,
            Err(detail) => {
                warnings.push(warning("legacy_texts_unavailable", LEGACY_TEXTS_FILE, &detail));
                LegacyTextTable::default()
            }
        },
        Err(detail) => {
            warnings.push(warning("legacy_texts_unavailable", LEGACY_TEXTS_FILE, &detail));
            LegacyTextTable::default()
        }
    };

    let deliveries = match read_file(data_dir, DELIVERIES_FILE) {
        Ok(content) => match sheet::parse_delivery_sheet(&content) {
            Ok(rows) => rows,
            Err(detail) => {
                warnings.push(warning("deliveries_unavailable", DELIVERIES_FILE, &detail));
                Vec::new()
            }
        },
        Err(detail) => {
            warnings.push(warning("deliveries_unavailable", DELIVERIES_FILE, &detail));
            Vec::new()
        }
    };

    let texts = match read_file(data_dir, TEXT_CATALOG_FILE) {
        Ok(content) => match texts::parse_text_catalog(&content) {
            Ok(catalog) => Some(catalog),
            Err(detail) => {
                warnings.push(warning("text_catalog_unavailable", TEXT_CATALOG_FILE, &detail));
                None
            }
        },
        Err(detail) => {
            warnings.push(warning("text_catalog_unavailable", TEXT_CATALOG_FILE, &detail));
            None
        }
    };

    Ok(CatalogSnapshot {
        data_dir: data_dir.to_path_buf(),
        assignments,
        legacy_texts,
        deliveries,
        texts,
        warnings,
    })
}

fn read_file(data_dir: &Path, file_name: &str) -> Result<String, String> {
    let path = data_dir.join(file_name);
    if !path.is_file() {
        return Err(format!("`{}` not found", path.display()));
    }
    fs::read_to_string(&path).map_err(|error| format!("`{}`: {error}", path.display()))
}

fn warning(code: &str, file_name: &str, detail: &str) -> CatalogWarning {
    CatalogWarning {
        code: code.to_string(),
        message: format!("{file_name}: {detail}"),
    }
}

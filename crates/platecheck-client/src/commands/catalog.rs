use std::path::Path;

use crate::catalog::{
    ASSIGNMENTS_FILE, DELIVERIES_FILE, LEGACY_TEXTS_FILE, TEXT_CATALOG_FILE, load_snapshot,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CatalogFileStatus, CatalogStatusData, CatalogWarning};
use crate::state::{resolve_data_dir, resolve_store_home};
use crate::ClientResult;

#[derive(Debug, Default)]
pub struct CatalogStatusOptions<'a> {
    pub data_dir_override: Option<&'a Path>,
    pub home_override: Option<&'a Path>,
}

pub fn status(data_dir: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    status_with_options(CatalogStatusOptions {
        data_dir_override: data_dir,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn status_with_options(options: CatalogStatusOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let home = resolve_store_home(options.home_override)?;
    let data_dir = resolve_data_dir(options.data_dir_override, &home)?;

    // Orientation never fails on missing data: a missing directory is
    // exactly what this command is for diagnosing.
    if !data_dir.is_dir() {
        let data = CatalogStatusData {
            data_dir: data_dir.display().to_string(),
            files: [
                ASSIGNMENTS_FILE,
                LEGACY_TEXTS_FILE,
                DELIVERIES_FILE,
                TEXT_CATALOG_FILE,
            ]
            .iter()
            .map(|file| CatalogFileStatus {
                file: (*file).to_string(),
                present: false,
                rows: 0,
            })
            .collect(),
            warnings: vec![CatalogWarning {
                code: "catalog_dir_not_found".to_string(),
                message: format!("`{}` does not exist", data_dir.display()),
            }],
        };
        return success("catalog status", data);
    }

    let snapshot = load_snapshot(&data_dir)?;

    let files = vec![
        CatalogFileStatus {
            file: ASSIGNMENTS_FILE.to_string(),
            present: snapshot.assignments.is_some(),
            rows: snapshot
                .assignments
                .as_ref()
                .map(|rows| rows.len() as i64)
                .unwrap_or(0),
        },
        CatalogFileStatus {
            file: LEGACY_TEXTS_FILE.to_string(),
            present: data_dir.join(LEGACY_TEXTS_FILE).is_file(),
            rows: snapshot.legacy_texts.rows.len() as i64,
        },
        CatalogFileStatus {
            file: DELIVERIES_FILE.to_string(),
            present: data_dir.join(DELIVERIES_FILE).is_file(),
            rows: snapshot.deliveries.len() as i64,
        },
        CatalogFileStatus {
            file: TEXT_CATALOG_FILE.to_string(),
            present: snapshot.texts.is_some(),
            rows: snapshot
                .texts
                .as_ref()
                .map(|catalog| catalog.entries.len() as i64)
                .unwrap_or(0),
        },
    ];

    let data = CatalogStatusData {
        data_dir: data_dir.display().to_string(),
        files,
        warnings: snapshot.warnings.clone(),
    };

    success("catalog status", data)
}

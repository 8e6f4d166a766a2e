use std::path::Path;

use crate::catalog::load_snapshot;
use crate::commands::{assignment_item, found_assignments, load_store_context, validated_query};
use crate::completion::store::CompletionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::FindData;
use crate::state::resolve_data_dir;
use crate::ClientResult;

#[derive(Debug, Default)]
pub struct FindOptions<'a> {
    pub data_dir_override: Option<&'a Path>,
    pub home_override: Option<&'a Path>,
}

pub fn run(query: &str, data_dir: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    run_with_options(
        query,
        FindOptions {
            data_dir_override: data_dir,
            home_override: None,
        },
    )
}

#[doc(hidden)]
pub fn run_with_options(query: &str, options: FindOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let query = validated_query(query)?;
    let context = load_store_context(options.home_override)?;
    let data_dir = resolve_data_dir(options.data_dir_override, &context.home)?;

    let snapshot = load_snapshot(&data_dir)?;
    let assignments = found_assignments(&query, &snapshot)?;

    let store = CompletionStore::open(&context.db_path)?;
    let mut rows = Vec::with_capacity(assignments.len());
    for (index, assignment) in assignments.iter().enumerate() {
        rows.push(assignment_item(index + 1, assignment, &store)?);
    }

    let data = FindData {
        query,
        data_dir: data_dir.display().to_string(),
        total: rows.len() as i64,
        rows,
        warnings: snapshot.warnings.clone(),
    };

    success("find", data)
}

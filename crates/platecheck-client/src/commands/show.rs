use std::path::Path;

use crate::catalog::load_snapshot;
use crate::commands::{assignment_item, found_assignments, load_store_context, validated_query};
use crate::completion::store::CompletionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ShowData;
use crate::lookup::delivery::delivery_service;
use crate::lookup::text::resolve_text;
use crate::render::template::render_instruction;
use crate::state::resolve_data_dir;
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct ShowOptions<'a> {
    pub data_dir_override: Option<&'a Path>,
    pub home_override: Option<&'a Path>,
}

pub fn run(query: &str, pick: usize, data_dir: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    run_with_options(
        query,
        pick,
        ShowOptions {
            data_dir_override: data_dir,
            home_override: None,
        },
    )
}

#[doc(hidden)]
pub fn run_with_options(
    query: &str,
    pick: usize,
    options: ShowOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let query = validated_query(query)?;
    let context = load_store_context(options.home_override)?;
    let data_dir = resolve_data_dir(options.data_dir_override, &context.home)?;

    let snapshot = load_snapshot(&data_dir)?;
    let assignments = found_assignments(&query, &snapshot)?;

    if pick == 0 || pick > assignments.len() {
        return Err(ClientError::pick_out_of_range(pick, assignments.len()));
    }
    let assignment = &assignments[pick - 1];

    let resolved = resolve_text(&assignment.partner, &assignment.method, &snapshot);
    let service = delivery_service(assignment, &snapshot.deliveries);
    let general_template = snapshot
        .texts
        .as_ref()
        .and_then(|catalog| catalog.general_template.as_deref());

    // The search input doubles as the tester name in the rendered
    // instruction, exactly as typed.
    let rendered = render_instruction(&resolved, assignment, general_template, &service, &query);

    let store = CompletionStore::open(&context.db_path)?;
    let data = ShowData {
        query,
        assignment: assignment_item(pick, assignment, &store)?,
        text_source: resolved.source().to_string(),
        delivery_service: service,
        rendered,
        warnings: snapshot.warnings.clone(),
    };

    success("show", data)
}

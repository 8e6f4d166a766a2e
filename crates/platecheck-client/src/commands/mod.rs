pub mod catalog;
pub mod done;
pub mod find;
pub mod show;

use std::path::Path;

use crate::catalog::CatalogSnapshot;
use crate::completion::key::completion_key;
use crate::completion::store::CompletionStore;
use crate::contracts::types::AssignmentItem;
use crate::lookup::assignments::Assignment;
use crate::setup::{StoreContext, ensure_initialized, ensure_initialized_at};
use crate::{ClientError, ClientResult};

pub(crate) fn load_store_context(home_override: Option<&Path>) -> ClientResult<StoreContext> {
    match home_override {
        Some(path) => ensure_initialized_at(path),
        None => ensure_initialized(),
    }
}

pub(crate) fn validated_query(raw_query: &str) -> ClientResult<String> {
    let trimmed = raw_query.trim();
    if trimmed.is_empty() {
        return Err(ClientError::empty_search_name());
    }
    Ok(trimmed.to_string())
}

pub(crate) fn assignment_item(
    pick: usize,
    assignment: &Assignment,
    store: &CompletionStore,
) -> ClientResult<AssignmentItem> {
    let key = completion_key(
        &assignment.partner,
        &assignment.restaurant,
        &assignment.method,
    );
    Ok(AssignmentItem {
        pick: pick as i64,
        id: assignment.id.clone(),
        partner: assignment.partner.clone(),
        restaurant: assignment.restaurant.clone(),
        address: assignment.address.clone(),
        city: assignment.city.clone(),
        method: assignment.method.clone(),
        wave: assignment.wave.clone(),
        display: assignment.display.clone(),
        completed: store.status(&key)?,
    })
}

pub(crate) fn found_assignments(
    query: &str,
    snapshot: &CatalogSnapshot,
) -> ClientResult<Vec<Assignment>> {
    let rows = snapshot.require_assignments()?;
    Ok(crate::lookup::assignments::find_assignments(query, rows))
}

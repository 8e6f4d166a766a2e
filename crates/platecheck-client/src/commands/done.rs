use std::path::Path;

use crate::commands::load_store_context;
use crate::completion::key::completion_key;
use crate::completion::mirror::{CompletionMirror, MirrorRecord, mirror_from_env};
use crate::completion::store::CompletionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DoneData, DoneListData, DoneRecord};
use crate::ClientResult;

#[derive(Default)]
pub struct DoneOptions<'a> {
    pub home_override: Option<&'a Path>,
    pub tester: Option<String>,
    pub mirror_override: Option<&'a dyn CompletionMirror>,
}

pub fn mark(
    partner: &str,
    restaurant: &str,
    method: &str,
    tester: Option<String>,
) -> ClientResult<SuccessEnvelope> {
    mark_with_options(
        partner,
        restaurant,
        method,
        DoneOptions {
            tester,
            ..DoneOptions::default()
        },
    )
}

#[doc(hidden)]
pub fn mark_with_options(
    partner: &str,
    restaurant: &str,
    method: &str,
    options: DoneOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    write_flag("mark", partner, restaurant, method, Some(true), options)
}

pub fn clear(
    partner: &str,
    restaurant: &str,
    method: &str,
    tester: Option<String>,
) -> ClientResult<SuccessEnvelope> {
    clear_with_options(
        partner,
        restaurant,
        method,
        DoneOptions {
            tester,
            ..DoneOptions::default()
        },
    )
}

#[doc(hidden)]
pub fn clear_with_options(
    partner: &str,
    restaurant: &str,
    method: &str,
    options: DoneOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    write_flag("clear", partner, restaurant, method, Some(false), options)
}

pub fn toggle(
    partner: &str,
    restaurant: &str,
    method: &str,
    tester: Option<String>,
) -> ClientResult<SuccessEnvelope> {
    toggle_with_options(
        partner,
        restaurant,
        method,
        DoneOptions {
            tester,
            ..DoneOptions::default()
        },
    )
}

#[doc(hidden)]
pub fn toggle_with_options(
    partner: &str,
    restaurant: &str,
    method: &str,
    options: DoneOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    write_flag("toggle", partner, restaurant, method, None, options)
}

pub fn status(partner: &str, restaurant: &str, method: &str) -> ClientResult<SuccessEnvelope> {
    status_with_options(partner, restaurant, method, DoneOptions::default())
}

#[doc(hidden)]
pub fn status_with_options(
    partner: &str,
    restaurant: &str,
    method: &str,
    options: DoneOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let context = load_store_context(options.home_override)?;
    let store = CompletionStore::open(&context.db_path)?;
    let key = completion_key(partner, restaurant, method);
    let completed = store.status(&key)?;

    let data = DoneData {
        action: "status".to_string(),
        key,
        partner: partner.to_string(),
        restaurant: restaurant.to_string(),
        method: method.to_string(),
        completed,
        mirrored: false,
    };
    success("done status", data)
}

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_options(DoneOptions::default())
}

#[doc(hidden)]
pub fn list_with_options(options: DoneOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = load_store_context(options.home_override)?;
    let store = CompletionStore::open(&context.db_path)?;

    let rows = store
        .list()?
        .into_iter()
        .map(|(key, updated_at)| DoneRecord { key, updated_at })
        .collect::<Vec<DoneRecord>>();

    success("done list", DoneListData { rows })
}

/// Shared write path: local store first (synchronous, authoritative),
/// then the best-effort mirror. Mirror errors never surface.
fn write_flag(
    action: &str,
    partner: &str,
    restaurant: &str,
    method: &str,
    target: Option<bool>,
    options: DoneOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let context = load_store_context(options.home_override)?;
    let store = CompletionStore::open(&context.db_path)?;
    let key = completion_key(partner, restaurant, method);

    let completed = match target {
        Some(value) => {
            store.set(&key, value)?;
            value
        }
        None => store.toggle(&key)?,
    };

    let env_mirror;
    let mirror: &dyn CompletionMirror = match options.mirror_override {
        Some(mirror) => mirror,
        None => {
            env_mirror = mirror_from_env();
            env_mirror.as_ref()
        }
    };
    let mirrored = mirror.is_configured();
    mirror.push(&MirrorRecord {
        tester: options.tester.clone().unwrap_or_default(),
        partner: partner.to_string(),
        restaurant: restaurant.to_string(),
        method: method.to_string(),
        completed,
    });

    let data = DoneData {
        action: action.to_string(),
        key,
        partner: partner.to_string(),
        restaurant: restaurant.to_string(),
        method: method.to_string(),
        completed,
        mirrored,
    };
    success(&format!("done {action}"), data)
}

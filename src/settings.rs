//! Selection settings: sanitize on write, tolerate anything on read.
//!
//! The administrator picks which content types get a preview panel and which
//! named sizes appear in it. Both picks persist as independent entries in the
//! host's settings store, each a JSON array of identifier strings. There is
//! no schema version; an absent key means an empty set.
//!
//! The contract is asymmetric by design:
//!
//! - **Write path**: raw submitted values are sanitized against the host's
//!   currently valid identifier sets. Anything that is not list-shaped
//!   becomes the empty set — never an error. Unknown identifiers are
//!   silently dropped.
//! - **Read path**: stored values are *not* re-validated against the
//!   registries. A size or type that was deregistered after a save stays in
//!   the stored set until the next save and is skipped at render time
//!   instead.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::{ContentType, SettingsStore, StoreError};

/// Settings key holding the selected content-type identifiers.
pub const CONTENT_TYPES_KEY: &str = "crop_preview_content_types";

/// Settings key holding the selected size names.
pub const SIZES_KEY: &str = "crop_preview_sizes";

/// Sentinel size name for the original, unresized image. Valid in a size
/// selection but never present in the host's named-size registry.
pub const ORIGINAL_SIZE: &str = "full";

/// The two persisted selection sets.
///
/// `BTreeSet` keeps membership tests cheap and serialization deterministic;
/// display order always comes from the host registries, not from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub content_types: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

/// String members of a JSON array. Non-array input yields nothing, and
/// non-string elements inside an array are not identifiers.
fn string_members(candidate: &Value) -> Vec<&str> {
    match candidate.as_array() {
        Some(items) => items.iter().filter_map(Value::as_str).collect(),
        None => Vec::new(),
    }
}

/// Sanitize a raw content-type selection against the registered types.
///
/// Non-list-shaped input produces the empty set. Otherwise the result is the
/// intersection of the submitted strings with *all* registered type names —
/// deliberately not just the featured-image-capable subset the settings UI
/// displays, so a type that toggles its capability off and back on does not
/// lose its saved selection in between.
pub fn sanitize_content_types(candidate: &Value, registered: &[ContentType]) -> BTreeSet<String> {
    string_members(candidate)
        .into_iter()
        .filter(|name| registered.iter().any(|t| t.name == *name))
        .map(str::to_string)
        .collect()
}

/// Sanitize a raw size selection against the registered size names plus the
/// [`ORIGINAL_SIZE`] sentinel.
///
/// Non-list-shaped input produces the empty set.
pub fn sanitize_size_selections(candidate: &Value, known_names: &[String]) -> BTreeSet<String> {
    string_members(candidate)
        .into_iter()
        .filter(|name| *name == ORIGINAL_SIZE || known_names.iter().any(|k| k == name))
        .map(str::to_string)
        .collect()
}

/// A stored selection entry, read leniently: absent or non-list-shaped
/// values are the empty set.
fn stored_set(value: Option<Value>) -> BTreeSet<String> {
    match value {
        Some(v) => string_members(&v).into_iter().map(str::to_string).collect(),
        None => BTreeSet::new(),
    }
}

/// Load both selection sets from the settings store.
pub fn load_selections(store: &dyn SettingsStore) -> Selections {
    Selections {
        content_types: stored_set(store.read(CONTENT_TYPES_KEY)),
        sizes: stored_set(store.read(SIZES_KEY)),
    }
}

/// Persist both selection sets.
///
/// Two independent writes; each key is atomic at the host but there is no
/// transaction across the pair, so the first failure is propagated and the
/// other key keeps whatever it had.
pub fn persist(store: &dyn SettingsStore, selections: &Selections) -> Result<(), StoreError> {
    let types: Vec<&str> = selections.content_types.iter().map(String::as_str).collect();
    let sizes: Vec<&str> = selections.sizes.iter().map(String::as_str).collect();
    store.write(CONTENT_TYPES_KEY, serde_json::json!(types))?;
    store.write(SIZES_KEY, serde_json::json!(sizes))?;
    Ok(())
}

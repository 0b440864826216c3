//! String-table consistency checks.

use serde::Serialize;

use crate::table::StringTable;

/// Leaf keys of `base` that `other` does not resolve to a string.
#[must_use]
pub fn missing_keys(base: &StringTable, other: &StringTable) -> Vec<String> {
    base.leaf_keys()
        .into_iter()
        .filter(|key| !other.contains(key))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub base: Vec<String>,
    pub other: Vec<String>,
}

/// Keys present in both tables whose `{name}` placeholder sets differ.
#[must_use]
pub fn placeholder_mismatches(
    base: &StringTable,
    other: &StringTable,
) -> Vec<PlaceholderMismatch> {
    base.leaf_keys()
        .into_iter()
        .filter(|key| other.contains(key))
        .filter_map(|key| {
            let ours = base.placeholders(&key);
            let theirs = other.placeholders(&key);
            (ours != theirs).then(|| PlaceholderMismatch {
                base: ours.into_iter().collect(),
                other: theirs.into_iter().collect(),
                key,
            })
        })
        .collect()
}

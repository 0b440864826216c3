//! Dotted-key translation lookup with fallback-to-key.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::table::{Lookup, StringTable};

/// Named substitutions for `{name}` placeholders.
pub type Params<'a> = BTreeMap<&'a str, &'a str>;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}]+)\}").unwrap_or_else(|err| panic!("placeholder pattern: {err}"))
});

/// Translate `key` against `table`.
///
/// Never fails: a missing key, or a key that names a nested group rather than
/// a string, resolves to `key` itself.
#[must_use]
pub fn resolve(table: &StringTable, key: &str, params: Option<&Params<'_>>) -> String {
    match table.lookup(key) {
        Lookup::Found(text) => interpolate(text, params).into_owned(),
        Lookup::Missing => {
            log::warn!("Translation key not found: {key}");
            key.to_string()
        }
        Lookup::NotAString => {
            log::warn!("Translation value is not a string for key: {key}");
            key.to_string()
        }
    }
}

/// Like [`resolve`] but reports the fallback case as `None`.
#[must_use]
pub fn try_resolve(table: &StringTable, key: &str, params: Option<&Params<'_>>) -> Option<String> {
    match table.lookup(key) {
        Lookup::Found(text) => Some(interpolate(text, params).into_owned()),
        Lookup::Missing | Lookup::NotAString => None,
    }
}

/// Replace every `{name}` that has an entry in `params`. Unknown placeholders
/// stay verbatim and substituted values are not scanned again.
#[must_use]
pub fn interpolate<'t>(text: &'t str, params: Option<&Params<'_>>) -> Cow<'t, str> {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return Cow::Borrowed(text);
    };
    PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
        params
            .get(&caps[1])
            .map_or_else(|| caps[0].to_string(), |value| (*value).to_string())
    })
}

pub(crate) fn placeholder_names(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

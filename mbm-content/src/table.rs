use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::error::ContentError;
use crate::locale::Locale;
use crate::resolve::placeholder_names;

/// Separator between key path segments.
pub const KEY_SEPARATOR: char = '.';

/// Nested key → string mapping for one locale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringTable {
    root: Value,
}

/// Outcome of walking a key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Missing,
    NotAString,
}

impl StringTable {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Parse a string-table document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    #[must_use]
    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut current = &self.root;
        for segment in key.split(KEY_SEPARATOR) {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => current = next,
                    None => return Lookup::Missing,
                },
                _ => return Lookup::Missing,
            }
        }
        current.as_str().map_or(Lookup::NotAString, Lookup::Found)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.lookup(key), Lookup::Found(_))
    }

    /// Insert a leaf, creating intermediate objects. Existing non-object
    /// values along the path are replaced.
    pub fn insert(&mut self, key: &str, text: &str) {
        let mut current = &mut self.root;
        for segment in key.split(KEY_SEPARATOR) {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let Some(map) = current.as_object_mut() else {
                return;
            };
            current = map.entry(segment.to_string()).or_insert(Value::Null);
        }
        *current = Value::String(text.to_string());
    }

    /// Dotted paths of every non-object leaf.
    #[must_use]
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        collect_keys("", &self.root, &mut out);
        out
    }

    /// Placeholder names used by the string at `key`.
    #[must_use]
    pub fn placeholders(&self, key: &str) -> BTreeSet<String> {
        match self.lookup(key) {
            Lookup::Found(text) => placeholder_names(text),
            _ => BTreeSet::new(),
        }
    }
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}{KEY_SEPARATOR}{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

/// One string table per supported locale, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<Locale, StringTable>,
}

impl Catalog {
    #[must_use]
    pub fn new(en: StringTable, ar: StringTable) -> Self {
        Self {
            tables: BTreeMap::from([(Locale::En, en), (Locale::Ar, ar)]),
        }
    }

    /// Build from raw documents. A document that fails to parse degrades to
    /// an empty table so every lookup falls back to the key.
    #[must_use]
    pub fn from_documents(en: &str, ar: &str) -> Self {
        let parse = |locale: Locale, json: &str| {
            StringTable::from_json(json).unwrap_or_else(|err| {
                log::error!("string table for {locale} failed to parse: {err}");
                StringTable::empty()
            })
        };
        Self::new(parse(Locale::En, en), parse(Locale::Ar, ar))
    }

    #[must_use]
    pub fn table(&self, locale: Locale) -> &StringTable {
        static EMPTY: once_cell::sync::Lazy<StringTable> =
            once_cell::sync::Lazy::new(StringTable::empty);
        self.tables.get(&locale).unwrap_or(&EMPTY)
    }
}

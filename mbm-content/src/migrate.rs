//! One-time migration of inline `<field>_ar` duplicates into the Arabic
//! string table.
//!
//! Record types ignore inline duplicates; translations are only ever read
//! through the keyed resolver. The keys an inline field feeds are found
//! through the record's own [`ContentRecord::translatable_fields`], so list
//! items, nested labels and shared category keys migrate exactly as the merge
//! reads them. Where a keyed entry already exists it wins and the inline
//! value is discarded.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{
    BlogPost, ContentDomain, ContentRecord, PortfolioItem, PricingPlan, Service, Testimonial,
};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::table::StringTable;

/// Prepended to every string of a field to see which translatable values it
/// feeds.
const MARK: char = '\u{1}';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Inline values written to the table.
    pub moved: usize,
    /// Inline values dropped because the keyed entry already existed.
    pub skipped_existing: usize,
    /// Records that had at least one inline field removed.
    pub records_touched: usize,
    /// Records without a string `id` or that do not parse as the domain's
    /// record type.
    pub records_skipped: usize,
    /// Inline fields left in the document because they feed no translatable
    /// value, as `<id>.<field>`.
    pub unmapped: Vec<String>,
}

impl MigrationReport {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.moved == 0 && self.skipped_existing == 0
    }

    /// Inline values found in the document, migrated or not.
    #[must_use]
    pub fn inline_fields(&self) -> usize {
        self.moved + self.skipped_existing + self.unmapped.len()
    }
}

type FieldValues = Vec<(String, String)>;

fn field_values<T: ContentRecord>(record: &Map<String, Value>) -> Option<FieldValues> {
    let mut parsed: T = serde_json::from_value(Value::Object(record.clone())).ok()?;
    Some(
        parsed
            .translatable_fields()
            .into_iter()
            .map(|f| (f.key, f.value.clone()))
            .collect(),
    )
}

fn with_field(record: &Map<String, Value>, field: &str, value: Value) -> Map<String, Value> {
    let mut copy = record.clone();
    copy.insert(field.to_string(), value);
    copy
}

fn mark(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(format!("{MARK}{text}")),
        Value::Array(items) => Value::Array(items.iter().map(mark).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), mark(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// `inline` laid over `base`: objects merge per key, arrays per position,
/// anything else is replaced.
fn overlay(base: &Value, inline: &Value) -> Value {
    match (base, inline) {
        (Value::Object(ours), Value::Object(theirs)) => {
            let mut merged = ours.clone();
            for (key, item) in theirs {
                let next = ours
                    .get(key)
                    .map_or_else(|| item.clone(), |existing| overlay(existing, item));
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (Value::Array(ours), Value::Array(theirs)) => Value::Array(
            ours.iter()
                .enumerate()
                .map(|(idx, existing)| {
                    theirs
                        .get(idx)
                        .map_or_else(|| existing.clone(), |item| overlay(existing, item))
                })
                .collect(),
        ),
        _ => inline.clone(),
    }
}

/// `(key, inline text)` for every translatable value `field` feeds.
///
/// Pairing is by position in the record's field list, so keys derived from
/// the authored value (tags, categories) stay keyed by the authored text.
fn fed_values<T: ContentRecord>(
    record: &Map<String, Value>,
    authored: &FieldValues,
    field: &str,
    inline: &Value,
) -> FieldValues {
    let base = record.get(field).unwrap_or(inline);
    let (Some(marked), Some(shadow)) = (
        field_values::<T>(&with_field(record, field, mark(base))),
        field_values::<T>(&with_field(record, field, overlay(base, inline))),
    ) else {
        return Vec::new();
    };
    if marked.len() != authored.len() || shadow.len() != authored.len() {
        return Vec::new();
    }
    authored
        .iter()
        .zip(marked.iter().zip(shadow))
        .filter(|((_, text), ((_, marked), _))| {
            marked.starts_with(MARK) && !text.starts_with(MARK)
        })
        .map(|((key, _), (_, (_, translated)))| (key.clone(), translated))
        .collect()
}

/// Move inline Arabic fields of a `T` document into `table`, stripping them
/// from the records.
///
/// # Errors
///
/// Returns [`ContentError::NotAnArray`] when the document is not a JSON array.
pub fn migrate_inline_fields<T: ContentRecord>(
    document: &mut Value,
    table: &mut StringTable,
) -> Result<MigrationReport, ContentError> {
    let domain = T::DOMAIN;
    let records = document
        .as_array_mut()
        .ok_or(ContentError::NotAnArray(domain))?;
    let suffix = format!("_{}", Locale::Ar.tag());
    let mut report = MigrationReport::default();

    for record in records.iter_mut().filter_map(Value::as_object_mut) {
        let id = record.get("id").and_then(Value::as_str).map(str::to_string);
        let (Some(id), Some(authored)) = (id, field_values::<T>(record)) else {
            report.records_skipped += 1;
            continue;
        };
        let inline_names: Vec<String> = record
            .keys()
            .filter(|name| name.len() > suffix.len() && name.ends_with(&suffix))
            .cloned()
            .collect();

        let mut touched = false;
        for inline_name in inline_names {
            let field = &inline_name[..inline_name.len() - suffix.len()];
            let fed = record
                .get(&inline_name)
                .map(|inline| fed_values::<T>(record, &authored, field, inline))
                .unwrap_or_default();
            if fed.is_empty() {
                log::warn!("{domain}/{id}: {inline_name} feeds no translatable field");
                report.unmapped.push(format!("{id}.{inline_name}"));
                continue;
            }
            for (key, text) in fed {
                let unchanged = authored.iter().any(|(k, v)| *k == key && *v == text);
                if unchanged {
                    continue;
                }
                if table.contains(&key) {
                    report.skipped_existing += 1;
                } else {
                    table.insert(&key, &text);
                    report.moved += 1;
                }
            }
            record.shift_remove(&inline_name);
            touched = true;
        }
        if touched {
            report.records_touched += 1;
        }
    }
    Ok(report)
}

/// [`migrate_inline_fields`] for the record type of `domain`.
///
/// # Errors
///
/// Returns [`ContentError::NotAnArray`] when the document is not a JSON array.
pub fn migrate_document(
    domain: ContentDomain,
    document: &mut Value,
    table: &mut StringTable,
) -> Result<MigrationReport, ContentError> {
    match domain {
        ContentDomain::Services => migrate_inline_fields::<Service>(document, table),
        ContentDomain::Portfolio => migrate_inline_fields::<PortfolioItem>(document, table),
        ContentDomain::Testimonials => migrate_inline_fields::<Testimonial>(document, table),
        ContentDomain::Blog => migrate_inline_fields::<BlogPost>(document, table),
        ContentDomain::Pricing => migrate_inline_fields::<PricingPlan>(document, table),
    }
}

use crate::domain::ContentRecord;
use crate::filter::{ALL_CATEGORIES, categories, filter_by_category};
use crate::merge::merge_translations;
use crate::table::StringTable;

/// Per-domain presentation state: authored records, their merge for the
/// active locale, and the active category filter.
///
/// The filtered view is derived on demand and never stored.
#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    authored: Vec<T>,
    merged: Vec<T>,
    filter: String,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self {
            authored: Vec::new(),
            merged: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
        }
    }
}

impl<T: ContentRecord> CollectionView<T> {
    #[must_use]
    pub fn new(authored: Vec<T>, table: &StringTable) -> Self {
        let merged = merge_translations(&authored, table);
        Self {
            authored,
            merged,
            filter: ALL_CATEGORIES.to_string(),
        }
    }

    /// Replace the source collection (a fetch completed).
    pub fn set_records(&mut self, authored: Vec<T>, table: &StringTable) {
        self.merged = merge_translations(&authored, table);
        self.authored = authored;
    }

    /// Re-merge from the authored records after a locale change.
    pub fn relocalize(&mut self, table: &StringTable) {
        self.merged = merge_translations(&self.authored, table);
    }

    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.filter = category.into();
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn merged(&self) -> &[T] {
        &self.merged
    }

    #[must_use]
    pub fn authored(&self) -> &[T] {
        &self.authored
    }

    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        filter_by_category(&self.merged, &self.filter)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(&self.authored)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authored.is_empty()
    }
}

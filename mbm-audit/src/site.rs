use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mbm_content::{
    ContentDomain, ContentRecord, ContentSource, DirectorySource, Locale, StringTable,
    parse_records,
};
use serde_json::Value;

/// On-disk layout of a site: content documents under
/// `<content>/data/<domain>.json`, string tables under `<i18n>/<code>.json`.
#[derive(Debug, Clone)]
pub struct Site {
    content: DirectorySource,
    i18n_dir: PathBuf,
}

impl Site {
    pub fn new(content_root: impl Into<PathBuf>, i18n_dir: impl Into<PathBuf>) -> Self {
        Self {
            content: DirectorySource::new(content_root),
            i18n_dir: i18n_dir.into(),
        }
    }

    pub fn table_path(&self, locale: Locale) -> PathBuf {
        self.i18n_dir.join(format!("{}.json", locale.tag()))
    }

    pub fn document_path(&self, domain: ContentDomain) -> PathBuf {
        self.content.document_path(domain)
    }

    pub fn load_table(&self, locale: Locale) -> Result<StringTable> {
        let path = self.table_path(locale);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        StringTable::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn load_document(&self, domain: ContentDomain) -> Result<Value> {
        let path = self.document_path(domain);
        let text = self
            .content
            .fetch(domain)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn load_records<T: ContentRecord>(&self) -> Result<Vec<T>> {
        let path = self.document_path(T::DOMAIN);
        let text = self
            .content
            .fetch(T::DOMAIN)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_records(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Pretty-print `value` to `path` with a trailing newline.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

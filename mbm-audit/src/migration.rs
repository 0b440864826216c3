use std::path::PathBuf;

use anyhow::{Context, Result};
use mbm_content::{ContentDomain, Locale, MigrationReport, migrate_document};
use serde_json::Value;

use crate::site::{Site, write_json};

#[derive(Debug, Clone)]
pub struct DomainMigration {
    pub domain: ContentDomain,
    pub report: MigrationReport,
}

/// Move inline `_ar` fields of every domain document into the Arabic table.
///
/// Nothing is written unless `write` is set. The table is saved before the
/// stripped documents so an interrupted run never loses a translation.
pub fn run_migration(site: &Site, write: bool) -> Result<Vec<DomainMigration>> {
    let mut ar = site.load_table(Locale::Ar)?;
    let mut outcomes = Vec::new();
    let mut rewrites: Vec<(PathBuf, Value)> = Vec::new();

    for domain in ContentDomain::ALL {
        let path = site.document_path(domain);
        if !path.exists() {
            log::warn!("skipping {domain}: {} not found", path.display());
            continue;
        }
        let mut document = site.load_document(domain)?;
        let report = migrate_document(domain, &mut document, &mut ar)
            .with_context(|| format!("failed to migrate {}", path.display()))?;
        if report.records_touched > 0 {
            rewrites.push((path, document));
        }
        outcomes.push(DomainMigration { domain, report });
    }

    if write && !rewrites.is_empty() {
        write_json(&site.table_path(Locale::Ar), ar.as_value())?;
        for (path, document) in &rewrites {
            write_json(path, document)?;
        }
    }

    Ok(outcomes)
}

use anyhow::Result;
use mbm_content::{
    BlogPost, ContentDomain, ContentRecord, Locale, PlaceholderMismatch, PortfolioItem,
    PricingPlan, Service, StringTable, Testimonial, migrate_document, missing_keys,
    placeholder_mismatches, untranslated_fields,
};
use serde::Serialize;

use crate::site::Site;

/// A translatable record field with no Arabic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGap {
    pub domain: ContentDomain,
    pub record: String,
    pub key: String,
}

/// Inline `_ar` fields still waiting for `migrate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingInline {
    pub domain: ContentDomain,
    pub fields: usize,
    /// `<id>.<field>` entries that map to no translatable field.
    pub unmapped: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub missing_in_ar: Vec<String>,
    pub missing_in_en: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    pub untranslated: Vec<FieldGap>,
    pub pending_inline: Vec<PendingInline>,
    pub load_errors: Vec<String>,
}

impl AuditReport {
    /// Problems that fail a `--strict` run.
    ///
    /// Untranslated record fields are informational: records fall back to
    /// their authored text.
    pub fn problem_count(&self) -> usize {
        self.missing_in_ar.len()
            + self.missing_in_en.len()
            + self.placeholder_mismatches.len()
            + self.pending_inline.len()
            + self.load_errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

/// Audit the string tables and every content domain of `site`.
///
/// Missing or malformed tables abort the run; a broken domain document is
/// recorded and the remaining domains are still audited.
pub fn run_audit(site: &Site) -> Result<AuditReport> {
    let en = site.load_table(Locale::En)?;
    let ar = site.load_table(Locale::Ar)?;

    let mut report = AuditReport {
        missing_in_ar: missing_keys(&en, &ar),
        missing_in_en: missing_keys(&ar, &en),
        placeholder_mismatches: placeholder_mismatches(&en, &ar),
        ..AuditReport::default()
    };

    for domain in ContentDomain::ALL {
        match domain_gaps(site, &ar, domain) {
            Ok(gaps) => report.untranslated.extend(gaps),
            Err(err) => {
                log::error!("{domain}: {err:#}");
                report.load_errors.push(format!("{err:#}"));
                continue;
            }
        }
        if let Some(pending) = pending_inline(site, &ar, domain)? {
            report.pending_inline.push(pending);
        }
    }

    Ok(report)
}

fn domain_gaps(site: &Site, ar: &StringTable, domain: ContentDomain) -> Result<Vec<FieldGap>> {
    match domain {
        ContentDomain::Services => gaps::<Service>(site, ar),
        ContentDomain::Portfolio => gaps::<PortfolioItem>(site, ar),
        ContentDomain::Testimonials => gaps::<Testimonial>(site, ar),
        ContentDomain::Blog => gaps::<BlogPost>(site, ar),
        ContentDomain::Pricing => gaps::<PricingPlan>(site, ar),
    }
}

fn gaps<T: ContentRecord>(site: &Site, ar: &StringTable) -> Result<Vec<FieldGap>> {
    let records = site.load_records::<T>()?;
    Ok(untranslated_fields(&records, ar)
        .into_iter()
        .map(|(record, key)| FieldGap {
            domain: T::DOMAIN,
            record,
            key,
        })
        .collect())
}

fn pending_inline(
    site: &Site,
    ar: &StringTable,
    domain: ContentDomain,
) -> Result<Option<PendingInline>> {
    let mut document = site.load_document(domain)?;
    let mut scratch = ar.clone();
    let dry_run = migrate_document(domain, &mut document, &mut scratch)?;
    let fields = dry_run.inline_fields();
    Ok((fields > 0).then(|| PendingInline {
        domain,
        fields,
        unmapped: dry_run.unmapped,
    }))
}

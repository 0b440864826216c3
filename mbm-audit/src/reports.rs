use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::audit::AuditReport;
use crate::migration::DomainMigration;

pub fn generate_console_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "🌐 Translation Coverage".bright_cyan().bold())?;
    writeln!(out, "{}", "=======================".cyan())?;

    section(out, "Missing in ar", &report.missing_in_ar)?;
    section(out, "Missing in en", &report.missing_in_en)?;

    let drift: Vec<String> = report
        .placeholder_mismatches
        .iter()
        .map(|m| format!("{}: en {:?} / ar {:?}", m.key, m.base, m.other))
        .collect();
    section(out, "Placeholder mismatches", &drift)?;

    let pending: Vec<String> = report
        .pending_inline
        .iter()
        .map(|p| {
            let mut line = format!("{}: {} inline field(s)", p.domain, p.fields);
            if !p.unmapped.is_empty() {
                line.push_str(&format!(", unmapped {}", p.unmapped.join(", ")));
            }
            line
        })
        .collect();
    section(out, "Pending inline translations", &pending)?;
    section(out, "Load errors", &report.load_errors)?;

    writeln!(
        out,
        "{} {}",
        "ℹ️  Untranslated record fields:".yellow(),
        report.untranslated.len()
    )?;
    for gap in &report.untranslated {
        writeln!(out, "     • {} ({})", gap.key, gap.record.dimmed())?;
    }
    writeln!(out)?;

    if report.is_clean() {
        writeln!(out, "{}", "✅ PASS".green())?;
    } else {
        writeln!(
            out,
            "{} {} problem(s)",
            "❌ FAIL".red(),
            report.problem_count()
        )?;
    }
    Ok(())
}

fn section(out: &mut dyn Write, title: &str, items: &[String]) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "{} {title}: 0", "✅".green())?;
        return Ok(());
    }
    writeln!(out, "{} {title}: {}", "❌".red(), items.len())?;
    for item in items {
        writeln!(out, "     • {}", item.red())?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    writeln!(out, "# Translation Coverage\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Missing in ar**: {}", report.missing_in_ar.len())?;
    writeln!(out, "- **Missing in en**: {}", report.missing_in_en.len())?;
    writeln!(
        out,
        "- **Placeholder mismatches**: {}",
        report.placeholder_mismatches.len()
    )?;
    writeln!(
        out,
        "- **Pending inline translations**: {}",
        report.pending_inline.len()
    )?;
    writeln!(out, "- **Untranslated fields**: {}", report.untranslated.len())?;
    writeln!(out, "- **Load errors**: {}\n", report.load_errors.len())?;

    if !report.missing_in_ar.is_empty() || !report.missing_in_en.is_empty() {
        writeln!(out, "## Missing Keys\n")?;
        for key in &report.missing_in_ar {
            writeln!(out, "- `{key}` (ar)")?;
        }
        for key in &report.missing_in_en {
            writeln!(out, "- `{key}` (en)")?;
        }
        writeln!(out)?;
    }

    if !report.untranslated.is_empty() {
        writeln!(out, "## Untranslated Fields\n")?;
        writeln!(out, "| Domain | Record | Key |")?;
        writeln!(out, "|--------|--------|-----|")?;
        for gap in &report.untranslated {
            writeln!(out, "| {} | {} | `{}` |", gap.domain, gap.record, gap.key)?;
        }
        writeln!(out)?;
    }

    for err in &report.load_errors {
        writeln!(out, "> ⚠️ {err}")?;
    }
    Ok(())
}

pub fn generate_migration_report(
    out: &mut dyn Write,
    outcomes: &[DomainMigration],
    written: bool,
) -> Result<()> {
    writeln!(out, "{}", "🔁 Inline Translation Migration".bright_cyan().bold())?;
    writeln!(out, "{}", "===============================".cyan())?;
    for outcome in outcomes {
        let r = &outcome.report;
        writeln!(
            out,
            "{:14} moved {}, kept existing {}, records touched {}",
            outcome.domain.to_string().bold(),
            r.moved,
            r.skipped_existing,
            r.records_touched
        )?;
        if r.records_skipped > 0 {
            writeln!(
                out,
                "               {} record(s) without id or unreadable, skipped",
                r.records_skipped.to_string().yellow()
            )?;
        }
        for field in &r.unmapped {
            writeln!(
                out,
                "               {} left in place: no matching field",
                field.as_str().yellow()
            )?;
        }
    }
    let total: usize = outcomes.iter().map(|o| o.report.moved).sum();
    if written {
        writeln!(out, "✅ Migrated {total} field(s)")?;
    } else {
        writeln!(out, "Dry run: {total} field(s) would move; rerun with --write")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{FieldGap, PendingInline};
    use mbm_content::{ContentDomain, MigrationReport};

    fn render(f: impl Fn(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("report renders");
        String::from_utf8(buf).expect("utf8")
    }

    fn sample() -> AuditReport {
        AuditReport {
            missing_in_ar: vec!["nav.contact".into()],
            untranslated: vec![FieldGap {
                domain: ContentDomain::Blog,
                record: "seo".into(),
                key: "blog.seo_title".into(),
            }],
            ..AuditReport::default()
        }
    }

    #[test]
    fn console_report_lists_problems() {
        let text = render(|out| generate_console_report(out, &sample()));
        assert!(text.contains("Missing in ar: 1"));
        assert!(text.contains("nav.contact"));
        assert!(text.contains("blog.seo_title"));
        assert!(text.contains("1 problem(s)"));
    }

    #[test]
    fn markdown_report_tabulates_gaps() {
        let text = render(|out| generate_markdown_report(out, &sample()));
        assert!(text.contains("- `nav.contact` (ar)"));
        assert!(text.contains("| blog | seo | `blog.seo_title` |"));
    }

    #[test]
    fn json_report_round_trips_counts() {
        let text = render(|out| generate_json_report(out, &sample()));
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["missing_in_ar"][0], "nav.contact");
        assert_eq!(value["untranslated"][0]["domain"], "blog");
    }

    #[test]
    fn migration_report_marks_dry_runs() {
        let outcomes = vec![DomainMigration {
            domain: ContentDomain::Portfolio,
            report: MigrationReport {
                moved: 2,
                records_touched: 1,
                ..MigrationReport::default()
            },
        }];
        let text = render(|out| generate_migration_report(out, &outcomes, false));
        assert!(text.contains("2 field(s) would move"));
        let text = render(|out| generate_migration_report(out, &outcomes, true));
        assert!(text.contains("Migrated 2 field(s)"));
    }

    #[test]
    fn unmapped_inline_fields_are_named() {
        let outcomes = vec![DomainMigration {
            domain: ContentDomain::Testimonials,
            report: MigrationReport {
                unmapped: vec!["sara-k.date_ar".into()],
                ..MigrationReport::default()
            },
        }];
        let text = render(|out| generate_migration_report(out, &outcomes, false));
        assert!(text.contains("sara-k.date_ar"));

        let report = AuditReport {
            pending_inline: vec![PendingInline {
                domain: ContentDomain::Testimonials,
                fields: 1,
                unmapped: vec!["sara-k.date_ar".into()],
            }],
            ..AuditReport::default()
        };
        let text = render(|out| generate_console_report(out, &report));
        assert!(text.contains("testimonials: 1 inline field(s), unmapped sara-k.date_ar"));
    }
}

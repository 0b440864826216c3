//! Coverage tests for the shipped string tables and content documents

use mbm_content::{
    BlogPost, ContentRecord, Locale, PortfolioItem, PricingPlan, Service, StringTable,
    Testimonial, merge_translations, missing_keys, parse_records, placeholder_mismatches,
    untranslated_fields,
};

use crate::i18n::catalog;

const SERVICES: &str = include_str!("../static/data/services.json");
const PORTFOLIO: &str = include_str!("../static/data/portfolio.json");
const TESTIMONIALS: &str = include_str!("../static/data/testimonials.json");
const BLOG: &str = include_str!("../static/data/blog.json");
const PRICING: &str = include_str!("../static/data/pricing.json");

fn en() -> &'static StringTable {
    catalog().table(Locale::En)
}

fn ar() -> &'static StringTable {
    catalog().table(Locale::Ar)
}

fn records<T: ContentRecord>(doc: &str) -> Vec<T> {
    parse_records(doc).unwrap_or_else(|err| panic!("{} document should parse: {err}", T::DOMAIN))
}

#[test]
fn locales_have_matching_keys() {
    assert!(!en().leaf_keys().is_empty());
    assert_eq!(missing_keys(en(), ar()), Vec::<String>::new(), "missing in ar");
    assert_eq!(missing_keys(ar(), en()), Vec::<String>::new(), "missing in en");
}

#[test]
fn placeholders_match_across_locales() {
    let mismatches = placeholder_mismatches(en(), ar());
    assert!(mismatches.is_empty(), "{mismatches:?}");
    assert!(en().placeholders("footer.copyright").contains("year"));
}

#[test]
fn braces_are_balanced() {
    for (locale, table) in [("en", en()), ("ar", ar())] {
        for key in table.leaf_keys() {
            let text = mbm_content::try_resolve(table, &key, None).unwrap_or_default();
            let open = text.matches('{').count();
            let close = text.matches('}').count();
            assert_eq!(open, close, "unbalanced braces in {locale}:{key}");
        }
    }
}

#[test]
fn shipped_documents_parse() {
    assert_eq!(records::<Service>(SERVICES).len(), 3);
    assert_eq!(records::<PortfolioItem>(PORTFOLIO).len(), 4);
    assert_eq!(records::<Testimonial>(TESTIMONIALS).len(), 2);
    assert_eq!(records::<BlogPost>(BLOG).len(), 3);
    assert_eq!(records::<PricingPlan>(PRICING).len(), 3);
}

#[test]
fn shipped_documents_carry_no_inline_translations() {
    for doc in [SERVICES, PORTFOLIO, TESTIMONIALS, BLOG, PRICING] {
        assert!(!doc.contains("_ar\""), "inline translation left in document");
    }
}

#[test]
fn arabic_titles_cover_primary_domains() {
    let services = merge_translations(&records::<Service>(SERVICES), ar());
    let posts = merge_translations(&records::<BlogPost>(BLOG), ar());
    let plans = merge_translations(&records::<PricingPlan>(PRICING), ar());

    let authored = records::<Service>(SERVICES);
    for (merged, original) in services.iter().zip(&authored) {
        assert_ne!(merged.title, original.title, "{} untranslated", merged.id);
    }
    assert!(posts.iter().all(|p| !p.title.is_ascii()));
    assert!(plans.iter().all(|p| !p.name.is_ascii()));
}

#[test]
fn english_table_needs_no_record_keys() {
    let posts = records::<BlogPost>(BLOG);
    let merged = merge_translations(&posts, en());
    assert_eq!(merged.len(), posts.len());
    for (m, p) in merged.iter().zip(&posts) {
        assert_eq!(m.id, p.id);
    }
    let gaps = untranslated_fields(&records::<Service>(SERVICES), ar());
    assert!(
        gaps.iter().all(|(_, key)| key.starts_with("services.")),
        "{gaps:?}"
    );
}

use mbm_content::{ContentDomain, Locale, Params};
use mbm_web::{i18n, paths};

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());

    let vars = Params::from([("price", "$499")]);
    let per_month = i18n::tr("pricing.per_month", Some(&vars));
    assert!(per_month.contains("$499"));
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("ar-EG");
    assert_eq!(i18n::current_locale(), Locale::Ar);
    assert!(i18n::is_rtl());
    let by = i18n::tr("blog_page.by_author", Some(&Params::from([("author", "ليلى")])));
    assert!(by.contains("ليلى"));
}

#[test]
fn nested_group_key_falls_back_to_key() {
    i18n::set_lang("en");
    assert_eq!(i18n::t("nav"), "nav");
}

#[test]
fn every_domain_has_a_content_url() {
    for domain in ContentDomain::ALL {
        let url = paths::content_url(domain);
        assert!(url.ends_with(&format!("/data/{domain}.json")), "{url}");
    }
}

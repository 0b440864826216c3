use std::cell::RefCell;

use mbm_content::{Catalog, Locale, LocaleState, Params, StringTable, SubscriptionId};
use once_cell::sync::Lazy;

use crate::storage::{BrowserPreferences, DocumentAttributes};

const LOCALE_TABLE: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../i18n/en.json")),
    (Locale::Ar, include_str!("../i18n/ar.json")),
];

fn bundled(locale: Locale) -> &'static str {
    LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == locale).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1)
}

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_documents(bundled(Locale::En), bundled(Locale::Ar)));

/// String tables shipped with the bundle, parsed once.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Table for the active locale.
#[must_use]
pub fn current_table() -> &'static StringTable {
    CATALOG.table(current_locale())
}

fn env_hint() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::navigator_language()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

type BrowserLocaleState = LocaleState<BrowserPreferences, DocumentAttributes>;

thread_local! {
    static CURRENT: RefCell<BrowserLocaleState> = RefCell::new(LocaleState::init(
        BrowserPreferences,
        DocumentAttributes,
        env_hint().as_deref(),
    ));
}

#[must_use]
pub fn current_locale() -> Locale {
    CURRENT.with(|cell| cell.borrow().get())
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> &'static str {
    current_locale().tag()
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    current_locale().direction().is_rtl()
}

/// Switch the active locale.
///
/// Persists the choice, updates `<html lang dir>` and notifies subscribers
/// after the state borrow is released, so subscribers may read it back.
pub fn set_locale(locale: Locale) {
    let notification = CURRENT.with(|cell| cell.borrow_mut().apply(locale));
    notification.dispatch();
}

/// Set the current language from a tag. Unsupported tags are ignored.
pub fn set_lang(lang: &str) {
    match lang.parse::<Locale>() {
        Ok(locale) => set_locale(locale),
        Err(err) => log::warn!("{err}"),
    }
}

/// Flip between English and Arabic.
pub fn toggle_lang() {
    set_locale(current_locale().other());
}

pub fn subscribe(listener: impl Fn(Locale) + 'static) -> SubscriptionId {
    CURRENT.with(|cell| cell.borrow_mut().subscribe(listener))
}

pub fn unsubscribe(id: SubscriptionId) -> bool {
    CURRENT.with(|cell| cell.borrow_mut().unsubscribe(id))
}

/// Translate a key to the current language
///
/// Falls back to the key itself when it is missing.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` substitution
#[must_use]
pub fn tr(key: &str, args: Option<&Params<'_>>) -> String {
    mbm_content::resolve(current_table(), key, args)
}

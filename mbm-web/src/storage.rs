// Browser-backed implementations of the locale persistence and document hints.

use mbm_content::{DocumentHints, Locale, PreferenceStore};
#[cfg(target_arch = "wasm32")]
use mbm_content::{LEGACY_PREFERENCE_KEY, PREFERENCE_KEY};

#[cfg(target_arch = "wasm32")]
fn stored_item(key: &str) -> Option<String> {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Language preference persisted in `localStorage`.
///
/// Off wasm32 nothing is stored, so every session starts from the
/// environment hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            stored_item(PREFERENCE_KEY)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn load_legacy(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            stored_item(LEGACY_PREFERENCE_KEY)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn save(&self, tag: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::dom::local_storage() {
                Ok(storage) => {
                    if let Err(err) = storage.set_item(PREFERENCE_KEY, tag) {
                        log::warn!(
                            "could not persist language: {}",
                            crate::dom::js_error_message(&err)
                        );
                    }
                }
                Err(err) => log::warn!(
                    "localStorage unavailable: {}",
                    crate::dom::js_error_message(&err)
                ),
            }
        }
    }
}

/// Applies `lang`/`dir` to `<html>` and `data-rtl` to `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentAttributes;

impl DocumentHints for DocumentAttributes {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn apply(&self, locale: Locale) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(doc) = crate::dom::document() else {
                return;
            };
            let direction = locale.direction();
            if let Some(html) = doc.document_element() {
                let _ = html.set_attribute("lang", locale.tag());
                let _ = html.set_attribute("dir", direction.attr());
            }
            if let Some(body) = doc.body() {
                let rtl = if direction.is_rtl() { "true" } else { "false" };
                let _ = body.set_attribute("data-rtl", rtl);
            }
        }
    }
}

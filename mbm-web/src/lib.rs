#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod context;
pub mod dom;
pub mod fetch;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod paths;
pub mod storage;

pub use context::{
    DomainContent, Liveness, LocaleContext, LocaleProvider, localized, use_domain_content,
    use_locale,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> match the restored locale before first paint
    crate::i18n::set_locale(crate::i18n::current_locale());
}

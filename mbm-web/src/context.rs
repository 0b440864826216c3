use std::cell::Cell;
use std::rc::Rc;

use mbm_content::{ContentRecord, Locale, merge_translations};
use yew::prelude::*;

use crate::i18n;

/// Locale published to the component tree.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub set: Callback<Locale>,
    pub toggle: Callback<()>,
}

impl LocaleContext {
    /// Context backed directly by the global state, for components rendered
    /// outside a [`LocaleProvider`].
    fn detached(locale: Locale) -> Self {
        Self {
            locale,
            set: Callback::from(i18n::set_locale),
            toggle: Callback::from(|()| i18n::toggle_lang()),
        }
    }
}

/// Global locale as component state, re-rendering on every change while
/// `follow` is set.
#[hook]
fn use_global_locale(follow: bool) -> Locale {
    let locale = use_state_eq(i18n::current_locale);

    {
        let locale = locale.clone();
        use_effect_with(follow, move |follow| {
            let id = (*follow).then(move || {
                // Changes between first render and this effect are not notified.
                locale.set(i18n::current_locale());
                i18n::subscribe(move |next| locale.set(next))
            });
            move || {
                if let Some(id) = id {
                    i18n::unsubscribe(id);
                }
            }
        });
    }

    *locale
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let locale = use_global_locale(true);

    let set = use_callback((), |next: Locale, _: &()| i18n::set_locale(next));
    let toggle = use_callback((), |(): (), _: &()| i18n::toggle_lang());

    let context = LocaleContext {
        locale,
        set,
        toggle,
    };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

/// Locale from the nearest [`LocaleProvider`], or from the global state
/// (subscribed) when there is none.
#[hook]
pub fn use_locale() -> LocaleContext {
    let provided = use_context::<LocaleContext>();
    let global = use_global_locale(provided.is_none());
    provided.unwrap_or_else(|| LocaleContext::detached(global))
}

/// Flag shared between a spawned task and the component that started it.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as gone; later deliveries are dropped.
    pub fn end(&self) {
        self.0.set(false);
    }

    /// Hand `value` to `sink` if the owner is still alive. Returns whether it
    /// was delivered.
    pub fn deliver<V>(&self, value: V, sink: impl FnOnce(V)) -> bool {
        if self.is_alive() {
            sink(value);
            true
        } else {
            log::debug!("dropping result for an unmounted component");
            false
        }
    }
}

/// Authored records merged with the bundled table for `locale`.
#[must_use]
pub fn localized<T: ContentRecord>(authored: &[T], locale: Locale) -> Vec<T> {
    merge_translations(authored, i18n::catalog().table(locale))
}

/// Records of one domain, merged for the active locale.
#[derive(Clone, PartialEq)]
pub struct DomainContent<T> {
    pub records: Rc<Vec<T>>,
    pub loading: bool,
}

/// Fetch `T`'s domain once and keep its merge in step with the locale.
///
/// A fetch completing after the component unmounted is dropped.
#[hook]
pub fn use_domain_content<T>() -> DomainContent<T>
where
    T: ContentRecord + PartialEq + 'static,
{
    let LocaleContext { locale, .. } = use_locale();
    let authored = use_state(|| None::<Rc<Vec<T>>>);

    {
        let authored = authored.clone();
        use_effect_with((), move |()| {
            let liveness = Liveness::new();
            #[cfg(target_arch = "wasm32")]
            {
                let liveness = liveness.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let records = crate::fetch::fetch_records::<T>().await;
                    liveness.deliver(Rc::new(records), |records| authored.set(Some(records)));
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            drop(authored);
            move || liveness.end()
        });
    }

    let loading = authored.is_none();
    let records = use_memo((locale, (*authored).clone()), |(locale, authored)| {
        authored
            .as_deref()
            .map_or_else(Vec::new, |records| localized(records, *locale))
    });

    DomainContent { records, loading }
}

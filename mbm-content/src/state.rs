//! Active locale with persisted preference and change notification.
//!
//! `LocaleState` is the single writer for the current language. Readers either
//! call [`LocaleState::get`] or register a callback with
//! [`LocaleState::subscribe`]; callbacks run synchronously inside `set`, so by
//! the time `set` returns every observer has seen the new locale.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ContentError;
use crate::locale::{DEFAULT_LOCALE, Locale};

/// Key under which the chosen language tag is persisted.
pub const PREFERENCE_KEY: &str = "mbm.language";

/// Key used by earlier site builds; read once when [`PREFERENCE_KEY`] is empty.
pub const LEGACY_PREFERENCE_KEY: &str = "language";

/// Durable per-user storage for the language tag.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, tag: &str);

    /// Tag stored under [`LEGACY_PREFERENCE_KEY`], if the store has one.
    fn load_legacy(&self) -> Option<String> {
        None
    }
}

/// Presentation hints applied to the root document whenever the locale changes.
pub trait DocumentHints {
    fn apply(&self, locale: Locale);
}

/// In-memory preference store. Clones share the same slot, which lets tests
/// simulate a new session by building a fresh `LocaleState` over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    slot: Rc<RefCell<Option<String>>>,
    legacy: Option<String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_value(tag: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(tag.to_string()))),
            legacy: None,
        }
    }

    /// Empty store holding `tag` under the legacy key only.
    #[must_use]
    pub fn with_legacy(tag: &str) -> Self {
        Self {
            legacy: Some(tag.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, tag: &str) {
        self.slot.replace(Some(tag.to_string()));
    }

    fn load_legacy(&self) -> Option<String> {
        self.legacy.clone()
    }
}

/// Hints sink for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHints;

impl DocumentHints for NoHints {
    fn apply(&self, _locale: Locale) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Locale)>;

/// Pending change notification produced by [`LocaleState::apply`].
///
/// Dispatching after the state borrow has been released lets listeners read
/// the state back (e.g. through a `RefCell`) without re-entrancy panics.
#[must_use = "listeners are only notified when the notification is dispatched"]
pub struct Notification {
    locale: Locale,
    listeners: Vec<Listener>,
}

impl Notification {
    pub fn dispatch(self) {
        for listener in self.listeners {
            listener(self.locale);
        }
    }
}

pub struct LocaleState<S, H> {
    current: Locale,
    store: S,
    hints: H,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Three-tier startup fallback: stored preference, then environment hint,
/// then [`DEFAULT_LOCALE`]. Unrecognized values fall through.
#[must_use]
pub fn initial_locale(stored: Option<&str>, env_hint: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_tag)
        .or_else(|| env_hint.and_then(Locale::from_tag))
        .unwrap_or(DEFAULT_LOCALE)
}

impl<S: PreferenceStore, H: DocumentHints> LocaleState<S, H> {
    /// Restore the locale for a new session and apply the document hints once.
    ///
    /// With nothing under [`PREFERENCE_KEY`], a recognized legacy value is
    /// adopted and re-saved under the current key.
    pub fn init(store: S, hints: H, env_hint: Option<&str>) -> Self {
        let stored = store.load().or_else(|| {
            let legacy = store.load_legacy()?;
            let locale = Locale::from_tag(&legacy)?;
            log::info!("migrating legacy language preference {legacy:?}");
            store.save(locale.tag());
            Some(locale.tag().to_string())
        });
        let current = initial_locale(stored.as_deref(), env_hint);
        if let Some(raw) = stored.as_deref()
            && Locale::from_tag(raw).is_none()
        {
            log::warn!("ignoring unrecognized stored language {raw:?}");
        }
        hints.apply(current);
        Self {
            current,
            store,
            hints,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn get(&self) -> Locale {
        self.current
    }

    /// Switch locale, persist it, update the document hints and notify
    /// subscribers in registration order.
    pub fn set(&mut self, locale: Locale) {
        self.apply(locale).dispatch();
    }

    /// Commit a change (current value, persisted tag, document hints) and
    /// hand back the notification for the caller to dispatch.
    pub fn apply(&mut self, locale: Locale) -> Notification {
        self.current = locale;
        self.store.save(locale.tag());
        self.hints.apply(locale);
        Notification {
            locale,
            listeners: self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect(),
        }
    }

    /// String entry point for [`Self::set`].
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownLocale`] for a tag outside the supported
    /// set; the current locale is left untouched.
    pub fn set_tag(&mut self, tag: &str) -> Result<(), ContentError> {
        let locale = tag.parse::<Locale>().inspect_err(|_| {
            log::warn!("rejecting unsupported language tag {tag:?}");
        })?;
        self.set(locale);
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.set(self.current.other());
    }

    pub fn subscribe(&mut self, listener: impl Fn(Locale) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` when the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Direction;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct RecordingHints(Rc<RefCell<Vec<(String, &'static str)>>>);

    impl DocumentHints for RecordingHints {
        fn apply(&self, locale: Locale) {
            self.0
                .borrow_mut()
                .push((locale.tag().to_string(), locale.direction().attr()));
        }
    }

    #[test]
    fn fallback_chain_prefers_stored_then_env() {
        assert_eq!(initial_locale(Some("ar"), Some("en")), Locale::Ar);
        assert_eq!(initial_locale(Some("xx"), Some("ar-SA")), Locale::Ar);
        assert_eq!(initial_locale(None, Some("en-GB")), Locale::En);
        assert_eq!(initial_locale(None, Some("de")), Locale::En);
        assert_eq!(initial_locale(Some(""), None), Locale::En);
    }

    #[test]
    fn set_then_toggle() {
        let mut state = LocaleState::init(MemoryPreferences::default(), NoHints, None);
        state.set(Locale::Ar);
        assert_eq!(state.get().tag(), "ar");
        assert_eq!(state.get().direction(), Direction::RightToLeft);
        state.toggle();
        assert_eq!(state.get().tag(), "en");
        assert_eq!(state.get().direction(), Direction::LeftToRight);
    }

    #[test]
    fn set_persists_and_applies_hints() {
        let prefs = MemoryPreferences::default();
        let hints = RecordingHints::default();
        let mut state = LocaleState::init(prefs.clone(), hints.clone(), None);
        state.set(Locale::Ar);
        assert_eq!(prefs.stored().as_deref(), Some("ar"));
        let applied = hints.0.borrow();
        assert_eq!(
            applied.as_slice(),
            &[("en".to_string(), "ltr"), ("ar".to_string(), "rtl")]
        );
    }

    #[test]
    fn persisted_choice_survives_new_session() {
        let prefs = MemoryPreferences::default();
        {
            let mut state = LocaleState::init(prefs.clone(), NoHints, Some("en-US"));
            state.set(Locale::Ar);
        }
        let restored = LocaleState::init(prefs, NoHints, Some("en-US"));
        assert_eq!(restored.get(), Locale::Ar);
    }

    #[test]
    fn legacy_preference_is_adopted_once() {
        let prefs = MemoryPreferences::with_legacy("ar");
        let state = LocaleState::init(prefs.clone(), NoHints, Some("en-US"));
        assert_eq!(state.get(), Locale::Ar);
        assert_eq!(prefs.stored().as_deref(), Some("ar"));

        let current_wins = MemoryPreferences {
            legacy: Some("ar".to_string()),
            ..MemoryPreferences::with_value("en")
        };
        let state = LocaleState::init(current_wins, NoHints, None);
        assert_eq!(state.get(), Locale::En);

        let junk = MemoryPreferences::with_legacy("klingon");
        let state = LocaleState::init(junk.clone(), NoHints, Some("ar"));
        assert_eq!(state.get(), Locale::Ar);
        assert_eq!(junk.stored(), None);
    }

    #[test]
    fn unknown_tag_is_rejected_without_change() {
        let prefs = MemoryPreferences::with_value("ar");
        let mut state = LocaleState::init(prefs.clone(), NoHints, None);
        assert!(state.set_tag("fr").is_err());
        assert_eq!(state.get(), Locale::Ar);
        assert_eq!(prefs.stored().as_deref(), Some("ar"));
        state.set_tag("en").unwrap();
        assert_eq!(state.get(), Locale::En);
    }

    #[test]
    fn subscribers_see_change_synchronously() {
        let seen = Rc::new(Cell::new(None));
        let mut state = LocaleState::init(MemoryPreferences::default(), NoHints, None);
        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |locale| sink.set(Some(locale)));
        state.toggle();
        assert_eq!(seen.get(), Some(Locale::Ar));

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();
        assert_eq!(seen.get(), Some(Locale::Ar));
        assert_eq!(state.subscriber_count(), 0);
    }
}

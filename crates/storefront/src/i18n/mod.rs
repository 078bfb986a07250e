//! Key-based translation lookup and the active language/direction pair.
//!
//! The resolver owns the current language; text direction is always
//! derived from it, never stored, so the two cannot drift apart. The
//! dictionary is the compile-time catalog in [`messages`]. Lookups with a
//! known [`MessageKey`] are total; dynamic string lookups fall back to
//! the raw key verbatim, which keeps missing translations visible in the
//! UI instead of rendering blanks.

pub mod messages;

pub use messages::MessageKey;

use tracing::debug;

use dark_cat_core::{Direction, Language};

use crate::observer::{Observers, SubscriptionId};

/// Notification payload sent to the environment on a language change.
///
/// The surrounding presentation layer uses this to update document-level
/// `lang`/`dir` attributes; how it does so is its own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub language: Language,
    pub direction: Direction,
}

/// The localization resolver.
///
/// Constructed once per session with the configured startup language and
/// shared by reference.
pub struct Localizer {
    language: Language,
    observers: Observers<LocaleChange>,
}

impl Localizer {
    /// Create a resolver starting in the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            observers: Observers::new(),
        }
    }

    /// The active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The text direction of the active language.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// The display string for a key in the active language.
    #[must_use]
    pub const fn lookup(&self, key: MessageKey) -> &'static str {
        key.text(self.language)
    }

    /// Resolve a dotted string key in the active language.
    ///
    /// Unknown keys come back verbatim as a deliberate, visible fallback.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> String {
        MessageKey::parse(raw).map_or_else(|| raw.to_string(), |key| self.lookup(key).to_string())
    }

    /// Switch the active language.
    ///
    /// Direction is recomputed immediately; registered listeners receive
    /// the new `(language, direction)` pair. Setting the language it is
    /// already in does nothing.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        let change = LocaleChange {
            language,
            direction: language.direction(),
        };
        debug!(language = %change.language, direction = %change.direction, "switched language");
        self.observers.notify(&change);
    }

    /// Switch to the other supported language.
    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Register a listener called with every language change.
    pub fn subscribe(&mut self, listener: impl Fn(&LocaleChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl core::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Localizer")
            .field("language", &self.language)
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_lookup_per_language() {
        let mut localizer = Localizer::new(Language::En);
        assert_eq!(localizer.lookup(MessageKey::CartTitle), "CART");

        localizer.set_language(Language::Ar);
        assert_eq!(localizer.lookup(MessageKey::CartTitle), "السلة");
    }

    #[test]
    fn test_resolve_falls_back_to_raw_key() {
        for language in [Language::Ar, Language::En] {
            let localizer = Localizer::new(language);
            assert_eq!(localizer.resolve("no.such.key"), "no.such.key");
        }

        let localizer = Localizer::new(Language::En);
        assert_eq!(localizer.resolve("cart.title"), "CART");
    }

    #[test]
    fn test_direction_tracks_language() {
        let mut localizer = Localizer::new(Language::Ar);
        assert_eq!(localizer.direction(), Direction::Rtl);

        localizer.set_language(Language::En);
        assert_eq!(localizer.direction(), Direction::Ltr);

        localizer.toggle_language();
        assert_eq!(localizer.language(), Language::Ar);
        assert_eq!(localizer.direction(), Direction::Rtl);
    }

    #[test]
    fn test_listeners_get_consistent_pair() {
        let mut localizer = Localizer::new(Language::Ar);
        let seen: Rc<RefCell<Vec<LocaleChange>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        localizer.subscribe(move |change| {
            assert_eq!(change.direction, change.language.direction());
            sink.borrow_mut().push(*change);
        });

        localizer.set_language(Language::En);
        localizer.set_language(Language::En); // no change, no notification
        localizer.toggle_language();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen.first().unwrap().language, Language::En);
        assert_eq!(seen.first().unwrap().direction, Direction::Ltr);
        assert_eq!(seen.last().unwrap().language, Language::Ar);
        assert_eq!(seen.last().unwrap().direction, Direction::Rtl);
    }

    #[test]
    fn test_unsubscribe_listener() {
        let mut localizer = Localizer::new(Language::Ar);
        let calls = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&calls);
        let id = localizer.subscribe(move |_| *sink.borrow_mut() += 1);

        localizer.toggle_language();
        assert!(localizer.unsubscribe(id));
        localizer.toggle_language();
        assert_eq!(*calls.borrow(), 1);
    }
}

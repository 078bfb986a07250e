//! End-to-end localization scenarios: language switching, direction
//! consistency, and lookup fallback.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use dark_cat_core::{Direction, Language};
use dark_cat_integration_tests::test_state;
use dark_cat_storefront::i18n::{LocaleChange, MessageKey};

#[test]
fn cart_title_round_trip() {
    let mut state = test_state();

    state.localizer_mut().set_language(Language::En);
    assert_eq!(state.localizer().resolve("cart.title"), "CART");

    state.localizer_mut().set_language(Language::Ar);
    assert_eq!(state.localizer().resolve("cart.title"), "السلة");

    // Unknown keys come back verbatim under both languages.
    state.localizer_mut().set_language(Language::En);
    assert_eq!(state.localizer().resolve("no.such.key"), "no.such.key");
    state.localizer_mut().set_language(Language::Ar);
    assert_eq!(state.localizer().resolve("no.such.key"), "no.such.key");
}

#[test]
fn direction_consistent_after_every_switch() {
    let mut state = test_state();

    for language in [
        Language::En,
        Language::Ar,
        Language::Ar,
        Language::En,
        Language::Ar,
    ] {
        state.localizer_mut().set_language(language);
        let localizer = state.localizer();
        assert_eq!(localizer.language(), language);
        assert_eq!(localizer.direction(), language.direction());
        assert_eq!(
            localizer.direction() == Direction::Rtl,
            localizer.language() == Language::Ar
        );
    }
}

#[test]
fn environment_notified_with_document_attributes() {
    let mut state = test_state();

    // Stand-in for the presentation layer mirroring lang/dir onto the
    // document element.
    let document: Rc<RefCell<(String, String)>> =
        Rc::new(RefCell::new((String::new(), String::new())));
    let sink = Rc::clone(&document);
    state
        .localizer_mut()
        .subscribe(move |change: &LocaleChange| {
            *sink.borrow_mut() = (
                change.language.code().to_string(),
                change.direction.code().to_string(),
            );
        });

    state.localizer_mut().set_language(Language::En);
    assert_eq!(*document.borrow(), ("en".to_string(), "ltr".to_string()));

    state.localizer_mut().toggle_language();
    assert_eq!(*document.borrow(), ("ar".to_string(), "rtl".to_string()));
}

#[test]
fn typed_lookup_matches_dynamic_resolution() {
    let mut state = test_state();

    for language in [Language::Ar, Language::En] {
        state.localizer_mut().set_language(language);
        let localizer = state.localizer();
        for key in MessageKey::ALL {
            assert_eq!(localizer.resolve(key.key()), localizer.lookup(key));
        }
    }
}

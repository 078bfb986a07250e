//! End-to-end shopping flows across the catalog, cart, and customization
//! components.

#![allow(clippy::unwrap_used)]

use dark_cat_core::{Language, ProductId, Size};
use dark_cat_integration_tests::test_state;
use dark_cat_storefront::customize::{Artwork, CustomDesign};
use rust_decimal::Decimal;

#[test]
fn add_same_product_two_sizes() {
    let mut state = test_state();

    let candidate_m = state
        .catalog()
        .get(&ProductId::from("1"))
        .unwrap()
        .line_candidate(Size::new("M"));
    let candidate_l = state
        .catalog()
        .get(&ProductId::from("1"))
        .unwrap()
        .line_candidate(Size::new("L"));

    state.cart_mut().add_line(candidate_m.clone());
    state.cart_mut().add_line(candidate_m);
    state.cart_mut().add_line(candidate_l);

    let cart = state.cart();
    let lines = cart.lines();
    assert_eq!(lines.len(), 2);

    let first = lines.first().unwrap();
    assert_eq!(first.product_id.as_str(), "1");
    assert_eq!(first.size.as_str(), "M");
    assert_eq!(first.quantity, 2);

    let second = lines.get(1).unwrap();
    assert_eq!(second.size.as_str(), "L");
    assert_eq!(second.quantity, 1);

    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total().amount, Decimal::new(13500, 2));
    assert!(cart.is_open());
}

#[test]
fn quantity_edits_and_removal() {
    let mut state = test_state();
    let product = state.catalog().get(&ProductId::from("3")).unwrap().clone();
    state.cart_mut().add_line(product.line_candidate(Size::new("L")));

    let id = ProductId::from("3");
    let size = Size::new("L");

    state.cart_mut().set_quantity(&id, &size, 4);
    assert_eq!(state.cart().count(), 4);
    assert_eq!(state.cart().total().amount, Decimal::new(19200, 2));

    // Zero and negative quantities behave exactly like removal.
    state.cart_mut().set_quantity(&id, &size, 0);
    assert!(state.cart().lines().is_empty());

    state.cart_mut().add_line(product.line_candidate(Size::new("L")));
    state.cart_mut().set_quantity(&id, &size, -1);
    assert!(state.cart().lines().is_empty());

    // Removal of a line that is already gone stays a no-op.
    state.cart_mut().remove_line(&id, &size);
    assert_eq!(state.cart().count(), 0);
    assert_eq!(state.cart().total().amount, Decimal::ZERO);
}

#[test]
fn custom_design_lands_next_to_catalog_lines() {
    let mut state = test_state();

    let hoodie = state
        .catalog()
        .get(&ProductId::from("2"))
        .unwrap()
        .line_candidate(Size::new("M"));
    state.cart_mut().add_line(hoodie);

    let design = CustomDesign::new(Artwork::Text("DARK CAT".to_string()), Size::new("M")).unwrap();
    let custom = design.line_candidate(state.config().custom_price);
    state.cart_mut().add_line(custom);

    let cart = state.cart();
    let lines = cart.lines();
    assert_eq!(lines.len(), 2);

    let custom_line = lines.get(1).unwrap();
    assert!(custom_line.product_id.as_str().starts_with("custom-"));
    assert!(state.catalog().get(&custom_line.product_id).is_none());
    assert_eq!(custom_line.name.get(Language::En), "Custom Hoodie");

    // 42.00 catalog + 75.00 custom
    assert_eq!(cart.total().amount, Decimal::new(11700, 2));
}

#[test]
fn clear_keeps_drawer_open_after_checkout_handoff() {
    let mut state = test_state();
    let candidate = state
        .catalog()
        .get(&ProductId::from("5"))
        .unwrap()
        .line_candidate(Size::new("S"));
    state.cart_mut().add_line(candidate);
    assert!(state.cart().is_open());

    state.cart_mut().clear();
    assert!(state.cart().lines().is_empty());
    assert_eq!(state.cart().count(), 0);
    assert_eq!(state.cart().total().amount, Decimal::ZERO);
    assert!(state.cart().is_open());

    state.cart_mut().close();
    assert!(!state.cart().is_open());
}

//! Dark Cat Threads storefront library.
//!
//! This crate provides the storefront's stateful core as a library so the
//! presentation layer stays purely declarative:
//!
//! - [`cart`] - The authoritative in-memory cart and its visibility flag
//! - [`i18n`] - Key-based translation lookup and the language/direction pair
//! - [`catalog`] - The static, read-only product catalog
//! - [`customize`] - The custom hoodie design flow feeding synthetic lines
//!   into the cart
//! - [`state`] - Construct-once application state wiring the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod customize;
pub mod i18n;
pub mod observer;
pub mod state;

pub use state::AppState;

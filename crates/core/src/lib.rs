//! Dark Cat Core - Shared types library.
//!
//! This crate provides common types used across the Dark Cat Threads
//! storefront components:
//! - `storefront` - Cart store, localization resolver, catalog, customization
//! - `integration-tests` - Cross-component scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! globals, no framework dependencies. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and sizes, the price type, and
//!   the language/direction pair

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

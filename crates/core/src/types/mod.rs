//! Core types for Dark Cat Threads.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod locale;
pub mod price;
pub mod size;
pub mod text;

pub use id::{LineKey, ProductId};
pub use locale::{Direction, Language, LanguageParseError};
pub use price::{CurrencyCode, Price};
pub use size::Size;
pub use text::BilingualText;

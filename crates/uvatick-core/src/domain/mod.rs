//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`IndexDate`] | ISO 8601 calendar date of a publication |
//! | [`IndexQuote`] | Validated `{fecha, valor}` pair |
//! | [`ResolutionResult`] | Selected quote plus fallback flag |
//!
//! Quote values are validated at construction: they must be finite and
//! non-negative, so a decoded payload never carries an invalid value.

mod date;
mod quote;

pub use date::IndexDate;
pub use quote::{IndexQuote, ResolutionResult};

//! Multilingual number-to-words rendering library.
//!
//! This crate turns a numeric value (integer or decimal, signed) into a
//! grammatically correct word sequence in a selectable locale:
//! - Per-language rendering engines for 16 languages
//! - A closed language registry with case-insensitive lookup and fallback
//! - A thin converter that validates input and assembles the final string
//!
//! Only the high-level API is exposed publicly. Shared digit-string
//! utilities are kept internal to ensure consistency and prevent misuse.

/// Per-language rendering engines and the language registry.
///
/// This module exposes the [`lang::Language`] dispatch enum while keeping
/// the individual language word tables private.
pub mod lang;

/// Input validation and word assembly.
///
/// Exposes [`convert::to_words`] and [`convert::ConversionOptions`].
pub mod convert;

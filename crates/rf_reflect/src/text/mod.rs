//! Narrow and wide text.
//!
//! - **Narrow** text is a UTF-8 [`String`], the representation used by documents.
//! - **Wide** text is a [`WideString`], a sequence of UTF-16 code units.
//!
//! Every text-typed value that crosses the document boundary (fields, sequence
//! elements, mapping keys and values) goes through [`narrow_to_wide`] or
//! [`wide_to_narrow`].
//!
//! # Known limitation
//!
//! Any valid Unicode text round-trips losslessly. A [`WideString`] may also hold
//! unpaired surrogates, which have no UTF-8 form; [`wide_to_narrow`] replaces each
//! of them with `U+FFFD`, so such values do not survive a save/load cycle.
//! Two wide mapping keys that differ only in such units become the same narrow
//! key; the writer keeps the first entry and logs a warning for the others.

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod wide;

// -----------------------------------------------------------------------------
// Exports

pub use codec::{narrow_to_wide, wide_to_narrow};
pub use wide::WideString;

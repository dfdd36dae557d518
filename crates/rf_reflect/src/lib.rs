#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `rf_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `rf_reflect` can be used as an alias for `crate`.
extern crate self as rf_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod diag;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;
pub mod text;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use info::Reflectable;
pub use reflection::{Classify, Reflect};
pub use rf_reflect_derive as derive;

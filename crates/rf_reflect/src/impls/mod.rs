//! Reflection for native types.
//!
//! - scalars: `bool`, `i32`, `u32`, `i64`, `u64`, `f32`, `String`, [`WideString`]
//! - sequences: `Vec<T>`
//! - mappings: `BTreeMap<K, V>`, `HashMap<K, V, S>`
//! - opaque (classified as unsupported): `i8`, `i16`, `u8`, `u16`, `i128`,
//!   `u128`, `isize`, `usize`, `f64`, `char`, `Option<T>`, `BTreeSet<T>`,
//!   `HashSet<T, S>`
//!
//! [`StructInfoCell`] stores the descriptor of a derived composite type.
//!
//! [`WideString`]: crate::text::WideString

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod collections;
mod opaque;
mod scalar;
mod utils;

// -----------------------------------------------------------------------------
// Exports

pub use cell::StructInfoCell;

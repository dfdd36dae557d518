#![doc = include_str!("../README.md")]

pub use rf_reflect as reflect;
pub use rf_store as store;

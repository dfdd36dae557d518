// -----------------------------------------------------------------------------
// Modules

mod classify;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use classify::Classify;
pub use reflect::Reflect;

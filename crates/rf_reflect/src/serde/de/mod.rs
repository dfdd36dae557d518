// -----------------------------------------------------------------------------
// Modules

mod driver;

// -----------------------------------------------------------------------------
// Exports

pub use driver::{populate, populate_dyn};

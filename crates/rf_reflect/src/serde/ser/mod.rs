// -----------------------------------------------------------------------------
// Modules

mod driver;

// -----------------------------------------------------------------------------
// Exports

pub use driver::{emit_into, to_document};

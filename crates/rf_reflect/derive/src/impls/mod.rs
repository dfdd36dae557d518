// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod trait_classify;
mod trait_composite;
mod trait_reflect;
mod trait_reflectable;
mod trait_scalar;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use trait_classify::impl_trait_classify;
use trait_composite::impl_trait_composite;
use trait_reflect::impl_trait_reflect;
use trait_reflectable::impl_trait_reflectable;
use trait_scalar::impl_trait_scalar;

//! This independent module is used to provide the required path.
//! So as to minimize changes when the `rf_reflect` structure is modified.
//!
//! The only special feature is the path of rf_reflect itself,
//! See [`rf_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `rf_reflect` crate.
///
/// Not all modules can access the reflection crate itself through `rf_reflect`,
/// we have to scan the builder's `cargo.toml`.
///
/// 1. For crates that depend on `rf_reflect`, `::rf_reflect` is returned here.
/// 2. For crates that depend on `rf_core`, `::rf_core::reflect` is returned here.
/// 3. For other situations, `::rf_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is mainly obtained through parameter passing rather than reacquiring.
pub(crate) fn rf_reflect() -> syn::Path {
    rf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rf_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn reflect_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn classify_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::Classify
    }
}

#[inline(always)]
pub(crate) fn reflectable_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::Reflectable
    }
}

#[inline(always)]
pub(crate) fn kind_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::Kind
    }
}

#[inline(always)]
pub(crate) fn scalar_kind_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::ScalarKind
    }
}

#[inline(always)]
pub(crate) fn struct_info_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn struct_info_cell_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::impls::StructInfoCell
    }
}

#[inline(always)]
pub(crate) fn composite_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::Composite
    }
}

#[inline(always)]
pub(crate) fn scalar_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::Scalar
    }
}

#[inline(always)]
pub(crate) fn scalar_value_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::ScalarValue
    }
}

#[inline(always)]
pub(crate) fn scalar_error_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::ScalarError
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn assign_error_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::AssignError
    }
}

#[inline(always)]
pub(crate) fn assign_boxed_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::ops::assign_boxed
    }
}

#[inline(always)]
pub(crate) fn macro_utils_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::__macro_exports::macro_utils
    }
}

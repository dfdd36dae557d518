use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Composite` trait.
///
/// Field access goes through the accessors stored in the `StructInfo`,
/// so only the descriptor needs to be provided.
pub(crate) fn impl_trait_composite(info: &ReflectStruct) -> TokenStream {
    let rf_reflect_path = info.rf_reflect_path();

    let composite_ = crate::path::composite_(rf_reflect_path);
    let reflectable_ = crate::path::reflectable_(rf_reflect_path);
    let struct_info_ = crate::path::struct_info_(rf_reflect_path);

    let ident = info.ident();

    quote! {
        impl #composite_ for #ident {
            #[inline]
            fn reflect_struct_info(&self) -> &'static #struct_info_ {
                <Self as #reflectable_>::struct_info()
            }
        }
    }
}

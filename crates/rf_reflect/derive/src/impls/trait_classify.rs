use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

/// Generate implementation code for `Classify` trait.
///
/// `kind` is an expression of type `Kind`.
pub(crate) fn impl_trait_classify(
    rf_reflect_path: &Path,
    ident: &Ident,
    kind: TokenStream,
) -> TokenStream {
    let classify_ = crate::path::classify_(rf_reflect_path);
    let kind_ = crate::path::kind_(rf_reflect_path);

    quote! {
        impl #classify_ for #ident {
            const KIND: #kind_ = #kind;
        }
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

/// Generate implementation code for `Reflect` trait.
///
/// `view` is the `ReflectRef`/`ReflectMut` variant the value is exposed as.
pub(crate) fn impl_trait_reflect(
    rf_reflect_path: &Path,
    ident: &Ident,
    view: &Ident,
) -> TokenStream {
    let classify_ = crate::path::classify_(rf_reflect_path);
    let reflect_ = crate::path::reflect_(rf_reflect_path);
    let kind_ = crate::path::kind_(rf_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(rf_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(rf_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(rf_reflect_path);
    let assign_error_ = crate::path::assign_error_(rf_reflect_path);
    let assign_boxed_ = crate::path::assign_boxed_(rf_reflect_path);

    quote! {
        impl #reflect_ for #ident {
            #[inline]
            fn reflect_kind(&self) -> #kind_ {
                <Self as #classify_>::KIND
            }

            #[inline]
            fn reflect_type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            #[inline]
            fn into_any(self: #macro_utils_::Box<Self>) -> #macro_utils_::Box<dyn ::core::any::Any> {
                self
            }

            #[inline]
            fn fresh(&self) -> #macro_utils_::Box<dyn #reflect_> {
                #macro_utils_::Box::new(<Self as ::core::default::Default>::default())
            }

            #[inline]
            fn assign(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #assign_error_> {
                #assign_boxed_(self, value)
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#view(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#view(self)
            }
        }
    }
}

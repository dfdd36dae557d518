use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectEnum;

/// Generate implementation code for `Scalar` trait of a fieldless enum.
///
/// The value is its discriminant; an integer that names no variant is out of range.
pub(crate) fn impl_trait_scalar(info: &ReflectEnum) -> TokenStream {
    let rf_reflect_path = info.rf_reflect_path();

    let scalar_ = crate::path::scalar_(rf_reflect_path);
    let scalar_value_ = crate::path::scalar_value_(rf_reflect_path);
    let scalar_error_ = crate::path::scalar_error_(rf_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(rf_reflect_path);

    let ident = info.ident();
    let variants = info.variants();

    quote! {
        impl #scalar_ for #ident {
            #[inline]
            fn to_scalar(&self) -> #scalar_value_ {
                #scalar_value_::Int(match self {
                    #( Self::#variants => Self::#variants as i64, )*
                })
            }

            fn set_scalar(
                &mut self,
                value: #scalar_value_,
            ) -> ::core::result::Result<(), #scalar_error_> {
                let target = ::core::any::type_name::<Self>();
                let value = #macro_utils_::discriminant(value, target)?;
                #(
                    if value == Self::#variants as i64 {
                        *self = Self::#variants;
                        return ::core::result::Result::Ok(());
                    }
                )*
                ::core::result::Result::Err(#macro_utils_::unknown_discriminant(value, target))
            }
        }
    }
}

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput};

use crate::derive_data::{ReflectEnum, ReflectStruct};

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    let impls = match &ast.data {
        Data::Enum(data) => ReflectEnum::from_input(&ast, data).map(|info| enum_impls(&info)),
        Data::Struct(_) | Data::Union(_) => {
            ReflectStruct::from_input(&ast).map(|info| struct_impls(&info))
        }
    };

    match impls {
        Ok(impls) => TokenStream::from(quote! {
            const _: () = {
                #impls
            };
        }),
        Err(err) => err.into_compile_error().into(),
    }
}

fn struct_impls(info: &ReflectStruct) -> proc_macro2::TokenStream {
    let rf_reflect_path = info.rf_reflect_path();
    let kind_ = crate::path::kind_(rf_reflect_path);

    let reflect_impl =
        super::impl_trait_reflect(rf_reflect_path, info.ident(), &format_ident!("Composite"));
    let classify_impl =
        super::impl_trait_classify(rf_reflect_path, info.ident(), quote!(#kind_::Composite));
    let composite_impl = super::impl_trait_composite(info);
    let reflectable_impl = super::impl_trait_reflectable(info);

    quote! {
        #reflect_impl

        #classify_impl

        #composite_impl

        #reflectable_impl
    }
}

/// Fieldless enums are `Int32` scalars.
fn enum_impls(info: &ReflectEnum) -> proc_macro2::TokenStream {
    let rf_reflect_path = info.rf_reflect_path();
    let kind_ = crate::path::kind_(rf_reflect_path);
    let scalar_kind_ = crate::path::scalar_kind_(rf_reflect_path);

    let reflect_impl =
        super::impl_trait_reflect(rf_reflect_path, info.ident(), &format_ident!("Scalar"));
    let classify_impl = super::impl_trait_classify(
        rf_reflect_path,
        info.ident(),
        quote!(#kind_::Scalar(#scalar_kind_::Int32)),
    );
    let scalar_impl = super::impl_trait_scalar(info);

    quote! {
        #reflect_impl

        #classify_impl

        #scalar_impl
    }
}

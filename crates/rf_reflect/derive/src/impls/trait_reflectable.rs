use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField};

/// Generate the `NamedField` expression of one field.
///
/// Similar to following:
///
/// ```ignore
/// NamedField::new::<u32>(
///     "count",
///     |owner| owner.downcast_ref::<Foo>().map(|v| &v.count as &dyn Reflect),
///     |owner| owner.downcast_mut::<Foo>().map(|v| &mut v.count as &mut dyn Reflect),
/// )
/// ```
fn named_field_expression(info: &ReflectStruct, field: &StructField) -> TokenStream {
    let rf_reflect_path = info.rf_reflect_path();

    let reflect_ = crate::path::reflect_(rf_reflect_path);
    let named_field_ = crate::path::named_field_(rf_reflect_path);

    let owner = info.ident();
    let member = field.ident;
    let ty = field.ty;
    let name = &field.name;

    let base = if field.attrs.is_detached() {
        quote! {
            #named_field_::opaque(#name, ::core::any::type_name::<#ty>())
        }
    } else {
        quote! {
            #named_field_::new::<#ty>(
                #name,
                |owner| owner.downcast_ref::<#owner>().map(|value| &value.#member as &dyn #reflect_),
                |owner| owner.downcast_mut::<#owner>().map(|value| &mut value.#member as &mut dyn #reflect_),
            )
        }
    };

    let with_static = field.attrs.skip.map(|_| quote!(.with_static(true)));
    let with_writable = field.attrs.readonly.map(|_| quote!(.with_writable(false)));

    quote! {
        #base #with_static #with_writable
    }
}

/// Generate implementation code for `Reflectable` trait.
///
/// The descriptor is built on first use and then shared.
pub(crate) fn impl_trait_reflectable(info: &ReflectStruct) -> TokenStream {
    let rf_reflect_path = info.rf_reflect_path();

    let reflectable_ = crate::path::reflectable_(rf_reflect_path);
    let struct_info_ = crate::path::struct_info_(rf_reflect_path);
    let struct_info_cell_ = crate::path::struct_info_cell_(rf_reflect_path);
    let named_field_ = crate::path::named_field_(rf_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(rf_reflect_path);

    let ident = info.ident();

    let fields = info
        .fields()
        .iter()
        .map(|field| named_field_expression(info, field));

    let with_file = info.attrs().file.as_ref().map(|file| quote!(.with_file(#file)));

    quote! {
        impl #reflectable_ for #ident {
            fn struct_info() -> &'static #struct_info_ {
                static CELL: #struct_info_cell_ = #struct_info_cell_::new();
                CELL.get_or_init(|| {
                    let fields = <#macro_utils_::Vec<#named_field_>>::from([#(#fields),*]);
                    #struct_info_::new::<Self>(fields) #with_file
                })
            }
        }
    }
}

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Path, Type};

use super::{FieldAttributes, TypeAttributes};

/// A named field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The document key: the field identifier without any `r#` prefix.
    pub name: String,
    pub attrs: FieldAttributes,
}

/// Everything needed to generate the impls for a struct.
pub(crate) struct ReflectStruct<'a> {
    rf_reflect_path: Path,
    ident: &'a Ident,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Parses and validates the derive input.
    ///
    /// Only non-generic structs with named fields are accepted.
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "expected a struct, found an enum",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields, found a union",
                ));
            }
        };

        let named = match &data.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        if let Some(param) = input.generics.params.first() {
            return Err(syn::Error::new_spanned(
                param,
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut errors: Option<syn::Error> = None;
        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            match FieldAttributes::parse_attrs(&field.attrs) {
                Ok(field_attrs) => fields.push(StructField {
                    ident,
                    ty: &field.ty,
                    name: ident.unraw().to_string(),
                    attrs: field_attrs,
                }),
                Err(err) => match errors.as_mut() {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                },
            }
        }

        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self {
            rf_reflect_path: crate::path::rf_reflect(),
            ident: &input.ident,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn rf_reflect_path(&self) -> &Path {
        &self.rf_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}

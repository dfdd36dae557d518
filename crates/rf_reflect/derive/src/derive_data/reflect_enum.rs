use syn::{Attribute, DataEnum, DeriveInput, Fields, Ident, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Integer representations whose discriminants always fit an `Int32` leaf.
const REPRS: &[&str] = &["i8", "i16", "i32", "u8", "u16", "u32"];

/// Everything needed to generate the impls for a fieldless enum.
pub(crate) struct ReflectEnum<'a> {
    rf_reflect_path: Path,
    ident: &'a Ident,
    variants: Vec<&'a Ident>,
}

/// Rejects a `#[repr(...)]` that could hold discriminants outside `i32`/`u32`.
fn check_repr(attrs: &[Attribute]) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            return Err(syn::Error::new_spanned(
                attr,
                "`#[reflect(...)]` attributes are not supported on enums",
            ));
        }
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if REPRS.iter().any(|name| meta.path.is_ident(name)) {
                Ok(())
            } else {
                Err(meta.error("reflected enums must use an integer repr no wider than 32 bits"))
            }
        })?;
    }
    Ok(())
}

impl<'a> ReflectEnum<'a> {
    /// Parses and validates the derive input.
    ///
    /// Only non-generic enums whose variants are all unit variants are accepted.
    pub fn from_input(input: &'a DeriveInput, data: &'a DataEnum) -> syn::Result<Self> {
        if let Some(param) = input.generics.params.first() {
            return Err(syn::Error::new_spanned(
                param,
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }
        if data.variants.is_empty() {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`#[derive(Reflect)]` does not support enums without variants",
            ));
        }
        check_repr(&input.attrs)?;

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "`#[derive(Reflect)]` only supports enums without fields",
                ));
            }
            if let Some(attr) = variant
                .attrs
                .iter()
                .find(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
            {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`#[reflect(...)]` attributes are not supported on enum variants",
                ));
            }
            variants.push(&variant.ident);
        }

        Ok(Self {
            rf_reflect_path: crate::path::rf_reflect(),
            ident: &input.ident,
            variants,
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
    pub fn variants(&self) -> &[&'a Ident] {
        &self.variants
    }
}

//! Parsing of `#[reflect(...)]` attributes.
//!
//! - Type level: `file = "path"`.
//! - Field level: `skip`, `readonly`, `opaque`.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Records the span of a flag, rejecting duplicates.
fn set_flag(slot: &mut Option<Span>, meta: &ParseNestedMeta, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format_args!("duplicate `{name}` attribute")));
    }
    *slot = Some(meta.path.span());
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes placed on the struct itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(file = "...")]`
    pub file: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("file") {
                    if this.file.is_some() {
                        return Err(meta.error("duplicate `file` attribute"));
                    }
                    this.file = Some(meta.value()?.parse::<LitStr>()?);
                    Ok(())
                } else if meta.path.is_ident("skip")
                    || meta.path.is_ident("readonly")
                    || meta.path.is_ident("opaque")
                {
                    Err(meta.error("this attribute is only allowed on fields"))
                } else {
                    Err(meta.error("unknown reflect attribute, expected `file = \"...\"`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes placed on a named field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`: static data, never read or written.
    pub skip: Option<Span>,
    /// `#[reflect(readonly)]`: not writable, never read or written.
    pub readonly: Option<Span>,
    /// `#[reflect(opaque)]`: always classified as unsupported.
    pub opaque: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    set_flag(&mut this.skip, &meta, "skip")
                } else if meta.path.is_ident("readonly") {
                    set_flag(&mut this.readonly, &meta, "readonly")
                } else if meta.path.is_ident("opaque") {
                    set_flag(&mut this.opaque, &meta, "opaque")
                } else if meta.path.is_ident("file") {
                    Err(meta.error("`file` is only allowed on the type"))
                } else {
                    Err(meta.error(
                        "unknown reflect attribute, expected `skip`, `readonly` or `opaque`",
                    ))
                }
            })?;
        }

        Ok(this)
    }

    /// Whether the field needs no accessor, and so no `Classify` bound.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.skip.is_some() || self.readonly.is_some() || self.opaque.is_some()
    }
}

//! Parsing of `#[table(...)]` and `#[column(...)]`.

use heck::ToSnakeCase;
use syn::spanned::Spanned;
use syn::{DeriveInput, LitStr, Result};

use crate::sql_ident::{check_ident, parse_column_name, parse_table_name};

/// Struct-level options.
pub(crate) struct TableAttr {
    pub name: String,
}

impl TableAttr {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut name = None;
        for attr in &input.attrs {
            if !attr.path().is_ident("table") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    name = Some(parse_table_name(&value)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown table attribute, expected `name`"))
                }
            })?;
        }
        let name = match name {
            Some(name) => name,
            None => check_ident(
                &input.ident.to_string().to_snake_case(),
                input.ident.span(),
                "table name",
            )?,
        };
        Ok(Self { name })
    }
}

/// Field-level options.
#[derive(Debug, Default)]
pub(crate) struct ColumnAttr {
    pub name: Option<String>,
    pub nullable: bool,
    pub trivial_is_null: bool,
}

impl ColumnAttr {
    pub(crate) fn from_field(field: &syn::Field) -> Result<Self> {
        let mut out = Self::default();
        let mut trivial_span = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("column") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    out.name = Some(parse_column_name(&value)?);
                } else if meta.path.is_ident("nullable") {
                    out.nullable = true;
                } else if meta.path.is_ident("trivial_is_null") {
                    out.trivial_is_null = true;
                    trivial_span = Some(meta.path.span());
                } else {
                    return Err(meta.error(
                        "unknown column attribute, expected `name`, `nullable` or `trivial_is_null`",
                    ));
                }
                Ok(())
            })?;
        }
        if let (Some(span), false) = (trivial_span, out.nullable) {
            return Err(syn::Error::new(
                span,
                "`trivial_is_null` writes NULL and requires `nullable`",
            ));
        }
        Ok(out)
    }
}

//! Table derive macro implementation

use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Result, Visibility};

use crate::attrs::{ColumnAttr, TableAttr};
use crate::sql_ident::{check_ident, check_unique};

/// Longest select list the core crate has tuple impls for.
const MAX_COLUMNS: usize = 16;

struct ColumnDef {
    field: syn::Ident,
    ty: syn::Type,
    type_name: syn::Ident,
    name: String,
    attr: ColumnAttr,
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Table cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Table can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Table can only be derived for structs",
            ));
        }
    };

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(&input, "a table needs at least one column"));
    }
    if fields.len() > MAX_COLUMNS {
        return Err(syn::Error::new_spanned(
            &input,
            format!("a table can have at most {MAX_COLUMNS} columns"),
        ));
    }

    let table_attr = TableAttr::from_input(&input)?;
    let columns = fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let attr = ColumnAttr::from_field(field)?;
            let name = match &attr.name {
                Some(name) => name.clone(),
                None => check_ident(&ident.to_string(), ident.span(), "column name")?,
            };
            Ok(ColumnDef {
                type_name: format_ident!("{}", ident.to_string().to_upper_camel_case()),
                name,
                field: ident,
                ty: field.ty.clone(),
                attr,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    check_unique(columns.iter().map(|c| (c.name.as_str(), c.field.span())))?;

    let name = &input.ident;
    let vis = &input.vis;
    let module = format_ident!("{}", name.to_string().to_snake_case());
    let table_name = &table_attr.name;

    let column_vis = nested_visibility(vis);
    let type_names: Vec<_> = columns.iter().map(|c| &c.type_name).collect();
    let column_structs = columns.iter().map(|c| {
        let type_name = &c.type_name;
        let doc = format!("Column `{}.{}`.", table_name, c.name);
        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            #column_vis struct #type_name;
        }
    });

    let accessors = columns.iter().map(|c| {
        let field = &c.field;
        let type_name = &c.type_name;
        quote! {
            #vis fn #field(&self) -> #module::#type_name {
                let _ = &self.#field;
                #module::#type_name
            }
        }
    });

    let column_impls = columns.iter().map(|c| {
        let type_name = &c.type_name;
        let ty = &c.ty;
        let column_name = &c.name;
        let trivial_is_null = c.attr.trivial_is_null;
        let nullability = if c.attr.nullable {
            quote!(::typedsql::kind::CanBeNull)
        } else {
            quote!(::typedsql::kind::NotNull)
        };
        quote! {
            impl ::typedsql::serialize::Serialize for #module::#type_name {
                fn serialize<C: ::typedsql::context::Context + ?Sized>(&self, ctx: &mut C) {
                    ::typedsql::table::serialize_column::<Self, C>(ctx);
                }
            }

            impl ::typedsql::expr::Expression for #module::#type_name {
                type Kind = #ty;
                type Nullability = #nullability;
                const TRIVIAL_VALUE_IS_NULL: bool = #trivial_is_null;
            }

            impl ::typedsql::table::Column for #module::#type_name {
                type Table = #name;
                const NAME: &'static str = #column_name;
            }
        }
    });

    let module_doc = format!("Columns of `{table_name}`.");

    Ok(quote! {
        #[doc = #module_doc]
        #vis mod #module {
            #(#column_structs)*
        }

        impl ::typedsql::serialize::Serialize for #name {
            fn serialize<C: ::typedsql::context::Context + ?Sized>(&self, ctx: &mut C) {
                ::typedsql::table::serialize_table::<Self, C>(ctx);
            }
        }

        impl ::typedsql::table::Table for #name {
            const NAME: &'static str = #table_name;
            type AllColumns = (#(#module::#type_names,)*);

            fn all_columns(&self) -> Self::AllColumns {
                (#(#module::#type_names,)*)
            }
        }

        impl #name {
            #(#accessors)*
        }

        #(#column_impls)*
    })
}

/// The visibility `vis` seen from inside the generated column module.
///
/// Column types must not be visible beyond the table struct they name.
fn nested_visibility(vis: &Visibility) -> TokenStream {
    match vis {
        Visibility::Public(_) => quote!(pub),
        Visibility::Inherited => quote!(pub(super)),
        Visibility::Restricted(restricted) => {
            let path = &restricted.path;
            let first = path.segments.first().map(|s| s.ident.to_string());
            match first.as_deref() {
                Some("crate") => quote!(pub(in #path)),
                Some("self") => {
                    let rest = path.segments.iter().skip(1);
                    if path.segments.len() == 1 {
                        quote!(pub(super))
                    } else {
                        quote!(pub(in super #(:: #rest)*))
                    }
                }
                _ => quote!(pub(in super::#path)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn generates_module_and_accessors() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "tab_sample")]
            pub struct TabSample {
                alpha: Integral,
                #[column(nullable, trivial_is_null)]
                beta: Text,
            }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("pub mod tab_sample"));
        assert!(out.contains("pub struct Alpha"));
        assert!(out.contains("pub fn beta"));
        assert!(out.contains("\"tab_sample\""));
        assert!(out.contains(":: typedsql :: kind :: CanBeNull"));
    }

    fn column_visibility(input: DeriveInput) -> Visibility {
        let file: syn::File = syn::parse2(expand(input).unwrap()).unwrap();
        file.items
            .into_iter()
            .find_map(|item| match item {
                syn::Item::Mod(module) => module.content,
                _ => None,
            })
            .and_then(|(_, items)| {
                items.into_iter().find_map(|item| match item {
                    syn::Item::Struct(column) => Some(column.vis),
                    _ => None,
                })
            })
            .unwrap()
    }

    #[test]
    fn column_types_follow_the_struct_visibility() {
        let private = column_visibility(parse_quote! {
            struct OrderLine { line_id: Integral }
        });
        assert_eq!(quote!(#private).to_string(), quote!(pub(super)).to_string());

        let crate_wide = column_visibility(parse_quote! {
            pub(crate) struct OrderLine { line_id: Integral }
        });
        assert_eq!(quote!(#crate_wide).to_string(), quote!(pub(in crate)).to_string());

        let parent = column_visibility(parse_quote! {
            pub(super) struct OrderLine { line_id: Integral }
        });
        assert_eq!(quote!(#parent).to_string(), quote!(pub(in super::super)).to_string());

        let public = column_visibility(parse_quote! {
            pub struct OrderLine { line_id: Integral }
        });
        assert!(matches!(public, Visibility::Public(_)));
    }

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = parse_quote! {
            struct TabSample(Integral);
        };
        assert!(expand(input).is_err());
    }

    #[test]
    fn rejects_too_many_columns() {
        let fields = (0..17usize).map(|i| format_ident!("c{}", i));
        let input: DeriveInput = parse_quote! {
            struct Wide { #(#fields: Integral,)* }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("at most 16 columns"));
    }

    #[test]
    fn rejects_duplicate_column_names() {
        let input: DeriveInput = parse_quote! {
            struct TabSample {
                alpha: Integral,
                #[column(name = "alpha")]
                beta: Integral,
            }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("duplicate column 'alpha'"));
    }
}

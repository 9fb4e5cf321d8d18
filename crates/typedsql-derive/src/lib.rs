//! Derive macros for typedsql
//!
//! Provides `#[derive(Table)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod sql_ident;
mod table;

/// Derive `Table` for a struct whose fields are its columns.
///
/// Each field's type is the column's value kind (`Boolean`, `Integral`,
/// `FloatingPoint` or `Text`). The struct must also derive `Clone`, `Copy`, `Default`
/// and `Debug`.
///
/// # Example
///
/// ```ignore
/// use typedsql::{Integral, Table, Text};
///
/// #[derive(Table, Clone, Copy, Default, Debug)]
/// #[table(name = "tab_sample")]
/// struct TabSample {
///     alpha: Integral,
///     #[column(nullable, trivial_is_null)]
///     beta: Text,
/// }
///
/// let t = TabSample::default();
/// let alpha: tab_sample::Alpha = t.alpha();
/// ```
///
/// # Generated
///
/// - a module named after the struct in snake_case, holding one zero-sized type per
///   column, named after the field in UpperCamelCase
/// - `Serialize`, `Expression` and `Column` for every column type
/// - `Serialize` and `Table` for the struct
/// - one accessor method per field returning its column
///
/// # Attributes
///
/// - `#[table(name = "name")]` - Table name (defaults to the struct name in snake_case)
/// - `#[column(name = "name")]` - Column name (defaults to the field name)
/// - `#[column(nullable)]` - The column can hold NULL
/// - `#[column(trivial_is_null)]` - Trivial values are written and read as NULL (needs `nullable`)
#[proc_macro_derive(Table, attributes(table, column))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    table::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

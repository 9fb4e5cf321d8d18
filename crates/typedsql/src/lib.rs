//! # typedsql
//!
//! Compile-time checked SQL statements, embedded in Rust.
//!
//! Tables and columns are types. Expressions, clauses and whole statements are values
//! whose types carry what the database would otherwise check at run time, so a
//! statement that compiles is well formed:
//!
//! - **Kinds**: operands of an operator agree in kind (boolean, integral, floating
//!   point, text), and only kinds that support an operator get it.
//! - **Nullability**: NULL cannot be assigned to a `NOT NULL` column.
//! - **Scope**: every column a clause mentions belongs to a table the statement names.
//! - **Shape**: each clause appears at most once, in a valid combination (`HAVING` needs
//!   `GROUP BY`, `OFFSET` needs `LIMIT`, an update or delete needs `WHERE` or
//!   `unconditionally()`).
//!
//! Statements serialize to SQL text through a [`Context`] and run on any [`Connector`].
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//!
//! let q = select((t.alpha(), count(t.beta())))
//!     .from(t)
//!     .where_(t.gamma().and(t.beta().like("%cake")))
//!     .group_by(t.alpha());
//! assert_eq!(
//!     to_sql(&q),
//!     "SELECT tab_sample.alpha,COUNT(tab_sample.beta) FROM tab_sample \
//!      WHERE tab_sample.gamma AND tab_sample.beta LIKE '%cake' \
//!      GROUP BY tab_sample.alpha",
//! );
//!
//! let q = update(t).set(t.beta().set(tvin(""))).where_(t.alpha().eq(7));
//! assert_eq!(to_sql(&q), "UPDATE tab_sample SET beta=NULL WHERE tab_sample.alpha=7");
//! ```
//!
//! ## Tables
//!
//! With the `derive` feature (on by default), `#[derive(Table)]` generates the column
//! types and accessors for a struct whose field types are the column kinds:
//!
//! ```ignore
//! use typedsql::{Boolean, Integral, Table, Text};
//!
//! #[derive(Table, Clone, Copy, Default, Debug)]
//! #[table(name = "tab_sample")]
//! struct TabSample {
//!     alpha: Integral,
//!     #[column(nullable, trivial_is_null)]
//!     beta: Text,
//!     gamma: Boolean,
//! }
//! ```
//!
//! `trivial_is_null` writes NULL, so it is only accepted together with `nullable`:
//!
//! ```compile_fail
//! use typedsql::{Integral, Table};
//!
//! #[derive(Table, Clone, Copy, Default, Debug)]
//! struct TabStock {
//!     #[column(trivial_is_null)]
//!     qty: Integral,
//! }
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature (on by default) every statement handed to a connector is
//! logged at `debug` level on the `typedsql.sql` target, and failed result field
//! accesses are logged at `warn` level on `typedsql.result`.

extern crate self as typedsql;

pub(crate) mod macros;

pub mod clause;
pub mod connector;
pub mod context;
pub mod error;
pub mod expr;
pub mod ident;
pub mod kind;
pub mod operand;
pub mod parameter;
pub mod prelude;
pub mod prepared;
pub mod result;
pub mod scope;
pub mod serialize;
pub mod statement;
pub mod table;

#[doc(hidden)]
#[path = "doc_schema.rs"]
pub mod __doc_schema;

#[cfg(test)]
pub(crate) use __doc_schema as test_schema;

pub use clause::{All, ColumnExt, Distinct};
pub use connector::{Connector, ParameterBinder, ResultBinder, ResultCursor, ResultPolicy};
pub use context::{Context, ContextConfig, IdentifierQuoting, PlaceholderStyle, StringContext};
pub use error::{Error, Result};
pub use expr::{Expression, ExpressionExt, avg, count, count_all, max, min, sum};
pub use ident::Ident;
pub use kind::{Boolean, CanBeNull, FloatingPoint, Integral, NotNull, Text, ValueKind};
pub use operand::{null, tvin};
pub use parameter::{Parameter, ParameterList, parameter, parameter_for};
pub use prepared::{PreparedSelect, PreparedWrite};
pub use result::{Field, ResultRow, ResultSet};
pub use serialize::{Serialize, to_sql, to_sql_with};
pub use statement::{insert_into, remove_from, select, update};
pub use table::{Column, DynamicTable, JoinExt, Table, all_of};

#[cfg(feature = "derive")]
pub use typedsql_derive::Table;

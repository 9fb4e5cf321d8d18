//! Convenient imports for typical `typedsql` usage.
//!
//! ```
//! use typedsql::prelude::*;
//! ```

pub use crate::{
    All, CanBeNull, Column, ColumnExt, Connector, Context, Distinct, DynamicTable, Error,
    Expression, ExpressionExt, JoinExt, NotNull, Serialize, StringContext, Table,
    all_of, avg, count, count_all, insert_into, max, min, null, parameter, parameter_for,
    remove_from, select, sum, to_sql, tvin, update,
};
pub use crate::kind::{Boolean, FloatingPoint, Integral, Text};

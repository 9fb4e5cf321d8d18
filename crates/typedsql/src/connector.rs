//! The contract between the query core and a database driver.
//!
//! The core never talks to a database. It serializes statements through the
//! connector's [`Context`], hands the resulting SQL to the connector and reads rows back
//! through a [`ResultCursor`]. Values cross the boundary only through the binder traits
//! in this module.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::Result;
use crate::parameter::ParameterList;
use crate::result::ResultRow;

/// Receives prepared statement parameters, one call per placeholder position.
///
/// Positions start at zero. `is_null` is set for parameters that were never assigned or
/// were explicitly set to NULL; `value` is then the kind's default and must be ignored.
pub trait ParameterBinder {
    fn bind_boolean_parameter(&mut self, index: usize, value: bool, is_null: bool);
    fn bind_integral_parameter(&mut self, index: usize, value: i64, is_null: bool);
    fn bind_floating_point_parameter(&mut self, index: usize, value: f64, is_null: bool);
    fn bind_text_parameter(&mut self, index: usize, value: &str, is_null: bool);
}

/// Fills result fields of the current row, one call per select-list position.
///
/// Implementations write both the value and its NULL flag.
pub trait ResultBinder {
    fn bind_boolean_result(&mut self, index: usize, value: &mut bool, is_null: &mut bool);
    fn bind_integral_result(&mut self, index: usize, value: &mut i64, is_null: &mut bool);
    fn bind_floating_point_result(&mut self, index: usize, value: &mut f64, is_null: &mut bool);
    fn bind_text_result(&mut self, index: usize, value: &mut String, is_null: &mut bool);
}

/// Forward-only iteration over the rows of a select.
pub trait ResultCursor {
    /// Advance to the next row.
    ///
    /// On success the connector binds every field of `row` and calls
    /// [`ResultRow::validate`], returning `true`. Once the rows are exhausted it calls
    /// [`ResultRow::invalidate`] and returns `false`.
    fn next(&mut self, row: &mut dyn ResultRow) -> Result<bool>;
}

/// How result fields behave, chosen by the connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultPolicy {
    /// Panic (instead of returning an error) when a field of an invalid row is read.
    pub assert_validity: bool,
    /// Report NULL fields as their kind's trivial value instead of failing.
    pub null_is_trivial: bool,
}

impl ResultPolicy {
    /// Create a new policy with defaults (errors, NULL is not trivial).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether invalid accesses panic.
    pub fn assert_validity(mut self, enabled: bool) -> Self {
        self.assert_validity = enabled;
        self
    }

    /// Set whether NULL fields read as trivial values.
    pub fn null_is_trivial(mut self, enabled: bool) -> Self {
        self.null_is_trivial = enabled;
        self
    }
}

/// A database driver.
///
/// Statement execution methods receive fully serialized SQL. Errors a connector reports
/// are expected to be wrapped with [`Error::connector`](crate::Error::connector) and are
/// passed through the core untouched.
pub trait Connector {
    /// Serialization context carrying this database's dialect.
    type Context: Context;
    /// Cursor over select results.
    type Cursor: ResultCursor;
    /// Handle to a prepared statement.
    type Prepared;

    /// A fresh serialization context.
    fn context(&self) -> Self::Context;

    /// Behavior of result fields produced by this connector.
    fn result_policy(&self) -> ResultPolicy {
        ResultPolicy::default()
    }

    fn select(&mut self, sql: &str) -> Result<Self::Cursor>;
    fn insert(&mut self, sql: &str) -> Result<u64>;
    fn update(&mut self, sql: &str) -> Result<u64>;
    fn remove(&mut self, sql: &str) -> Result<u64>;

    fn prepare_select(&mut self, sql: &str) -> Result<Self::Prepared>;
    fn prepare_insert(&mut self, sql: &str) -> Result<Self::Prepared>;
    fn prepare_update(&mut self, sql: &str) -> Result<Self::Prepared>;
    fn prepare_remove(&mut self, sql: &str) -> Result<Self::Prepared>;

    /// Run a prepared select. Parameters are bound with [`ParameterList::bind_all`].
    fn run_prepared_select(
        &mut self,
        prepared: &mut Self::Prepared,
        params: &ParameterList,
    ) -> Result<Self::Cursor>;
    fn run_prepared_insert(
        &mut self,
        prepared: &mut Self::Prepared,
        params: &ParameterList,
    ) -> Result<u64>;
    fn run_prepared_update(
        &mut self,
        prepared: &mut Self::Prepared,
        params: &ParameterList,
    ) -> Result<u64>;
    fn run_prepared_remove(
        &mut self,
        prepared: &mut Self::Prepared,
        params: &ParameterList,
    ) -> Result<u64>;
}

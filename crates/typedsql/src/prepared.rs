//! Prepared statements.
//!
//! Preparing serializes the statement once, with placeholders for its parameters, and
//! hands the SQL to the connector. The returned handle owns a [`ParameterList`] whose
//! values are bound on every run.

use std::fmt;

use crate::clause::SelectList;
use crate::connector::Connector;
use crate::error::Result;
use crate::kind::{CanBeNull, Nullability, ValueKind};
use crate::macros::trace_sql;
use crate::parameter::{Parameter, ParameterList};
use crate::result::ResultSet;
use crate::statement::WriteKind;

/// A prepared select.
pub struct PreparedSelect<D: Connector, L> {
    handle: D::Prepared,
    params: ParameterList,
    columns: L,
    sql: String,
}

impl<D: Connector, L: SelectList> PreparedSelect<D, L> {
    pub(crate) fn new(handle: D::Prepared, params: ParameterList, columns: L, sql: String) -> Self {
        Self {
            handle,
            params,
            columns,
            sql,
        }
    }

    /// The SQL handed to the connector.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }

    /// Shorthand for `params_mut().set(..)`.
    pub fn set<K, N, V>(&mut self, param: &Parameter<K, N>, value: V) -> Result<&mut Self>
    where
        K: ValueKind,
        N: Nullability,
        V: Into<K::Native>,
    {
        self.params.set(param, value)?;
        Ok(self)
    }

    pub fn set_null<K: ValueKind>(&mut self, param: &Parameter<K, CanBeNull>) -> Result<&mut Self> {
        self.params.set_null(param)?;
        Ok(self)
    }

    /// Run with the current parameter values.
    pub fn run(&mut self, db: &mut D) -> Result<ResultSet<D::Cursor, L::Row>> {
        trace_sql!("select", self.sql);
        let cursor = db.run_prepared_select(&mut self.handle, &self.params)?;
        Ok(ResultSet::new(cursor, self.columns.new_row(db.result_policy())))
    }
}

impl<D: Connector, L> fmt::Debug for PreparedSelect<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedSelect")
            .field("sql", &self.sql)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A prepared insert, update or delete.
pub struct PreparedWrite<D: Connector> {
    handle: D::Prepared,
    params: ParameterList,
    sql: String,
    kind: WriteKind,
}

impl<D: Connector> PreparedWrite<D> {
    pub(crate) fn new(handle: D::Prepared, params: ParameterList, sql: String, kind: WriteKind) -> Self {
        Self {
            handle,
            params,
            sql,
            kind,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn kind(&self) -> WriteKind {
        self.kind
    }

    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }

    /// Shorthand for `params_mut().set(..)`.
    pub fn set<K, N, V>(&mut self, param: &Parameter<K, N>, value: V) -> Result<&mut Self>
    where
        K: ValueKind,
        N: Nullability,
        V: Into<K::Native>,
    {
        self.params.set(param, value)?;
        Ok(self)
    }

    pub fn set_null<K: ValueKind>(&mut self, param: &Parameter<K, CanBeNull>) -> Result<&mut Self> {
        self.params.set_null(param)?;
        Ok(self)
    }

    /// Run with the current parameter values and return the affected row count.
    pub fn run(&mut self, db: &mut D) -> Result<u64> {
        trace_sql!(self.kind.as_str(), self.sql);
        match self.kind {
            WriteKind::Insert => db.run_prepared_insert(&mut self.handle, &self.params),
            WriteKind::Update => db.run_prepared_update(&mut self.handle, &self.params),
            WriteKind::Remove => db.run_prepared_remove(&mut self.handle, &self.params),
        }
    }
}

impl<D: Connector> fmt::Debug for PreparedWrite<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedWrite")
            .field("kind", &self.kind)
            .field("sql", &self.sql)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

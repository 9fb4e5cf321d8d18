//! Statements: `SELECT`, `INSERT`, `UPDATE` and `DELETE`.
//!
//! Every statement is a value whose type records which clauses are set. Builder methods
//! exist only where their clause is still missing and its prerequisites are met, so an
//! ill-formed statement fails to compile instead of failing at the database. Builders
//! take `&self` and return a new statement; the old one stays usable.

mod insert;
mod remove;
mod select;
mod update;

pub use insert::{Insert, insert_into};
pub use remove::{Remove, remove_from};
pub use select::{EmptySelect, Select, select};
pub use update::{Update, update};

use crate::connector::Connector;
use crate::error::Result;
use crate::macros::trace_sql;
use crate::parameter::{ParameterList, ParameterRecorder};
use crate::prepared::PreparedWrite;
use crate::serialize::{Serialize, to_sql_with};

/// The statements that report a row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteKind {
    Insert,
    Update,
    Remove,
}

impl WriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }
}

/// SQL for `node` in the connector's dialect.
pub(crate) fn render<D: Connector, T: Serialize + ?Sized>(node: &T, db: &D) -> String {
    to_sql_with(node, db.context())
}

/// SQL for `node` plus the parameters it declares, in placeholder order.
pub(crate) fn render_prepared<D: Connector, T: Serialize + ?Sized>(
    node: &T,
    db: &D,
) -> (String, ParameterList) {
    let mut recorder = ParameterRecorder::new(db.context());
    node.serialize(&mut recorder);
    recorder.finish()
}

/// Run an insert, update or delete.
pub(crate) fn execute<D: Connector>(db: &mut D, kind: WriteKind, sql: &str) -> Result<u64> {
    trace_sql!(kind.as_str(), sql);
    match kind {
        WriteKind::Insert => db.insert(sql),
        WriteKind::Update => db.update(sql),
        WriteKind::Remove => db.remove(sql),
    }
}

/// Prepare an insert, update or delete.
pub(crate) fn prepare_write<D: Connector, T: Serialize + ?Sized>(
    node: &T,
    db: &mut D,
    kind: WriteKind,
) -> Result<PreparedWrite<D>> {
    let (sql, params) = render_prepared(node, db);
    trace_sql!(kind.as_str(), sql);
    let handle = match kind {
        WriteKind::Insert => db.prepare_insert(&sql)?,
        WriteKind::Update => db.prepare_update(&sql)?,
        WriteKind::Remove => db.prepare_remove(&sql)?,
    };
    Ok(PreparedWrite::new(handle, params, sql, kind))
}

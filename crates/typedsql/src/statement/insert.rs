//! `INSERT`.
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = insert_into(t).set((t.alpha().set(1), t.beta().set("cake"), t.gamma().set(true)));
//! assert_eq!(
//!     to_sql(&q),
//!     "INSERT INTO tab_sample (alpha,beta,gamma) VALUES(1,'cake',TRUE)",
//! );
//! ```
//!
//! NULL cannot be written into a `NOT NULL` column:
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = insert_into(t).set(t.alpha().set(null()));
//! ```

use crate::clause::{DefaultValues, InsertSet, InsertValues, IntoAssignments, NoClause};
use crate::connector::Connector;
use crate::context::Context;
use crate::error::Result;
use crate::prepared::PreparedWrite;
use crate::scope::InScope;
use crate::serialize::Serialize;
use crate::statement::{WriteKind, execute, prepare_write, render};
use crate::table::{Table, serialize_table};

/// An insert into `T`; `V` is its values slot.
#[derive(Debug, Clone, Copy)]
pub struct Insert<T, V> {
    table: T,
    values: V,
}

/// Start an insert into `table`.
pub fn insert_into<T: Table>(table: T) -> Insert<T, NoClause> {
    Insert {
        table,
        values: NoClause,
    }
}

impl<T: Table> Insert<T, NoClause> {
    /// ` (columns) VALUES(values)` from one assignment or a tuple of them. Columns must
    /// belong to `T`.
    pub fn set<A, I>(&self, assignments: A) -> Insert<T, InsertSet<A::List>>
    where
        A: IntoAssignments,
        A::List: InScope<(T,), I>,
    {
        Insert {
            table: self.table,
            values: InsertSet::new(assignments.into_assignments()),
        }
    }

    /// ` DEFAULT VALUES`
    pub fn default_values(&self) -> Insert<T, DefaultValues> {
        Insert {
            table: self.table,
            values: DefaultValues,
        }
    }
}

impl<T: Table, V: InsertValues> Serialize for Insert<T, V> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("INSERT INTO ");
        serialize_table::<T, C>(ctx);
        self.values.serialize(ctx);
    }
}

impl<T: Table, V: InsertValues> Insert<T, V> {
    /// Run the insert and return the affected row count.
    pub fn run<D: Connector>(&self, db: &mut D) -> Result<u64> {
        let sql = render(self, db);
        execute(db, WriteKind::Insert, &sql)
    }

    pub fn prepare<D: Connector>(&self, db: &mut D) -> Result<PreparedWrite<D>> {
        prepare_write(self, db, WriteKind::Insert)
    }
}

//! `DELETE`.
//!
//! Like an update, a delete needs a `WHERE` or an explicit
//! [`unconditionally`](Remove::unconditionally).
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! assert_eq!(
//!     to_sql(&remove_from(t).where_(t.alpha().is_null())),
//!     "DELETE FROM tab_sample WHERE tab_sample.alpha IS NULL",
//! );
//! assert_eq!(to_sql(&remove_from(t).unconditionally()), "DELETE FROM tab_sample");
//! ```

use crate::clause::{
    Conjuncts, DynamicWhere, IntoConjuncts, NoClause, Unconditional, Where, WhereClause,
};
use crate::connector::Connector;
use crate::context::Context;
use crate::error::Result;
use crate::expr::Expression;
use crate::kind::Boolean;
use crate::prepared::PreparedWrite;
use crate::scope::InScope;
use crate::serialize::Serialize;
use crate::statement::{WriteKind, execute, prepare_write, render};
use crate::table::{Table, serialize_table};

/// A delete from `T` with a where slot `W`.
#[derive(Debug, Clone)]
pub struct Remove<T, W> {
    table: T,
    where_: W,
}

/// Start a delete from `table`.
pub fn remove_from<T: Table>(table: T) -> Remove<T, NoClause> {
    Remove {
        table,
        where_: NoClause,
    }
}

impl<T: Table> Remove<T, NoClause> {
    /// `WHERE predicate`
    pub fn where_<P, I>(&self, predicate: P) -> Remove<T, Where<P>>
    where
        P: Expression<Kind = Boolean> + InScope<(T,), I>,
    {
        Remove {
            table: self.table,
            where_: Where::new(predicate),
        }
    }

    /// `WHERE` with an optional static predicate, extended at run time with
    /// [`add_where`](Remove::add_where).
    pub fn dynamic_where<P, I>(&self, predicate: P) -> Remove<T, DynamicWhere<P::Conjuncts>>
    where
        P: IntoConjuncts,
        P::Conjuncts: InScope<(T,), I>,
    {
        Remove {
            table: self.table,
            where_: DynamicWhere::new(predicate.into_conjuncts()),
        }
    }

    /// Delete every row.
    pub fn unconditionally(&self) -> Remove<T, Unconditional> {
        Remove {
            table: self.table,
            where_: Unconditional,
        }
    }
}

impl<T, P: Conjuncts> Remove<T, DynamicWhere<P>> {
    /// Add a predicate to a dynamic `WHERE`, joined with `AND`.
    pub fn add_where<E: Expression<Kind = Boolean>>(&mut self, predicate: E) -> &mut Self {
        self.where_.add(predicate);
        self
    }
}

impl<T: Table, W: WhereClause> Serialize for Remove<T, W> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("DELETE FROM ");
        serialize_table::<T, C>(ctx);
        self.where_.serialize(ctx);
    }
}

impl<T: Table, W: WhereClause> Remove<T, W> {
    /// Run the delete and return the affected row count.
    pub fn run<D: Connector>(&self, db: &mut D) -> Result<u64> {
        let sql = render(self, db);
        execute(db, WriteKind::Remove, &sql)
    }

    pub fn prepare<D: Connector>(&self, db: &mut D) -> Result<PreparedWrite<D>> {
        prepare_write(self, db, WriteKind::Remove)
    }
}

//! `UPDATE`.
//!
//! An update needs a `SET` and then either a `WHERE` or an explicit
//! [`unconditionally`](Update::unconditionally):
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = update(t).set(t.gamma().set(false)).where_(t.beta().eq("cake"));
//! assert_eq!(to_sql(&q), "UPDATE tab_sample SET gamma=FALSE WHERE tab_sample.beta='cake'");
//! ```
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let sql = to_sql(&update(t).set(t.gamma().set(false)));
//! ```

use crate::clause::{
    AssignmentItem, Conjuncts, DynamicSet, DynamicWhere, IntoAssignments, IntoConjuncts,
    IntoDynamicAssignments, NoClause, Set, SetClause, Unconditional, Where, WhereClause,
};
use crate::connector::Connector;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::expr::Expression;
use crate::kind::Boolean;
use crate::prepared::PreparedWrite;
use crate::scope::InScope;
use crate::serialize::Serialize;
use crate::statement::{WriteKind, execute, prepare_write, render};
use crate::table::{Table, serialize_table};

/// An update of `T` with a set slot `S` and a where slot `W`.
#[derive(Debug, Clone)]
pub struct Update<T, S, W> {
    table: T,
    set: S,
    where_: W,
}

/// Start an update of `table`.
pub fn update<T: Table>(table: T) -> Update<T, NoClause, NoClause> {
    Update {
        table,
        set: NoClause,
        where_: NoClause,
    }
}

impl<T: Table> Update<T, NoClause, NoClause> {
    /// `SET a=1,b=2`; columns must belong to `T`.
    pub fn set<A, I>(&self, assignments: A) -> Update<T, Set<A::List>, NoClause>
    where
        A: IntoAssignments,
        A::List: InScope<(T,), I>,
    {
        Update {
            table: self.table,
            set: Set::new(assignments.into_assignments()),
            where_: NoClause,
        }
    }

    /// `SET` with static assignments (possibly `()`), extended at run time with
    /// [`add_set`](Update::add_set).
    pub fn dynamic_set<A, I>(&self, assignments: A) -> Update<T, DynamicSet<A::List>, NoClause>
    where
        A: IntoDynamicAssignments,
        A::List: InScope<(T,), I>,
    {
        Update {
            table: self.table,
            set: DynamicSet::new(assignments.into_dynamic_assignments()),
            where_: NoClause,
        }
    }
}

impl<T: Table, A, W> Update<T, DynamicSet<A>, W> {
    /// Add an assignment to a dynamic `SET`. The column must belong to `T`.
    pub fn add_set<X, I>(&mut self, assignment: X) -> &mut Self
    where
        X: AssignmentItem + InScope<(T,), I>,
    {
        self.set.add(assignment);
        self
    }
}

impl<T: Table, S: SetClause> Update<T, S, NoClause> {
    /// `WHERE predicate`
    pub fn where_<P, I>(&self, predicate: P) -> Update<T, S, Where<P>>
    where
        P: Expression<Kind = Boolean> + InScope<(T,), I>,
    {
        self.with_where(Where::new(predicate))
    }

    /// `WHERE` with an optional static predicate, extended at run time with
    /// [`add_where`](Update::add_where).
    ///
    /// With no predicate at all the update affects every row.
    pub fn dynamic_where<P, I>(&self, predicate: P) -> Update<T, S, DynamicWhere<P::Conjuncts>>
    where
        P: IntoConjuncts,
        P::Conjuncts: InScope<(T,), I>,
    {
        self.with_where(DynamicWhere::new(predicate.into_conjuncts()))
    }

    /// Update every row.
    pub fn unconditionally(&self) -> Update<T, S, Unconditional> {
        self.with_where(Unconditional)
    }

    fn with_where<W>(&self, where_: W) -> Update<T, S, W> {
        Update {
            table: self.table,
            set: self.set.clone(),
            where_,
        }
    }
}

impl<T, S, P: Conjuncts> Update<T, S, DynamicWhere<P>> {
    /// Add a predicate to a dynamic `WHERE`, joined with `AND`.
    pub fn add_where<E: Expression<Kind = Boolean>>(&mut self, predicate: E) -> &mut Self {
        self.where_.add(predicate);
        self
    }
}

impl<T: Table, S: SetClause, W: WhereClause> Serialize for Update<T, S, W> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("UPDATE ");
        serialize_table::<T, C>(ctx);
        self.set.serialize(ctx);
        self.where_.serialize(ctx);
    }
}

impl<T: Table, S: SetClause, W: WhereClause> Update<T, S, W> {
    /// Run the update and return the affected row count.
    ///
    /// A dynamic `SET` that is still empty is rejected before reaching the database.
    pub fn run<D: Connector>(&self, db: &mut D) -> Result<u64> {
        self.check_assignments()?;
        let sql = render(self, db);
        execute(db, WriteKind::Update, &sql)
    }

    pub fn prepare<D: Connector>(&self, db: &mut D) -> Result<PreparedWrite<D>> {
        self.check_assignments()?;
        prepare_write(self, db, WriteKind::Update)
    }

    fn check_assignments(&self) -> Result<()> {
        if self.set.is_empty() {
            return Err(Error::validation(format!(
                "update of {} has no assignments",
                T::NAME
            )));
        }
        Ok(())
    }
}

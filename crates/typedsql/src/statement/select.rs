//! `SELECT`.
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = select((t.alpha(), t.beta()))
//!     .from(t)
//!     .where_(t.alpha().gt(7))
//!     .order_by(t.beta().desc())
//!     .limit(10);
//! assert_eq!(
//!     to_sql(&q),
//!     "SELECT tab_sample.alpha,tab_sample.beta FROM tab_sample \
//!      WHERE tab_sample.alpha>7 ORDER BY tab_sample.beta DESC LIMIT 10",
//! );
//! ```
//!
//! Clauses can be given once only:
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = select(t.alpha()).from(t).where_(t.gamma()).where_(t.gamma());
//! ```
//!
//! `OFFSET` needs a `LIMIT`:
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = select(t.alpha()).from(t).offset(3);
//! ```
//!
//! Operands must agree in kind:
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let q = select(t.alpha()).from(t).where_(t.alpha().eq("seven"));
//! ```
//!
//! A select without `FROM` cannot be serialized or run:
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let sql = to_sql(&select(t.alpha()));
//! ```

use crate::clause::{
    Conjuncts, DynamicFrom, DynamicWhere, Flags, FromClause, FromList, GroupBy, GroupByClause,
    Having, IntoConjuncts, IntoDynamicTables, IntoGroupList, IntoOrderList, IntoSelectList,
    IntoTables, Limit, LimitClause, NoClause, Offset, OrderBy, SelectFlag, SelectList, TableList,
    Where,
};
use crate::connector::Connector;
use crate::context::Context;
use crate::error::Result;
use crate::expr::Expression;
use crate::kind::Boolean;
use crate::macros::trace_sql;
use crate::prepared::PreparedSelect;
use crate::result::ResultSet;
use crate::scope::InScope;
use crate::serialize::Serialize;
use crate::statement::{render, render_prepared};
use crate::table::FromItem;

/// A select statement; each type parameter is one clause slot.
///
/// Slots are, in order: flags, select list, `FROM`, `WHERE`, `GROUP BY`, `HAVING`,
/// `ORDER BY`, `LIMIT` and `OFFSET`.
#[derive(Debug, Clone)]
pub struct Select<Fl, Cols, F, W, G, H, O, L, Off> {
    flags: Fl,
    columns: Cols,
    from: F,
    where_: W,
    group_by: G,
    having: H,
    order_by: O,
    limit: L,
    offset: Off,
}

/// A select with nothing but its select list.
pub type EmptySelect<Cols> =
    Select<NoClause, Cols, NoClause, NoClause, NoClause, NoClause, NoClause, NoClause, NoClause>;

/// Start a select of `columns`: one select item or a tuple of them.
pub fn select<S: IntoSelectList>(columns: S) -> EmptySelect<S::List> {
    Select {
        flags: NoClause,
        columns: columns.into_select_list(),
        from: NoClause,
        where_: NoClause,
        group_by: NoClause,
        having: NoClause,
        order_by: NoClause,
        limit: NoClause,
        offset: NoClause,
    }
}

impl<Fl, Cols, F, W, G, H, O, L, Off> Select<Fl, Cols, F, W, G, H, O, L, Off> {
    pub fn columns(&self) -> &Cols {
        &self.columns
    }
}

impl<Cols, F, W, G, H, O, L, Off> Select<NoClause, Cols, F, W, G, H, O, L, Off>
where
    Self: Clone,
{
    /// `SELECT DISTINCT` or `SELECT ALL`.
    pub fn flags<X: SelectFlag>(&self, flag: X) -> Select<Flags<X>, Cols, F, W, G, H, O, L, Off> {
        let this = self.clone();
        Select {
            flags: Flags::new(flag),
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: this.group_by,
            having: this.having,
            order_by: this.order_by,
            limit: this.limit,
            offset: this.offset,
        }
    }
}

type Bare<Fl, Cols, F> =
    Select<Fl, Cols, F, NoClause, NoClause, NoClause, NoClause, NoClause, NoClause>;

impl<Fl: Clone, Cols: SelectList> Bare<Fl, Cols, NoClause> {
    /// `FROM tables`; every selected column must belong to one of them.
    pub fn from<T, I>(&self, tables: T) -> Bare<Fl, Cols, FromList<T::Tables>>
    where
        T: IntoTables,
        Cols: InScope<T::Tables, I>,
    {
        self.with_from(FromList::new(tables.into_tables()))
    }

    /// `FROM` with static `tables` (possibly `()`) that can be extended with
    /// [`add_from`](Select::add_from). Selected columns are checked against the static
    /// tables only.
    pub fn dynamic_from<T, I>(&self, tables: T) -> Bare<Fl, Cols, DynamicFrom<T::Tables>>
    where
        T: IntoDynamicTables,
        Cols: InScope<T::Tables, I>,
    {
        self.with_from(DynamicFrom::new(tables.into_dynamic_tables()))
    }

    fn with_from<F>(&self, from: F) -> Bare<Fl, Cols, F> {
        Select {
            flags: self.flags.clone(),
            columns: self.columns.clone(),
            from,
            where_: NoClause,
            group_by: NoClause,
            having: NoClause,
            order_by: NoClause,
            limit: NoClause,
            offset: NoClause,
        }
    }
}

impl<Fl, Cols, F: FromClause, G, H, O, L, Off> Select<Fl, Cols, F, NoClause, G, H, O, L, Off>
where
    Self: Clone,
{
    /// `WHERE predicate`
    pub fn where_<P, I>(&self, predicate: P) -> Select<Fl, Cols, F, Where<P>, G, H, O, L, Off>
    where
        P: Expression<Kind = Boolean> + InScope<F::Tables, I>,
    {
        self.with_where(Where::new(predicate))
    }

    /// `WHERE` with an optional static predicate, extended at run time with
    /// [`add_where`](Select::add_where).
    pub fn dynamic_where<P, I>(
        &self,
        predicate: P,
    ) -> Select<Fl, Cols, F, DynamicWhere<P::Conjuncts>, G, H, O, L, Off>
    where
        P: IntoConjuncts,
        P::Conjuncts: InScope<F::Tables, I>,
    {
        self.with_where(DynamicWhere::new(predicate.into_conjuncts()))
    }

    fn with_where<W>(&self, where_: W) -> Select<Fl, Cols, F, W, G, H, O, L, Off> {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_,
            group_by: this.group_by,
            having: this.having,
            order_by: this.order_by,
            limit: this.limit,
            offset: this.offset,
        }
    }
}

impl<Fl, Cols, F: FromClause, W, O, L, Off> Select<Fl, Cols, F, W, NoClause, NoClause, O, L, Off>
where
    Self: Clone,
{
    /// `GROUP BY expressions`
    pub fn group_by<X, I>(
        &self,
        expressions: X,
    ) -> Select<Fl, Cols, F, W, GroupBy<X::List>, NoClause, O, L, Off>
    where
        X: IntoGroupList,
        X::List: InScope<F::Tables, I>,
    {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: GroupBy::new(expressions.into_group_list()),
            having: NoClause,
            order_by: this.order_by,
            limit: this.limit,
            offset: this.offset,
        }
    }
}

impl<Fl, Cols, F: FromClause, W, G: GroupByClause, O, L, Off>
    Select<Fl, Cols, F, W, G, NoClause, O, L, Off>
where
    Self: Clone,
{
    /// `HAVING predicate`; needs a `GROUP BY`.
    pub fn having<P, I>(&self, predicate: P) -> Select<Fl, Cols, F, W, G, Having<P>, O, L, Off>
    where
        P: Expression<Kind = Boolean> + InScope<F::Tables, I>,
    {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: this.group_by,
            having: Having::new(predicate),
            order_by: this.order_by,
            limit: this.limit,
            offset: this.offset,
        }
    }
}

impl<Fl, Cols, F: FromClause, W, G, H, L, Off> Select<Fl, Cols, F, W, G, H, NoClause, L, Off>
where
    Self: Clone,
{
    /// `ORDER BY items`: expressions, or `expr.asc()` / `expr.desc()`.
    pub fn order_by<X, I>(&self, items: X) -> Select<Fl, Cols, F, W, G, H, OrderBy<X::List>, L, Off>
    where
        X: IntoOrderList,
        X::List: InScope<F::Tables, I>,
    {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: this.group_by,
            having: this.having,
            order_by: OrderBy::new(items.into_order_list()),
            limit: this.limit,
            offset: this.offset,
        }
    }
}

impl<Fl, Cols, F: FromClause, W, G, H, O> Select<Fl, Cols, F, W, G, H, O, NoClause, NoClause>
where
    Self: Clone,
{
    /// `LIMIT count`
    pub fn limit(&self, count: u64) -> Select<Fl, Cols, F, W, G, H, O, Limit, NoClause> {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: this.group_by,
            having: this.having,
            order_by: this.order_by,
            limit: Limit::new(count),
            offset: NoClause,
        }
    }
}

impl<Fl, Cols, F: FromClause, W, G, H, O, L: LimitClause> Select<Fl, Cols, F, W, G, H, O, L, NoClause>
where
    Self: Clone,
{
    /// `OFFSET count`; needs a `LIMIT`.
    pub fn offset(&self, count: u64) -> Select<Fl, Cols, F, W, G, H, O, L, Offset> {
        let this = self.clone();
        Select {
            flags: this.flags,
            columns: this.columns,
            from: this.from,
            where_: this.where_,
            group_by: this.group_by,
            having: this.having,
            order_by: this.order_by,
            limit: this.limit,
            offset: Offset::new(count),
        }
    }
}

impl<Fl, Cols, T: TableList, W, G, H, O, L, Off> Select<Fl, Cols, DynamicFrom<T>, W, G, H, O, L, Off> {
    /// Add a table (or join) to a dynamic `FROM`.
    pub fn add_from<X: FromItem>(&mut self, table: X) -> &mut Self {
        self.from.add(table);
        self
    }
}

impl<Fl, Cols, F, P: Conjuncts, G, H, O, L, Off> Select<Fl, Cols, F, DynamicWhere<P>, G, H, O, L, Off> {
    /// Add a predicate to a dynamic `WHERE`; all predicates are joined with `AND`.
    ///
    /// The predicate is checked for kind only, not for table scope.
    pub fn add_where<E: Expression<Kind = Boolean>>(&mut self, predicate: E) -> &mut Self {
        self.where_.add(predicate);
        self
    }
}

impl<Fl, Cols, F, W, G, H, O, L, Off> Serialize for Select<Fl, Cols, F, W, G, H, O, L, Off>
where
    Fl: Serialize,
    Cols: SelectList,
    F: FromClause,
    W: Serialize,
    G: Serialize,
    H: Serialize,
    O: Serialize,
    L: Serialize,
    Off: Serialize,
{
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("SELECT ");
        self.flags.serialize(ctx);
        self.columns.serialize_list(ctx, ",");
        self.from.serialize(ctx);
        self.where_.serialize(ctx);
        self.group_by.serialize(ctx);
        self.having.serialize(ctx);
        self.order_by.serialize(ctx);
        self.limit.serialize(ctx);
        self.offset.serialize(ctx);
    }
}

impl<Fl, Cols, F, W, G, H, O, L, Off> Select<Fl, Cols, F, W, G, H, O, L, Off>
where
    Self: Serialize,
    Cols: SelectList,
{
    /// Run the select and return its rows.
    pub fn run<D: Connector>(&self, db: &mut D) -> Result<ResultSet<D::Cursor, Cols::Row>> {
        let sql = render(self, db);
        trace_sql!("select", sql);
        let cursor = db.select(&sql)?;
        Ok(ResultSet::new(cursor, self.columns.new_row(db.result_policy())))
    }

    /// Prepare the select; parameters are set on the returned handle.
    pub fn prepare<D: Connector>(&self, db: &mut D) -> Result<PreparedSelect<D, Cols>> {
        let (sql, params) = render_prepared(self, db);
        trace_sql!("select", sql);
        let handle = db.prepare_select(&sql)?;
        Ok(PreparedSelect::new(handle, params, self.columns.clone(), sql))
    }
}

//! Statement clauses.
//!
//! Statements hold one slot per clause. An unset slot holds [`NoClause`], which writes
//! nothing; the marker traits below say which clause types may fill a slot and are what
//! the statement builders dispatch on.

mod assignment;
mod filter;
mod flags;
mod from;
mod group_by;
mod limit;
mod order_by;
mod select_list;

pub use assignment::{
    Assignment, AssignmentItem, AssignmentList, ColumnExt, DefaultValue, DefaultValues,
    DynamicSet, InsertSet, IntoAssignments, IntoDynamicAssignments, Set,
};
pub use filter::{Conjuncts, DynamicWhere, IntoConjuncts, Unconditional, Where};
pub use flags::{All, Distinct, Flags, SelectFlag};
pub use from::{DynamicFrom, FromList, IntoDynamicTables, IntoTables, TableList};
pub use group_by::{GroupBy, GroupList, Having, IntoGroupList};
pub use limit::{Limit, Offset};
pub use order_by::{IntoOrderList, OrderBy, OrderItem, OrderList};
pub use select_list::{IntoSelectList, SelectItem, SelectList};

use crate::context::Context;
use crate::serialize::Serialize;

/// An empty clause slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoClause;

impl Serialize for NoClause {
    fn serialize<C: Context + ?Sized>(&self, _ctx: &mut C) {}
}

/// A `FROM` clause; `Tables` is the static scope columns are checked against.
pub trait FromClause: Serialize + Clone {
    type Tables;
}

/// A `WHERE` clause, or the explicit absence of one.
pub trait WhereClause: Serialize + Clone {}

/// A `GROUP BY` clause.
pub trait GroupByClause: Serialize + Clone {}

/// A `LIMIT` clause.
pub trait LimitClause: Serialize + Clone {}

/// The `SET` part of an update.
pub trait SetClause: Serialize + Clone {
    /// No assignment at all; only a dynamic `SET` can be empty.
    fn is_empty(&self) -> bool {
        false
    }
}

/// The values of an insert.
pub trait InsertValues: Serialize + Clone {}

#[cfg(test)]
mod tests;

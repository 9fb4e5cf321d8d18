use std::sync::Arc;

use super::FromClause;
use crate::context::Context;
use crate::macros::for_each_tuple;
use crate::serialize::{DynSerialize, Serialize, SerializeList};
use crate::table::FromItem;

/// A tuple of [`FromItem`]s, possibly empty.
pub trait TableList: SerializeList + Clone + Send + Sync + 'static {}

impl TableList for () {}

/// One table (or join) or a non-empty tuple of them.
pub trait IntoTables {
    type Tables: TableList;

    fn into_tables(self) -> Self::Tables;
}

impl<T: FromItem> IntoTables for T {
    type Tables = (T,);

    fn into_tables(self) -> (T,) {
        (self,)
    }
}

/// Like [`IntoTables`], but `()` is allowed.
pub trait IntoDynamicTables {
    type Tables: TableList;

    fn into_dynamic_tables(self) -> Self::Tables;
}

impl<T: IntoTables> IntoDynamicTables for T {
    type Tables = T::Tables;

    fn into_dynamic_tables(self) -> T::Tables {
        self.into_tables()
    }
}

impl IntoDynamicTables for () {
    type Tables = ();

    fn into_dynamic_tables(self) {}
}

macro_rules! impl_table_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: FromItem),+> TableList for ($($T,)+) {}

        impl<$($T: FromItem),+> IntoTables for ($($T,)+) {
            type Tables = Self;

            fn into_tables(self) -> Self {
                self
            }
        }
    };
}

for_each_tuple!(impl_table_list);

/// `FROM a,b`
#[derive(Debug, Clone)]
pub struct FromList<T> {
    tables: T,
}

impl<T> FromList<T> {
    pub(crate) fn new(tables: T) -> Self {
        Self { tables }
    }
}

impl<T: TableList> Serialize for FromList<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" FROM ");
        self.tables.serialize_list(ctx, ",");
    }
}

impl<T: TableList> FromClause for FromList<T> {
    type Tables = T;
}

/// `FROM` with static tables `T` plus tables added at run time.
///
/// Without any table the clause writes nothing.
#[derive(Clone)]
pub struct DynamicFrom<T> {
    tables: T,
    dynamic: Vec<Arc<dyn DynSerialize>>,
}

impl<T> DynamicFrom<T> {
    pub(crate) fn new(tables: T) -> Self {
        Self {
            tables,
            dynamic: Vec::new(),
        }
    }

    pub(crate) fn add<F: FromItem>(&mut self, table: F) {
        self.dynamic.push(Arc::new(table));
    }

    /// Number of tables added at run time.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicFrom<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicFrom")
            .field("tables", &self.tables)
            .field("dynamic", &self.dynamic.len())
            .finish()
    }
}

impl<T: TableList> Serialize for DynamicFrom<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        if T::LEN == 0 && self.dynamic.is_empty() {
            return;
        }
        let mut ctx = ctx;
        ctx.write_str(" FROM ");
        self.tables.serialize_list(ctx, ",");
        for (i, table) in self.dynamic.iter().enumerate() {
            if T::LEN > 0 || i > 0 {
                ctx.write_str(",");
            }
            table.serialize_dyn(&mut ctx);
        }
    }
}

impl<T: TableList> FromClause for DynamicFrom<T> {
    type Tables = T;
}

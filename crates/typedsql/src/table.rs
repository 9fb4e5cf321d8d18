//! Tables, columns and joins.
//!
//! Tables and columns are zero-sized types, normally generated by `#[derive(Table)]`.
//! A column's type carries its table, kind and nullability, which is what all static
//! checks in the crate hang off.

use std::fmt;
use std::marker::PhantomData;

use crate::clause::SelectList;
use crate::context::Context;
use crate::error::Result;
use crate::expr::Expression;
use crate::ident::Ident;
use crate::kind::Boolean;
use crate::scope::InScope;
use crate::serialize::Serialize;

/// A table known at compile time.
pub trait Table: Serialize + Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Tuple of every column, in declaration order.
    type AllColumns: SelectList + Copy;

    fn all_columns(&self) -> Self::AllColumns;
}

/// A column of [`Column::Table`].
pub trait Column: Expression + Copy + Default {
    type Table: Table;
    const NAME: &'static str;
}

/// Write a table reference.
pub fn serialize_table<T: Table, C: Context + ?Sized>(ctx: &mut C) {
    ctx.write_identifier(T::NAME);
}

/// Write a qualified column reference, `table.column`.
pub fn serialize_column<Col: Column, C: Context + ?Sized>(ctx: &mut C) {
    ctx.write_identifier(<Col::Table as Table>::NAME);
    ctx.write_str(".");
    ctx.write_identifier(Col::NAME);
}

/// Every column of `table`, for `select(all_of(t))`.
pub fn all_of<T: Table>(table: T) -> T::AllColumns {
    table.all_columns()
}

/// Anything that can appear in a `FROM` list.
pub trait FromItem: Serialize + Clone + Send + Sync + 'static {}

impl<T: Table> FromItem for T {}

/// `JOIN` flavors.
pub trait JoinKind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const KEYWORD: &'static str;
}

macro_rules! join_kinds {
    ($($name:ident => $keyword:literal),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl JoinKind for $name {
                const KEYWORD: &'static str = $keyword;
            }
        )+
    };
}

join_kinds! {
    Inner => " INNER JOIN ",
    LeftOuter => " LEFT OUTER JOIN ",
    RightOuter => " RIGHT OUTER JOIN ",
    FullOuter => " FULL OUTER JOIN ",
}

/// A join still waiting for its `ON` condition. Not usable in `FROM` yet.
#[derive(Debug, Clone, Copy)]
pub struct PreJoin<L, R, K> {
    left: L,
    right: R,
    _kind: PhantomData<K>,
}

impl<L: FromItem, R: FromItem, K: JoinKind> PreJoin<L, R, K> {
    /// Complete the join. The condition may only reference the joined tables.
    pub fn on<P, I>(&self, condition: P) -> Join<L, R, K, P>
    where
        P: Expression<Kind = Boolean> + InScope<(L, R), I>,
    {
        Join {
            left: self.left.clone(),
            right: self.right.clone(),
            _kind: PhantomData,
            condition,
        }
    }
}

/// `left <kind> JOIN right ON condition`
#[derive(Debug, Clone, Copy)]
pub struct Join<L, R, K, On> {
    left: L,
    right: R,
    _kind: PhantomData<K>,
    condition: On,
}

impl<L: FromItem, R: FromItem, K: JoinKind, On: Expression> Serialize for Join<L, R, K, On> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.left.serialize(ctx);
        ctx.write_str(K::KEYWORD);
        self.right.serialize(ctx);
        ctx.write_str(" ON ");
        self.condition.serialize(ctx);
    }
}

impl<L: FromItem, R: FromItem, K: JoinKind, On: Expression> FromItem for Join<L, R, K, On> {}

/// Join constructors, available on tables and on completed joins.
pub trait JoinExt: FromItem + Sized {
    fn join<R: FromItem>(self, right: R) -> PreJoin<Self, R, Inner> {
        PreJoin {
            left: self,
            right,
            _kind: PhantomData,
        }
    }

    fn left_outer_join<R: FromItem>(self, right: R) -> PreJoin<Self, R, LeftOuter> {
        PreJoin {
            left: self,
            right,
            _kind: PhantomData,
        }
    }

    fn right_outer_join<R: FromItem>(self, right: R) -> PreJoin<Self, R, RightOuter> {
        PreJoin {
            left: self,
            right,
            _kind: PhantomData,
        }
    }

    fn outer_join<R: FromItem>(self, right: R) -> PreJoin<Self, R, FullOuter> {
        PreJoin {
            left: self,
            right,
            _kind: PhantomData,
        }
    }
}

impl<T: FromItem> JoinExt for T {}

/// A table whose name is only known at run time.
///
/// It provides no columns to the static scope check; predicates on it have to go
/// through the dynamic clause methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTable {
    name: Ident,
}

impl DynamicTable {
    /// Validate `name` and wrap it.
    pub fn parse(name: &str) -> Result<Self> {
        Ok(Self {
            name: Ident::parse(name)?,
        })
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }
}

impl Serialize for DynamicTable {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.name.serialize(ctx);
    }
}

impl FromItem for DynamicTable {}

//! Compile-time table scope checking.
//!
//! `E: InScope<S, I>` holds when every column referenced by `E` belongs to a table
//! provided by `S`, the static tables of a `FROM`, `UPDATE` or `DELETE`. The index `I` is
//! never written by hand: it is inferred, and encodes *where* in `S` each column's table
//! was found. A column of a table missing from `S` has no index, so the statement does
//! not compile.
//!
//! ```compile_fail
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! // tab_foo is not in FROM
//! let q = select(TabSample::default().alpha())
//!     .from(TabSample::default())
//!     .where_(TabFoo::default().omega().gt(1.0));
//! ```

use std::marker::PhantomData;

use crate::macros::for_each_tuple;
use crate::table::{Column, Join, PreJoin, Table};

/// All columns of `Self` are provided by `S`.
pub trait InScope<S, I> {}

/// `Self` provides the columns of table `T`.
pub trait Provides<T, I> {}

/// The table itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Left side of a join.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinLeft<I>(PhantomData<I>);

/// Right side of a join.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinRight<I>(PhantomData<I>);

impl<C: Column, S, I> InScope<S, I> for C where S: Provides<C::Table, I> {}

impl<T: Table> Provides<T, Here> for T {}

impl<T, I, L: Provides<T, I>, R, K, On> Provides<T, JoinLeft<I>> for Join<L, R, K, On> {}
impl<T, I, L, R: Provides<T, I>, K, On> Provides<T, JoinRight<I>> for Join<L, R, K, On> {}
impl<T, I, L: Provides<T, I>, R, K> Provides<T, JoinLeft<I>> for PreJoin<L, R, K> {}
impl<T, I, L, R: Provides<T, I>, K> Provides<T, JoinRight<I>> for PreJoin<L, R, K> {}

macro_rules! position_markers {
    ($($P:ident)+) => {
        $(
            /// Position of a table inside a tuple of tables.
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $P<I>(PhantomData<I>);
        )+
    };
}

position_markers!(At0 At1 At2 At3 At4 At5 At6 At7 At8 At9 At10 At11 At12 At13 At14 At15);

/// `Provides` for a tuple: one impl per position.
macro_rules! impl_provides {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl_provides!(@each [$($T)+] $(($T $P))+);
    };
    (@each $all:tt $(($T:ident $P:ident))+) => {
        $( impl_provides!(@one $all $T $P); )+
    };
    (@one [$($All:ident)+] $T:ident $P:ident) => {
        impl<Tab, Idx, $($All),+> Provides<Tab, $P<Idx>> for ($($All,)+)
        where
            $T: Provides<Tab, Idx>,
        {
        }
    };
}

/// `InScope` for a tuple: every element is in scope.
macro_rules! impl_in_scope {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<Scope, $($T: InScope<Scope, $I>, $I),+> InScope<Scope, ($($I,)+)> for ($($T,)+) {}
    };
}

for_each_tuple!(impl_provides);
for_each_tuple!(impl_in_scope);

impl<S> InScope<S, ()> for () {}

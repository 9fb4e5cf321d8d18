use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{InsertValues, SetClause};
use crate::context::Context;
use crate::expr::{Binary, Concat, Expression};
use crate::kind::{Admits, CanBeNull, NotNull, Nullability, Textual, ValueKind};
use crate::macros::for_each_tuple;
use crate::operand::{IntoOperand, Null, NullValue, TvinValue, tvin};
use crate::scope::InScope;
use crate::serialize::{DynSerialize, Serialize, SerializeList};
use crate::table::Column;

/// `column=value`
#[derive(Debug, Clone)]
pub struct Assignment<Col, R> {
    column: Col,
    value: R,
}

impl<Col: Column, R: Expression> Assignment<Col, R> {
    pub fn column(&self) -> Col {
        self.column
    }

    pub fn value(&self) -> &R {
        &self.value
    }

    /// Whether the value is written as `NULL`.
    ///
    /// That is the case for the NULL literal, for `tvin` values that are trivial, and
    /// for any trivial value assigned to a nullable column declared `trivial_is_null`.
    /// A `NOT NULL` column always gets the value itself.
    pub fn writes_null(&self) -> bool {
        self.value.is_null_literal()
            || (Col::TRIVIAL_VALUE_IS_NULL
                && <Col::Nullability as Nullability>::CAN_BE_NULL
                && self.value.is_trivial())
    }
}

impl<Col: Column, R: Expression> Serialize for Assignment<Col, R> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.serialize_column(ctx);
        ctx.write_str("=");
        self.serialize_value(ctx);
    }
}

impl<S, IC, IR, Col, R> InScope<S, (IC, IR)> for Assignment<Col, R>
where
    Col: InScope<S, IC>,
    R: InScope<S, IR>,
{
}

/// One assignment, seen from the statements that list them.
pub trait AssignmentItem: Serialize + Clone + Send + Sync + 'static {
    /// The (unqualified) column name.
    fn serialize_column<C: Context + ?Sized>(&self, ctx: &mut C);

    /// The value, or `NULL`.
    fn serialize_value<C: Context + ?Sized>(&self, ctx: &mut C);
}

impl<Col: Column, R: Expression> AssignmentItem for Assignment<Col, R> {
    fn serialize_column<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_identifier(Col::NAME);
    }

    fn serialize_value<C: Context + ?Sized>(&self, ctx: &mut C) {
        if self.writes_null() {
            ctx.write_str("NULL");
        } else {
            self.value.serialize(ctx);
        }
    }
}

/// The `DEFAULT` keyword as an assignment value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValue<K> {
    _kind: PhantomData<K>,
}

impl<K: ValueKind> Serialize for DefaultValue<K> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("DEFAULT");
    }
}

impl<K: ValueKind> Expression for DefaultValue<K> {
    type Kind = K;
    type Nullability = NotNull;
}

impl<S, K> InScope<S, ()> for DefaultValue<K> {}

/// Assignment constructors for columns.
pub trait ColumnExt: Column {
    /// `column=value`. NULL-able values are rejected for `NOT NULL` columns.
    fn set<V>(self, value: V) -> Assignment<Self, V::Operand>
    where
        V: IntoOperand<Self::Kind>,
        Self::Nullability: Admits<<V::Operand as Expression>::Nullability>,
    {
        Assignment {
            column: self,
            value: value.into_operand(),
        }
    }

    /// `column=NULL`
    fn set_null(self) -> Assignment<Self, NullValue<Self::Kind>>
    where
        Self: Expression<Nullability = CanBeNull>,
    {
        self.set(Null)
    }

    /// `column=value`, or `column=NULL` when `value` is trivial.
    fn set_tvin<V>(self, value: V) -> Assignment<Self, TvinValue<V::Operand>>
    where
        Self: Expression<Nullability = CanBeNull>,
        V: IntoOperand<Self::Kind>,
    {
        self.set(tvin(value))
    }

    /// `column=DEFAULT`
    fn set_default(self) -> Assignment<Self, DefaultValue<Self::Kind>> {
        Assignment {
            column: self,
            value: DefaultValue { _kind: PhantomData },
        }
    }

    /// `column=table.column||value`
    fn append<V>(self, value: V) -> Assignment<Self, Binary<Self, V::Operand, Concat>>
    where
        Self::Kind: Textual,
        V: IntoOperand<Self::Kind>,
        Self::Nullability: Admits<
            <Self::Nullability as Nullability>::Or<<V::Operand as Expression>::Nullability>,
        >,
    {
        Assignment {
            column: self,
            value: Binary::new(self, value.into_operand()),
        }
    }
}

impl<Col: Column> ColumnExt for Col {}

/// A tuple of assignments, possibly empty.
pub trait AssignmentList: SerializeList + Clone + Send + Sync + 'static {
    /// `a,b`
    fn serialize_columns<C: Context + ?Sized>(&self, ctx: &mut C);

    /// `1,'x'`
    fn serialize_values<C: Context + ?Sized>(&self, ctx: &mut C);
}

impl AssignmentList for () {
    fn serialize_columns<C: Context + ?Sized>(&self, _ctx: &mut C) {}

    fn serialize_values<C: Context + ?Sized>(&self, _ctx: &mut C) {}
}

/// One assignment or a non-empty tuple of them.
pub trait IntoAssignments {
    type List: AssignmentList;

    fn into_assignments(self) -> Self::List;
}

impl<Col: Column, R: Expression> IntoAssignments for Assignment<Col, R> {
    type List = (Self,);

    fn into_assignments(self) -> (Self,) {
        (self,)
    }
}

/// Like [`IntoAssignments`], but `()` is allowed.
pub trait IntoDynamicAssignments {
    type List: AssignmentList;

    fn into_dynamic_assignments(self) -> Self::List;
}

impl<T: IntoAssignments> IntoDynamicAssignments for T {
    type List = T::List;

    fn into_dynamic_assignments(self) -> T::List {
        self.into_assignments()
    }
}

impl IntoDynamicAssignments for () {
    type List = ();

    fn into_dynamic_assignments(self) {}
}

macro_rules! impl_assignment_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: AssignmentItem),+> AssignmentList for ($($T,)+) {
            fn serialize_columns<C: Context + ?Sized>(&self, ctx: &mut C) {
                $(
                    if $idx > 0 {
                        ctx.write_str(",");
                    }
                    self.$idx.serialize_column(ctx);
                )+
            }

            fn serialize_values<C: Context + ?Sized>(&self, ctx: &mut C) {
                $(
                    if $idx > 0 {
                        ctx.write_str(",");
                    }
                    self.$idx.serialize_value(ctx);
                )+
            }
        }

        impl<$($T: AssignmentItem),+> IntoAssignments for ($($T,)+) {
            type List = Self;

            fn into_assignments(self) -> Self {
                self
            }
        }
    };
}

for_each_tuple!(impl_assignment_list);

/// `SET a=1,b=2`
#[derive(Debug, Clone)]
pub struct Set<A> {
    assignments: A,
}

impl<A> Set<A> {
    pub(crate) fn new(assignments: A) -> Self {
        Self { assignments }
    }
}

impl<A: AssignmentList> Serialize for Set<A> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" SET ");
        self.assignments.serialize_list(ctx, ",");
    }
}

impl<A: AssignmentList> SetClause for Set<A> {}

/// `SET` with static assignments `A` plus assignments added at run time.
///
/// Without any assignment the clause writes nothing.
#[derive(Clone)]
pub struct DynamicSet<A> {
    assignments: A,
    dynamic: Vec<Arc<dyn DynSerialize>>,
}

impl<A> DynamicSet<A> {
    pub(crate) fn new(assignments: A) -> Self {
        Self {
            assignments,
            dynamic: Vec::new(),
        }
    }

    pub(crate) fn add<T: AssignmentItem>(&mut self, assignment: T) {
        self.dynamic.push(Arc::new(assignment));
    }

    /// Number of assignments added at run time.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }
}

impl<A: fmt::Debug> fmt::Debug for DynamicSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicSet")
            .field("assignments", &self.assignments)
            .field("dynamic", &self.dynamic.len())
            .finish()
    }
}

impl<A: AssignmentList> Serialize for DynamicSet<A> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        if A::LEN == 0 && self.dynamic.is_empty() {
            return;
        }
        let mut ctx = ctx;
        ctx.write_str(" SET ");
        self.assignments.serialize_list(ctx, ",");
        for (i, assignment) in self.dynamic.iter().enumerate() {
            if A::LEN > 0 || i > 0 {
                ctx.write_str(",");
            }
            assignment.serialize_dyn(&mut ctx);
        }
    }
}

impl<A: AssignmentList> SetClause for DynamicSet<A> {
    fn is_empty(&self) -> bool {
        A::LEN == 0 && self.dynamic.is_empty()
    }
}

/// ` (a,b) VALUES(1,2)`
#[derive(Debug, Clone)]
pub struct InsertSet<A> {
    assignments: A,
}

impl<A> InsertSet<A> {
    pub(crate) fn new(assignments: A) -> Self {
        Self { assignments }
    }
}

impl<A: AssignmentList> Serialize for InsertSet<A> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" (");
        self.assignments.serialize_columns(ctx);
        ctx.write_str(") VALUES(");
        self.assignments.serialize_values(ctx);
        ctx.write_str(")");
    }
}

impl<A: AssignmentList> InsertValues for InsertSet<A> {}

/// ` DEFAULT VALUES`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValues;

impl Serialize for DefaultValues {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" DEFAULT VALUES");
    }
}

impl InsertValues for DefaultValues {}

//! Typed expression trees.
//!
//! Every node is a plain value whose type records its [`ValueKind`] and [`Nullability`].
//! Operators are methods on [`ExpressionExt`] and only exist for the kinds they make
//! sense for:
//!
//! ```
//! use typedsql::prelude::*;
//! # use typedsql::__doc_schema::*;
//!
//! let t = TabSample::default();
//! let cond = t.alpha().gt(5).and(t.beta().like("%cake"));
//! assert_eq!(to_sql(&cond), "tab_sample.alpha>5 AND tab_sample.beta LIKE '%cake'");
//! ```

mod binary;
mod function;
mod unary;


pub use binary::{
    And, Binary, BinaryOperator, Concat, Divide, Equal, Greater, GreaterEqual, Less, LessEqual,
    Like, Minus, Modulo, Multiply, NotEqual, Or, Plus,
};
pub use function::{
    Aggregate, AggregateFunction, Avg, Count, CountStar, Max, Min, Sum, avg, count, count_all,
    max, min, sum,
};
pub use unary::{Alias, InList, IsNull, Negate, Not, Sort, SortOrder};

use crate::kind::{Boolean, Integral, Nullability, Numeric, Textual, ValueKind};
use crate::operand::IntoOperand;
use crate::serialize::{Serialize, precedence};

/// A typed SQL expression.
pub trait Expression: Serialize + Clone + Send + Sync + 'static {
    type Kind: ValueKind;
    type Nullability: Nullability;

    /// Binding strength of the outermost operator, see [`precedence`].
    const PRECEDENCE: u8 = precedence::ATOM;

    /// Assigning a trivial value to this expression stores NULL instead.
    ///
    /// Only meaningful for columns.
    const TRIVIAL_VALUE_IS_NULL: bool = false;

    /// The expression is a literal holding its kind's trivial value.
    fn is_trivial(&self) -> bool {
        false
    }

    /// The expression is the NULL literal, or a value standing in for it.
    fn is_null_literal(&self) -> bool {
        false
    }
}

/// Result of applying operator `O` to `L` and an operand convertible from `R`.
pub type BinaryOf<L, R, O> = Binary<L, <R as IntoOperand<<L as Expression>::Kind>>::Operand, O>;

/// Operators available on every expression.
pub trait ExpressionExt: Expression + Sized {
    fn eq<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Equal> {
        Binary::new(self, rhs.into_operand())
    }

    fn ne<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, NotEqual> {
        Binary::new(self, rhs.into_operand())
    }

    fn lt<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Less> {
        Binary::new(self, rhs.into_operand())
    }

    fn le<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, LessEqual> {
        Binary::new(self, rhs.into_operand())
    }

    fn gt<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Greater> {
        Binary::new(self, rhs.into_operand())
    }

    fn ge<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, GreaterEqual> {
        Binary::new(self, rhs.into_operand())
    }

    fn is_null(self) -> IsNull<Self> {
        IsNull::new(self, false)
    }

    fn is_not_null(self) -> IsNull<Self> {
        IsNull::new(self, true)
    }

    /// `self IN(...)`. An empty list is always false.
    fn in_<I, R>(self, values: I) -> InList<Self, R::Operand>
    where
        I: IntoIterator<Item = R>,
        R: IntoOperand<Self::Kind>,
    {
        InList::new(self, values.into_iter().map(IntoOperand::into_operand), false)
    }

    /// `self NOT IN(...)`. An empty list is always true.
    fn not_in<I, R>(self, values: I) -> InList<Self, R::Operand>
    where
        I: IntoIterator<Item = R>,
        R: IntoOperand<Self::Kind>,
    {
        InList::new(self, values.into_iter().map(IntoOperand::into_operand), true)
    }

    /// Name the expression in a select list.
    fn as_(self, alias: &'static str) -> Alias<Self> {
        Alias::new(self, alias)
    }

    fn asc(self) -> Sort<Self> {
        Sort::new(self, SortOrder::Asc)
    }

    fn desc(self) -> Sort<Self> {
        Sort::new(self, SortOrder::Desc)
    }

    fn and<R: IntoOperand<Boolean>>(self, rhs: R) -> Binary<Self, R::Operand, And>
    where
        Self: Expression<Kind = Boolean>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn or<R: IntoOperand<Boolean>>(self, rhs: R) -> Binary<Self, R::Operand, Or>
    where
        Self: Expression<Kind = Boolean>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn not(self) -> Not<Self>
    where
        Self: Expression<Kind = Boolean>,
    {
        Not::new(self)
    }

    fn plus<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Plus>
    where
        Self::Kind: Numeric,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn minus<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Minus>
    where
        Self::Kind: Numeric,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn times<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Multiply>
    where
        Self::Kind: Numeric,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn divided_by<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Divide>
    where
        Self::Kind: Numeric,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn modulo<R: IntoOperand<Integral>>(self, rhs: R) -> Binary<Self, R::Operand, Modulo>
    where
        Self: Expression<Kind = Integral>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn negate(self) -> Negate<Self>
    where
        Self::Kind: Numeric,
    {
        Negate::new(self)
    }

    fn concat<R: IntoOperand<Self::Kind>>(self, rhs: R) -> BinaryOf<Self, R, Concat>
    where
        Self::Kind: Textual,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn like<R: IntoOperand<Self::Kind>>(self, pattern: R) -> BinaryOf<Self, R, Like>
    where
        Self::Kind: Textual,
    {
        Binary::new(self, pattern.into_operand())
    }
}

impl<E: Expression> ExpressionExt for E {}

use std::fmt;
use std::marker::PhantomData;

use super::Expression;
use crate::context::Context;
use crate::kind::{CanBeNull, FloatingPoint, Integral, NotNull, Nullability, Numeric, ValueKind};
use crate::scope::InScope;
use crate::serialize::Serialize;

/// An aggregate function applied to one expression.
pub trait AggregateFunction: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Result kind for an argument of kind `K`.
    type Kind<K: ValueKind>: ValueKind;
    /// Result nullability for an argument of nullability `N`.
    type Nullability<N: Nullability>: Nullability;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Count;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Avg;

impl AggregateFunction for Count {
    const NAME: &'static str = "COUNT";
    type Kind<K: ValueKind> = Integral;
    type Nullability<N: Nullability> = NotNull;
}

// MAX, MIN, SUM and AVG are NULL over an empty set.
impl AggregateFunction for Max {
    const NAME: &'static str = "MAX";
    type Kind<K: ValueKind> = K;
    type Nullability<N: Nullability> = CanBeNull;
}

impl AggregateFunction for Min {
    const NAME: &'static str = "MIN";
    type Kind<K: ValueKind> = K;
    type Nullability<N: Nullability> = CanBeNull;
}

impl AggregateFunction for Sum {
    const NAME: &'static str = "SUM";
    type Kind<K: ValueKind> = K;
    type Nullability<N: Nullability> = CanBeNull;
}

impl AggregateFunction for Avg {
    const NAME: &'static str = "AVG";
    type Kind<K: ValueKind> = FloatingPoint;
    type Nullability<N: Nullability> = CanBeNull;
}

/// `NAME(expr)`
pub struct Aggregate<E, F> {
    expr: E,
    _function: PhantomData<F>,
}

impl<E, F> Aggregate<E, F> {
    fn new(expr: E) -> Self {
        Self {
            expr,
            _function: PhantomData,
        }
    }
}

impl<E: Clone, F> Clone for Aggregate<E, F> {
    fn clone(&self) -> Self {
        Self::new(self.expr.clone())
    }
}

impl<E: fmt::Debug, F: AggregateFunction> fmt::Debug for Aggregate<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregate")
            .field("function", &F::NAME)
            .field("expr", &self.expr)
            .finish()
    }
}

impl<E: Expression, F: AggregateFunction> Serialize for Aggregate<E, F> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(F::NAME);
        ctx.write_str("(");
        self.expr.serialize(ctx);
        ctx.write_str(")");
    }
}

impl<E: Expression, F: AggregateFunction> Expression for Aggregate<E, F> {
    type Kind = F::Kind<E::Kind>;
    type Nullability = F::Nullability<E::Nullability>;
}

impl<S, I, E: InScope<S, I>, F> InScope<S, I> for Aggregate<E, F> {}

/// `COUNT(*)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CountStar;

impl Serialize for CountStar {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("COUNT(*)");
    }
}

impl Expression for CountStar {
    type Kind = Integral;
    type Nullability = NotNull;
}

impl<S> InScope<S, ()> for CountStar {}

pub fn count<E: Expression>(expr: E) -> Aggregate<E, Count> {
    Aggregate::new(expr)
}

/// `COUNT(*)`
pub fn count_all() -> CountStar {
    CountStar
}

pub fn max<E: Expression>(expr: E) -> Aggregate<E, Max> {
    Aggregate::new(expr)
}

pub fn min<E: Expression>(expr: E) -> Aggregate<E, Min> {
    Aggregate::new(expr)
}

pub fn sum<E: Expression>(expr: E) -> Aggregate<E, Sum>
where
    E::Kind: Numeric,
{
    Aggregate::new(expr)
}

pub fn avg<E: Expression>(expr: E) -> Aggregate<E, Avg>
where
    E::Kind: Numeric,
{
    Aggregate::new(expr)
}

//! Turning statement trees into SQL text.

use crate::context::{Context, StringContext};
use crate::expr::Expression;
use crate::macros::{count, for_each_tuple};

/// Operator binding strength, lowest first.
///
/// A node wraps a child in parentheses when the child binds less tightly than the node
/// itself, so the emitted text always parses back to the tree that produced it.
pub mod precedence {
    pub const OR: u8 = 1;
    pub const AND: u8 = 2;
    pub const NOT: u8 = 3;
    pub const COMPARISON: u8 = 4;
    pub const CONCAT: u8 = 5;
    pub const ADDITIVE: u8 = 6;
    pub const MULTIPLICATIVE: u8 = 7;
    pub const UNARY: u8 = 8;
    pub const ATOM: u8 = 10;
}

/// A node that can write itself into a [`Context`].
pub trait Serialize {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C);
}

/// Serialize `node` into `ctx` and hand the context back for chaining.
pub fn serialize<'c, T, C>(node: &T, ctx: &'c mut C) -> &'c mut C
where
    T: Serialize + ?Sized,
    C: Context + ?Sized,
{
    node.serialize(ctx);
    ctx
}

/// Serialize `node` with a default [`StringContext`].
pub fn to_sql<T: Serialize + ?Sized>(node: &T) -> String {
    to_sql_with(node, StringContext::new())
}

/// Serialize `node` into `ctx` and return the finished SQL.
pub fn to_sql_with<T: Serialize + ?Sized, C: Context>(node: &T, mut ctx: C) -> String {
    node.serialize(&mut ctx);
    ctx.into_sql()
}

impl<T: Serialize + ?Sized> Serialize for &T {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        (**self).serialize(ctx);
    }
}

/// Object-safe serialization, for clause elements only known at run time.
pub trait DynSerialize: Send + Sync {
    fn serialize_dyn(&self, ctx: &mut dyn Context);
}

impl<T: Serialize + Send + Sync> DynSerialize for T {
    fn serialize_dyn(&self, ctx: &mut dyn Context) {
        self.serialize(ctx);
    }
}

/// Object-safe expression serialization that keeps the operator precedence around.
pub trait DynExpression: DynSerialize {
    fn precedence(&self) -> u8;
}

impl<E: Expression> DynExpression for E {
    fn precedence(&self) -> u8 {
        E::PRECEDENCE
    }
}

/// Write `expr`, parenthesized when `wrap` is set.
pub(crate) fn write_wrapped<T, C>(expr: &T, wrap: bool, ctx: &mut C)
where
    T: Serialize + ?Sized,
    C: Context + ?Sized,
{
    if wrap {
        ctx.write_str("(");
        expr.serialize(ctx);
        ctx.write_str(")");
    } else {
        expr.serialize(ctx);
    }
}

/// Write the left operand of an operator with precedence `parent`.
///
/// Comparisons do not chain in SQL, so a comparison on the left of another comparison
/// is wrapped as well.
pub(crate) fn write_left<E: Expression, C: Context + ?Sized>(expr: &E, parent: u8, ctx: &mut C) {
    let wrap = E::PRECEDENCE < parent
        || (E::PRECEDENCE == parent && parent == precedence::COMPARISON);
    write_wrapped(expr, wrap, ctx);
}

/// Write the right operand of an operator with precedence `parent`.
pub(crate) fn write_right<E: Expression, C: Context + ?Sized>(expr: &E, parent: u8, ctx: &mut C) {
    write_wrapped(expr, E::PRECEDENCE <= parent, ctx);
}

/// Write a dynamic predicate as one conjunct of an `AND` chain.
pub(crate) fn write_conjunct<C: Context + ?Sized>(expr: &dyn DynExpression, ctx: &mut C) {
    let mut ctx = ctx;
    if expr.precedence() < precedence::AND {
        ctx.write_str("(");
        expr.serialize_dyn(&mut ctx);
        ctx.write_str(")");
    } else {
        expr.serialize_dyn(&mut ctx);
    }
}

/// A tuple of nodes written one after another with a separator.
pub trait SerializeList {
    /// Number of elements.
    const LEN: usize;

    fn serialize_list<C: Context + ?Sized>(&self, ctx: &mut C, separator: &str);
}

impl SerializeList for () {
    const LEN: usize = 0;

    fn serialize_list<C: Context + ?Sized>(&self, _ctx: &mut C, _separator: &str) {}
}

macro_rules! impl_serialize_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: Serialize),+> SerializeList for ($($T,)+) {
            const LEN: usize = count!($($T)+);

            fn serialize_list<C: Context + ?Sized>(&self, ctx: &mut C, separator: &str) {
                $(
                    if $idx > 0 {
                        ctx.write_str(separator);
                    }
                    self.$idx.serialize(ctx);
                )+
            }
        }
    };
}

for_each_tuple!(impl_serialize_list);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_schema::tab_sample;

    #[test]
    fn lists_are_separated() {
        let list = (tab_sample::Alpha, tab_sample::Beta, tab_sample::Gamma);
        let mut ctx = StringContext::new();
        list.serialize_list(&mut ctx, ",");
        assert_eq!(ctx.as_str(), "tab_sample.alpha,tab_sample.beta,tab_sample.gamma");
        assert_eq!(<(tab_sample::Alpha, tab_sample::Beta) as SerializeList>::LEN, 2);
    }

    #[test]
    fn serialize_returns_the_context() {
        let mut ctx = StringContext::new();
        serialize(&tab_sample::Alpha, &mut ctx).write_str(" IS NULL");
        assert_eq!(ctx.as_str(), "tab_sample.alpha IS NULL");
    }
}

use super::Expression;
use crate::context::Context;
use crate::kind::{Boolean, NotNull, Nullability};
use crate::scope::InScope;
use crate::serialize::{Serialize, precedence, write_left, write_wrapped};

/// `NOT expr`
#[derive(Debug, Clone)]
pub struct Not<E> {
    expr: E,
}

impl<E> Not<E> {
    pub(crate) fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: Expression> Serialize for Not<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("NOT ");
        write_wrapped(&self.expr, E::PRECEDENCE < precedence::ATOM, ctx);
    }
}

impl<E: Expression<Kind = Boolean>> Expression for Not<E> {
    type Kind = Boolean;
    type Nullability = E::Nullability;
    const PRECEDENCE: u8 = precedence::NOT;
}

impl<S, I, E: InScope<S, I>> InScope<S, I> for Not<E> {}

/// `expr IS NULL` / `expr IS NOT NULL`
#[derive(Debug, Clone)]
pub struct IsNull<E> {
    expr: E,
    negated: bool,
}

impl<E> IsNull<E> {
    pub(crate) fn new(expr: E, negated: bool) -> Self {
        Self { expr, negated }
    }
}

impl<E: Expression> Serialize for IsNull<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        write_left(&self.expr, precedence::COMPARISON, ctx);
        ctx.write_str(if self.negated {
            " IS NOT NULL"
        } else {
            " IS NULL"
        });
    }
}

impl<E: Expression> Expression for IsNull<E> {
    type Kind = Boolean;
    type Nullability = NotNull;
    const PRECEDENCE: u8 = precedence::COMPARISON;
}

impl<S, I, E: InScope<S, I>> InScope<S, I> for IsNull<E> {}

/// `-(expr)`
#[derive(Debug, Clone)]
pub struct Negate<E> {
    expr: E,
}

impl<E> Negate<E> {
    pub(crate) fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: Expression> Serialize for Negate<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        // Always parenthesized: `--` would start a comment.
        ctx.write_str("-");
        write_wrapped(&self.expr, true, ctx);
    }
}

impl<E: Expression> Expression for Negate<E> {
    type Kind = E::Kind;
    type Nullability = E::Nullability;
    const PRECEDENCE: u8 = precedence::UNARY;
}

impl<S, I, E: InScope<S, I>> InScope<S, I> for Negate<E> {}

/// `expr IN(...)` / `expr NOT IN(...)`
#[derive(Debug, Clone)]
pub struct InList<E, V> {
    expr: E,
    values: Vec<V>,
    negated: bool,
}

impl<E, V> InList<E, V> {
    pub(crate) fn new(expr: E, values: impl Iterator<Item = V>, negated: bool) -> Self {
        Self {
            expr,
            values: values.collect(),
            negated,
        }
    }
}

impl<E: Expression, V: Expression> Serialize for InList<E, V> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        if self.values.is_empty() {
            ctx.write_str(if self.negated { "1=1" } else { "1=0" });
            return;
        }
        write_left(&self.expr, precedence::COMPARISON, ctx);
        ctx.write_str(if self.negated { " NOT IN(" } else { " IN(" });
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                ctx.write_str(",");
            }
            value.serialize(ctx);
        }
        ctx.write_str(")");
    }
}

impl<E: Expression, V: Expression> Expression for InList<E, V> {
    type Kind = Boolean;
    type Nullability = <E::Nullability as Nullability>::Or<V::Nullability>;
    const PRECEDENCE: u8 = precedence::COMPARISON;
}

impl<S, IE, IV, E, V> InScope<S, (IE, IV)> for InList<E, V>
where
    E: InScope<S, IE>,
    V: InScope<S, IV>,
{
}

/// `expr AS name`, only valid in a select list.
#[derive(Debug, Clone)]
pub struct Alias<E> {
    expr: E,
    name: &'static str,
}

impl<E> Alias<E> {
    pub(crate) fn new(expr: E, name: &'static str) -> Self {
        Self { expr, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn expr(&self) -> &E {
        &self.expr
    }
}

impl<E: Expression> Serialize for Alias<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.expr.serialize(ctx);
        ctx.write_str(" AS ");
        ctx.write_identifier(self.name);
    }
}

impl<S, I, E: InScope<S, I>> InScope<S, I> for Alias<E> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// `expr ASC` / `expr DESC`, only valid in `ORDER BY`.
#[derive(Debug, Clone)]
pub struct Sort<E> {
    expr: E,
    order: SortOrder,
}

impl<E> Sort<E> {
    pub(crate) fn new(expr: E, order: SortOrder) -> Self {
        Self { expr, order }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl<E: Expression> Serialize for Sort<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.expr.serialize(ctx);
        ctx.write_str(match self.order {
            SortOrder::Asc => " ASC",
            SortOrder::Desc => " DESC",
        });
    }
}

impl<S, I, E: InScope<S, I>> InScope<S, I> for Sort<E> {}

//! Right-hand operands.
//!
//! Operators accept anything implementing [`IntoOperand`] for the left side's kind: another
//! expression, a native Rust literal, [`null()`] or a [`tvin`] wrapper.

use std::marker::PhantomData;

use crate::context::Context;
use crate::expr::Expression;
use crate::kind::{Boolean, CanBeNull, FloatingPoint, Integral, NotNull, Text, ValueKind};
use crate::scope::InScope;
use crate::serialize::Serialize;

/// Conversion into an expression of kind `K`.
pub trait IntoOperand<K: ValueKind> {
    type Operand: Expression<Kind = K>;

    fn into_operand(self) -> Self::Operand;
}

impl<E: Expression> IntoOperand<E::Kind> for E {
    type Operand = E;

    fn into_operand(self) -> E {
        self
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<K: ValueKind> {
    value: K::Native,
}

impl<K: ValueKind> Value<K> {
    pub fn new(value: impl Into<K::Native>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn get(&self) -> &K::Native {
        &self.value
    }
}

impl<K: ValueKind> Serialize for Value<K> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        K::write_literal(&self.value, ctx);
    }
}

impl<K: ValueKind> Expression for Value<K> {
    type Kind = K;
    type Nullability = NotNull;

    fn is_trivial(&self) -> bool {
        K::is_trivial(&self.value)
    }
}

impl<S, K: ValueKind> InScope<S, ()> for Value<K> {}

macro_rules! literal_operands {
    ($kind:ty: $($native:ty),+) => {
        $(
            impl IntoOperand<$kind> for $native {
                type Operand = Value<$kind>;

                fn into_operand(self) -> Value<$kind> {
                    Value::new(self)
                }
            }
        )+
    };
}

literal_operands!(Boolean: bool);
literal_operands!(Integral: i8, i16, i32, i64, u8, u16, u32);
literal_operands!(FloatingPoint: f32, f64, i8, i16, i32, u8, u16, u32);
literal_operands!(Text: String, &str, &String, char);

/// The NULL literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

/// The NULL literal, usable as an operand of any kind.
pub fn null() -> Null {
    Null
}

/// NULL typed as kind `K`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullValue<K> {
    _kind: PhantomData<K>,
}

impl<K: ValueKind> IntoOperand<K> for Null {
    type Operand = NullValue<K>;

    fn into_operand(self) -> NullValue<K> {
        NullValue { _kind: PhantomData }
    }
}

impl<K: ValueKind> Serialize for NullValue<K> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("NULL");
    }
}

impl<K: ValueKind> Expression for NullValue<K> {
    type Kind = K;
    type Nullability = CanBeNull;

    fn is_null_literal(&self) -> bool {
        true
    }
}

impl<S, K> InScope<S, ()> for NullValue<K> {}

/// Wrapper that turns a trivial value into NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tvin<V>(pub V);

/// Treat `value` as NULL when it is trivial (`0`, `""`, `false`).
///
/// `column.set(tvin(""))` writes `column=NULL`; `column.set(tvin("x"))` writes
/// `column='x'`. Only nullable columns accept it.
pub fn tvin<V>(value: V) -> Tvin<V> {
    Tvin(value)
}

/// Operand produced by [`tvin`].
#[derive(Debug, Clone, PartialEq)]
pub struct TvinValue<O> {
    operand: O,
}

impl<K: ValueKind, V: IntoOperand<K>> IntoOperand<K> for Tvin<V> {
    type Operand = TvinValue<V::Operand>;

    fn into_operand(self) -> Self::Operand {
        TvinValue {
            operand: self.0.into_operand(),
        }
    }
}

impl<O: Expression> Serialize for TvinValue<O> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        if self.operand.is_trivial() {
            ctx.write_str("NULL");
        } else {
            self.operand.serialize(ctx);
        }
    }
}

impl<O: Expression> Expression for TvinValue<O> {
    type Kind = O::Kind;
    type Nullability = CanBeNull;
    const PRECEDENCE: u8 = O::PRECEDENCE;

    fn is_trivial(&self) -> bool {
        self.operand.is_trivial()
    }

    fn is_null_literal(&self) -> bool {
        self.operand.is_null_literal() || self.operand.is_trivial()
    }
}

impl<S, I, O: InScope<S, I>> InScope<S, I> for TvinValue<O> {}

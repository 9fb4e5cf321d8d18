//! Value kinds and nullability markers.
//!
//! Every expression carries a [`ValueKind`] and a [`Nullability`] in its type. Operators
//! are only available when the kinds line up, so `text_column.like(5)` or
//! `int_column.and(...)` never compile.
//!
//! A kind also knows how to write its literals, what its *trivial* value is and how to
//! hand values to a connector's binders.

use std::fmt;

use crate::connector::{ParameterBinder, ResultBinder};
use crate::context::Context;

/// A compile-time category of scalar values.
pub trait ValueKind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Rust representation of a value of this kind.
    type Native: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Human-readable kind name.
    const NAME: &'static str;

    /// Append `value` as an SQL literal.
    fn write_literal<C: Context + ?Sized>(value: &Self::Native, ctx: &mut C);

    /// Whether `value` is this kind's trivial (default-like) value.
    fn is_trivial(value: &Self::Native) -> bool {
        *value == Self::Native::default()
    }

    /// Hand a parameter value to the connector.
    fn bind_parameter(
        binder: &mut dyn ParameterBinder,
        index: usize,
        value: &Self::Native,
        is_null: bool,
    );

    /// Let the connector fill a result value.
    fn bind_result(
        binder: &mut dyn ResultBinder,
        index: usize,
        value: &mut Self::Native,
        is_null: &mut bool,
    );
}

/// Kinds that support arithmetic.
pub trait Numeric: ValueKind {}

/// Kinds that support concatenation and pattern matching.
pub trait Textual: ValueKind {}

/// `BOOLEAN`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean;

/// Integer kinds (`TINYINT` through `BIGINT`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integral;

/// `REAL`, `DOUBLE`, `FLOAT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatingPoint;

/// `TEXT`, `VARCHAR`, `CHAR`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Text;

impl ValueKind for Boolean {
    type Native = bool;
    const NAME: &'static str = "boolean";

    fn write_literal<C: Context + ?Sized>(value: &bool, ctx: &mut C) {
        ctx.write_boolean(*value);
    }

    fn bind_parameter(binder: &mut dyn ParameterBinder, index: usize, value: &bool, is_null: bool) {
        binder.bind_boolean_parameter(index, *value, is_null);
    }

    fn bind_result(binder: &mut dyn ResultBinder, index: usize, value: &mut bool, is_null: &mut bool) {
        binder.bind_boolean_result(index, value, is_null);
    }
}

impl ValueKind for Integral {
    type Native = i64;
    const NAME: &'static str = "integral";

    fn write_literal<C: Context + ?Sized>(value: &i64, ctx: &mut C) {
        ctx.write_str(&value.to_string());
    }

    fn bind_parameter(binder: &mut dyn ParameterBinder, index: usize, value: &i64, is_null: bool) {
        binder.bind_integral_parameter(index, *value, is_null);
    }

    fn bind_result(binder: &mut dyn ResultBinder, index: usize, value: &mut i64, is_null: &mut bool) {
        binder.bind_integral_result(index, value, is_null);
    }
}

impl ValueKind for FloatingPoint {
    type Native = f64;
    const NAME: &'static str = "floating point";

    fn write_literal<C: Context + ?Sized>(value: &f64, ctx: &mut C) {
        ctx.write_floating_point(*value);
    }

    fn bind_parameter(binder: &mut dyn ParameterBinder, index: usize, value: &f64, is_null: bool) {
        binder.bind_floating_point_parameter(index, *value, is_null);
    }

    fn bind_result(binder: &mut dyn ResultBinder, index: usize, value: &mut f64, is_null: &mut bool) {
        binder.bind_floating_point_result(index, value, is_null);
    }
}

impl ValueKind for Text {
    type Native = String;
    const NAME: &'static str = "text";

    fn write_literal<C: Context + ?Sized>(value: &String, ctx: &mut C) {
        let escaped = ctx.escape(value);
        ctx.write_str("'");
        ctx.write_str(&escaped);
        ctx.write_str("'");
    }

    fn bind_parameter(binder: &mut dyn ParameterBinder, index: usize, value: &String, is_null: bool) {
        binder.bind_text_parameter(index, value, is_null);
    }

    fn bind_result(binder: &mut dyn ResultBinder, index: usize, value: &mut String, is_null: &mut bool) {
        binder.bind_text_result(index, value, is_null);
    }
}

impl Numeric for Integral {}
impl Numeric for FloatingPoint {}
impl Textual for Text {}

/// Whether an expression may evaluate to NULL.
pub trait Nullability: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const CAN_BE_NULL: bool;

    /// Nullability of an expression combining `Self` with `N`.
    type Or<N: Nullability>: Nullability;
}

/// The expression never yields NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotNull;

/// The expression may yield NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CanBeNull;

impl Nullability for NotNull {
    const CAN_BE_NULL: bool = false;
    type Or<N: Nullability> = N;
}

impl Nullability for CanBeNull {
    const CAN_BE_NULL: bool = true;
    type Or<N: Nullability> = CanBeNull;
}

/// `Self` (a column's nullability) accepts values of nullability `N`.
///
/// A `NOT NULL` column only accepts `NotNull` values; this is what rejects
/// `not_null_column.set(null())` at compile time.
pub trait Admits<N: Nullability>: Nullability {}

impl Admits<NotNull> for NotNull {}
impl<N: Nullability> Admits<N> for CanBeNull {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_values_are_kind_defaults() {
        assert!(Boolean::is_trivial(&false));
        assert!(!Boolean::is_trivial(&true));
        assert!(Integral::is_trivial(&0));
        assert!(!Integral::is_trivial(&-1));
        assert!(FloatingPoint::is_trivial(&0.0));
        assert!(Text::is_trivial(&String::new()));
        assert!(!Text::is_trivial(&"x".to_string()));
    }

    #[test]
    fn nullability_combines_towards_null() {
        fn can_be_null<N: Nullability>() -> bool {
            N::CAN_BE_NULL
        }
        assert!(!can_be_null::<<NotNull as Nullability>::Or<NotNull>>());
        assert!(can_be_null::<<NotNull as Nullability>::Or<CanBeNull>>());
        assert!(can_be_null::<<CanBeNull as Nullability>::Or<NotNull>>());
    }
}

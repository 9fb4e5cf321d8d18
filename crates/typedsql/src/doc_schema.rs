//! Two small tables used by doc examples and unit tests.
//!
//! Spelled out by hand (rather than with `#[derive(Table)]`) so the core crate can be
//! tested without the derive feature. The generated code has the same shape.

use crate::context::Context;
use crate::expr::Expression;
use crate::kind::{Boolean, CanBeNull, FloatingPoint, Integral, NotNull, Text};
use crate::serialize::Serialize;
use crate::table::{Column, Table, serialize_column, serialize_table};

macro_rules! fixture_table {
    (
        $table:ident, $module:ident, $name:literal,
        [$($column:ident $accessor:ident $col_name:literal: $kind:ty, $null:ty, $trivial:literal;)+]
    ) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $table;

        pub mod $module {
            $(
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $column;
            )+
        }

        impl Serialize for $table {
            fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
                serialize_table::<Self, C>(ctx);
            }
        }

        impl Table for $table {
            const NAME: &'static str = $name;
            type AllColumns = ($($module::$column,)+);

            fn all_columns(&self) -> Self::AllColumns {
                ($($module::$column,)+)
            }
        }

        impl $table {
            $(
                pub fn $accessor(&self) -> $module::$column {
                    $module::$column
                }
            )+
        }

        $(
            impl Serialize for $module::$column {
                fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
                    serialize_column::<Self, C>(ctx);
                }
            }

            impl Expression for $module::$column {
                type Kind = $kind;
                type Nullability = $null;
                const TRIVIAL_VALUE_IS_NULL: bool = $trivial;
            }

            impl Column for $module::$column {
                type Table = $table;
                const NAME: &'static str = $col_name;
            }
        )+
    };
}

fixture_table!(TabSample, tab_sample, "tab_sample", [
    Alpha alpha "alpha": Integral, NotNull, false;
    Beta beta "beta": Text, CanBeNull, true;
    Gamma gamma "gamma": Boolean, NotNull, false;
]);

fixture_table!(TabFoo, tab_foo, "tab_foo", [
    Delta delta "delta": Text, CanBeNull, false;
    Epsilon epsilon "epsilon": Integral, NotNull, false;
    Omega omega "omega": FloatingPoint, NotNull, false;
]);

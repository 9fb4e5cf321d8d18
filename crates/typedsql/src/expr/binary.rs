use std::fmt;
use std::marker::PhantomData;

use super::Expression;
use crate::context::Context;
use crate::kind::{Boolean, Nullability, Text, ValueKind};
use crate::scope::InScope;
use crate::serialize::{Serialize, precedence, write_left, write_right};

/// An infix operator.
pub trait BinaryOperator: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Operator text including any surrounding spaces.
    const TOKEN: &'static str;
    const PRECEDENCE: u8;

    /// Kind of the result, given the left operand's kind.
    type Output<K: ValueKind>: ValueKind;
}

macro_rules! operators {
    (@out Boolean $k:ident) => { Boolean };
    (@out Text $k:ident) => { Text };
    (@out Same $k:ident) => { $k };
    ($($(#[$meta:meta])* $name:ident => $token:literal, $prec:ident, $out:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl BinaryOperator for $name {
                const TOKEN: &'static str = $token;
                const PRECEDENCE: u8 = precedence::$prec;
                type Output<K: ValueKind> = operators!(@out $out K);
            }
        )+
    };
}

operators! {
    /// `=`
    Equal => "=", COMPARISON, Boolean;
    /// `<>`
    NotEqual => "<>", COMPARISON, Boolean;
    /// `<`
    Less => "<", COMPARISON, Boolean;
    /// `<=`
    LessEqual => "<=", COMPARISON, Boolean;
    /// `>`
    Greater => ">", COMPARISON, Boolean;
    /// `>=`
    GreaterEqual => ">=", COMPARISON, Boolean;
    /// `LIKE`
    Like => " LIKE ", COMPARISON, Boolean;
    /// `AND`
    And => " AND ", AND, Boolean;
    /// `OR`
    Or => " OR ", OR, Boolean;
    /// `||`
    Concat => "||", CONCAT, Text;
    Plus => " + ", ADDITIVE, Same;
    Minus => " - ", ADDITIVE, Same;
    Multiply => " * ", MULTIPLICATIVE, Same;
    Divide => " / ", MULTIPLICATIVE, Same;
    Modulo => " % ", MULTIPLICATIVE, Same;
}

/// `lhs <op> rhs`
pub struct Binary<L, R, O> {
    lhs: L,
    rhs: R,
    _op: PhantomData<O>,
}

impl<L, R, O> Binary<L, R, O> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            _op: PhantomData,
        }
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L: Clone, R: Clone, O> Clone for Binary<L, R, O> {
    fn clone(&self) -> Self {
        Self::new(self.lhs.clone(), self.rhs.clone())
    }
}

impl<L: fmt::Debug, R: fmt::Debug, O: BinaryOperator> fmt::Debug for Binary<L, R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary")
            .field("op", &O::default())
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .finish()
    }
}

impl<L: Expression, R: Expression, O: BinaryOperator> Serialize for Binary<L, R, O> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        write_left(&self.lhs, O::PRECEDENCE, ctx);
        ctx.write_str(O::TOKEN);
        write_right(&self.rhs, O::PRECEDENCE, ctx);
    }
}

impl<L: Expression, R: Expression, O: BinaryOperator> Expression for Binary<L, R, O> {
    type Kind = O::Output<L::Kind>;
    type Nullability = <L::Nullability as Nullability>::Or<R::Nullability>;
    const PRECEDENCE: u8 = O::PRECEDENCE;
}

impl<S, IL, IR, L, R, O> InScope<S, (IL, IR)> for Binary<L, R, O>
where
    L: InScope<S, IL>,
    R: InScope<S, IR>,
{
}

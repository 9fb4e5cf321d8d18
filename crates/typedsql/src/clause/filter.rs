use std::fmt;
use std::sync::Arc;

use super::WhereClause;
use crate::context::Context;
use crate::expr::Expression;
use crate::kind::Boolean;
use crate::serialize::{DynExpression, Serialize, write_conjunct};

/// `WHERE predicate`
#[derive(Debug, Clone)]
pub struct Where<P> {
    predicate: P,
}

impl<P> Where<P> {
    pub(crate) fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P: Expression> Serialize for Where<P> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" WHERE ");
        self.predicate.serialize(ctx);
    }
}

impl<P: Expression<Kind = Boolean>> WhereClause for Where<P> {}

/// Marks an update or delete that deliberately affects every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unconditional;

impl Serialize for Unconditional {
    fn serialize<C: Context + ?Sized>(&self, _ctx: &mut C) {}
}

impl WhereClause for Unconditional {}

/// The static part of a dynamic `WHERE`: nothing, or one predicate.
pub trait Conjuncts: Clone + Send + Sync + 'static {
    const LEN: usize;

    fn serialize_conjuncts<C: Context + ?Sized>(&self, ctx: &mut C);
}

impl Conjuncts for () {
    const LEN: usize = 0;

    fn serialize_conjuncts<C: Context + ?Sized>(&self, _ctx: &mut C) {}
}

impl<P: Expression<Kind = Boolean>> Conjuncts for (P,) {
    const LEN: usize = 1;

    fn serialize_conjuncts<C: Context + ?Sized>(&self, ctx: &mut C) {
        write_conjunct(&self.0, ctx);
    }
}

/// `()`, a predicate, or a 1-tuple holding one.
pub trait IntoConjuncts {
    type Conjuncts: Conjuncts;

    fn into_conjuncts(self) -> Self::Conjuncts;
}

impl IntoConjuncts for () {
    type Conjuncts = ();

    fn into_conjuncts(self) {}
}

impl<P: Expression<Kind = Boolean>> IntoConjuncts for P {
    type Conjuncts = (P,);

    fn into_conjuncts(self) -> (P,) {
        (self,)
    }
}

impl<P: Expression<Kind = Boolean>> IntoConjuncts for (P,) {
    type Conjuncts = (P,);

    fn into_conjuncts(self) -> (P,) {
        self
    }
}

/// `WHERE` whose conjuncts are partly added at run time, joined with `AND`.
///
/// Without any conjunct the clause writes nothing.
#[derive(Clone)]
pub struct DynamicWhere<P> {
    statics: P,
    dynamic: Vec<Arc<dyn DynExpression>>,
}

impl<P> DynamicWhere<P> {
    pub(crate) fn new(statics: P) -> Self {
        Self {
            statics,
            dynamic: Vec::new(),
        }
    }

    pub(crate) fn add<E: Expression<Kind = Boolean>>(&mut self, predicate: E) {
        self.dynamic.push(Arc::new(predicate));
    }

    /// Number of predicates added at run time.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }
}

impl<P: fmt::Debug> fmt::Debug for DynamicWhere<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicWhere")
            .field("statics", &self.statics)
            .field("dynamic", &self.dynamic.len())
            .finish()
    }
}

impl<P: Conjuncts> Serialize for DynamicWhere<P> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        if P::LEN == 0 && self.dynamic.is_empty() {
            return;
        }
        ctx.write_str(" WHERE ");
        self.statics.serialize_conjuncts(ctx);
        for (i, predicate) in self.dynamic.iter().enumerate() {
            if P::LEN > 0 || i > 0 {
                ctx.write_str(" AND ");
            }
            write_conjunct(predicate.as_ref(), ctx);
        }
    }
}

impl<P: Conjuncts> WhereClause for DynamicWhere<P> {}

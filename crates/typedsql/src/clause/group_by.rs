use super::GroupByClause;
use crate::context::Context;
use crate::expr::Expression;
use crate::macros::for_each_tuple;
use crate::serialize::{Serialize, SerializeList};

/// A non-empty tuple of grouping expressions.
pub trait GroupList: SerializeList + Clone + Send + Sync + 'static {}

/// One expression or a tuple of them.
pub trait IntoGroupList {
    type List: GroupList;

    fn into_group_list(self) -> Self::List;
}

impl<E: Expression> IntoGroupList for E {
    type List = (E,);

    fn into_group_list(self) -> (E,) {
        (self,)
    }
}

macro_rules! impl_group_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: Expression),+> GroupList for ($($T,)+) {}

        impl<$($T: Expression),+> IntoGroupList for ($($T,)+) {
            type List = Self;

            fn into_group_list(self) -> Self {
                self
            }
        }
    };
}

for_each_tuple!(impl_group_list);

/// `GROUP BY a,b`
#[derive(Debug, Clone)]
pub struct GroupBy<G> {
    expressions: G,
}

impl<G> GroupBy<G> {
    pub(crate) fn new(expressions: G) -> Self {
        Self { expressions }
    }
}

impl<G: GroupList> Serialize for GroupBy<G> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" GROUP BY ");
        self.expressions.serialize_list(ctx, ",");
    }
}

impl<G: GroupList> GroupByClause for GroupBy<G> {}

/// `HAVING predicate`
#[derive(Debug, Clone)]
pub struct Having<P> {
    predicate: P,
}

impl<P> Having<P> {
    pub(crate) fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P: Expression> Serialize for Having<P> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" HAVING ");
        self.predicate.serialize(ctx);
    }
}

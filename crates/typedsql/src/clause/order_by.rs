use crate::context::Context;
use crate::expr::{Expression, Sort};
use crate::macros::for_each_tuple;
use crate::serialize::{Serialize, SerializeList};

/// An `ORDER BY` entry: an expression, optionally with a direction.
pub trait OrderItem: Serialize + Clone + Send + Sync + 'static {}

impl<E: Expression> OrderItem for E {}
impl<E: Expression> OrderItem for Sort<E> {}

/// A non-empty tuple of [`OrderItem`]s.
pub trait OrderList: SerializeList + Clone + Send + Sync + 'static {}

/// One order item or a tuple of them.
pub trait IntoOrderList {
    type List: OrderList;

    fn into_order_list(self) -> Self::List;
}

impl<T: OrderItem> IntoOrderList for T {
    type List = (T,);

    fn into_order_list(self) -> (T,) {
        (self,)
    }
}

macro_rules! impl_order_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: OrderItem),+> OrderList for ($($T,)+) {}

        impl<$($T: OrderItem),+> IntoOrderList for ($($T,)+) {
            type List = Self;

            fn into_order_list(self) -> Self {
                self
            }
        }
    };
}

for_each_tuple!(impl_order_list);

/// `ORDER BY a ASC,b`
#[derive(Debug, Clone)]
pub struct OrderBy<O> {
    items: O,
}

impl<O> OrderBy<O> {
    pub(crate) fn new(items: O) -> Self {
        Self { items }
    }
}

impl<O: OrderList> Serialize for OrderBy<O> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" ORDER BY ");
        self.items.serialize_list(ctx, ",");
    }
}

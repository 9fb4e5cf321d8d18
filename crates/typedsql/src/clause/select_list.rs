use crate::connector::ResultPolicy;
use crate::expr::{Alias, Expression};
use crate::kind::{Nullability, ValueKind};
use crate::macros::for_each_tuple;
use crate::result::{Field, ResultRow};
use crate::serialize::{Serialize, SerializeList};

/// One entry of a select list: an expression, optionally aliased.
pub trait SelectItem: Serialize + Clone + Send + Sync + 'static {
    type Kind: ValueKind;
    type Nullability: Nullability;

    /// NULL results read back as the kind's trivial value.
    const TRIVIAL_VALUE_IS_NULL: bool;
}

impl<E: Expression> SelectItem for E {
    type Kind = E::Kind;
    type Nullability = E::Nullability;
    const TRIVIAL_VALUE_IS_NULL: bool = E::TRIVIAL_VALUE_IS_NULL;
}

impl<E: Expression> SelectItem for Alias<E> {
    type Kind = E::Kind;
    type Nullability = E::Nullability;
    const TRIVIAL_VALUE_IS_NULL: bool = E::TRIVIAL_VALUE_IS_NULL;
}

/// A non-empty tuple of [`SelectItem`]s; fixes the shape of the result row.
pub trait SelectList: SerializeList + Clone + Send + Sync + 'static {
    type Row: ResultRow;

    /// An empty (invalid) row for this list.
    fn new_row(&self, policy: ResultPolicy) -> Self::Row;
}

/// Single select items and tuples of them.
pub trait IntoSelectList {
    type List: SelectList;

    fn into_select_list(self) -> Self::List;
}

impl<T: SelectItem> IntoSelectList for T {
    type List = (T,);

    fn into_select_list(self) -> (T,) {
        (self,)
    }
}

macro_rules! impl_select_list {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: SelectItem),+> SelectList for ($($T,)+) {
            type Row = ($(Field<$T::Kind>,)+);

            fn new_row(&self, policy: ResultPolicy) -> Self::Row {
                ($(Field::new(policy, policy.null_is_trivial || $T::TRIVIAL_VALUE_IS_NULL),)+)
            }
        }

        impl<$($T: SelectItem),+> IntoSelectList for ($($T,)+) {
            type List = Self;

            fn into_select_list(self) -> Self {
                self
            }
        }
    };
}

for_each_tuple!(impl_select_list);

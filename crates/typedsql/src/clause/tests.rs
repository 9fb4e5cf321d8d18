use super::*;
use crate::connector::ResultPolicy;
use crate::context::StringContext;
use crate::expr::{ExpressionExt, count, count_all};
use crate::operand::tvin;
use crate::result::ResultRow;
use crate::serialize::{SerializeList, to_sql};
use crate::table::{DynamicTable, JoinExt};
use crate::test_schema::{TabFoo, TabSample};

#[test]
fn from_lists_and_joins() {
    let t = TabSample::default();
    let f = TabFoo::default();
    assert_eq!(to_sql(&FromList::new((t, f))), " FROM tab_sample,tab_foo");

    let join = t.join(f).on(t.alpha().eq(f.epsilon()));
    assert_eq!(
        to_sql(&FromList::new((join,))),
        " FROM tab_sample INNER JOIN tab_foo ON tab_sample.alpha=tab_foo.epsilon"
    );

    let join = t.left_outer_join(f).on(t.beta().eq(f.delta()));
    assert_eq!(
        to_sql(&join),
        "tab_sample LEFT OUTER JOIN tab_foo ON tab_sample.beta=tab_foo.delta"
    );
}

#[test]
fn dynamic_from_writes_nothing_until_filled() {
    let mut from = DynamicFrom::new(());
    assert_eq!(to_sql(&from), "");
    from.add(TabFoo::default());
    from.add(DynamicTable::parse("audit.log").unwrap());
    assert_eq!(from.dynamic_len(), 2);
    assert_eq!(to_sql(&from), " FROM tab_foo,audit.log");

    let mut from = DynamicFrom::new((TabSample::default(),));
    from.add(TabFoo::default());
    assert_eq!(to_sql(&from), " FROM tab_sample,tab_foo");
}

#[test]
fn dynamic_where_joins_conjuncts_with_and() {
    let t = TabSample::default();
    let mut filter = DynamicWhere::new(());
    assert_eq!(to_sql(&filter), "");

    filter.add(t.alpha().eq(1).or(t.alpha().eq(2)));
    assert_eq!(to_sql(&filter), " WHERE (tab_sample.alpha=1 OR tab_sample.alpha=2)");

    let mut filter = DynamicWhere::new(t.gamma().into_conjuncts());
    assert_eq!(to_sql(&filter), " WHERE tab_sample.gamma");
    filter.add(t.beta().is_null());
    filter.add(t.alpha().gt(3).and(t.gamma()));
    assert_eq!(
        to_sql(&filter),
        " WHERE tab_sample.gamma AND tab_sample.beta IS NULL AND tab_sample.alpha>3 AND tab_sample.gamma"
    );
}

#[test]
fn static_where_and_unconditional() {
    let t = TabSample::default();
    assert_eq!(to_sql(&Where::new(t.gamma())), " WHERE tab_sample.gamma");
    assert_eq!(to_sql(&Unconditional), "");
}

#[test]
fn assignments_write_null_for_trivial_values() {
    let t = TabSample::default();
    // beta is declared trivial_is_null, alpha is not
    assert_eq!(to_sql(&t.beta().set("")), "beta=NULL");
    assert_eq!(to_sql(&t.beta().set("x")), "beta='x'");
    assert_eq!(to_sql(&t.alpha().set(0)), "alpha=0");
    assert!(t.beta().set("").writes_null());
    assert!(!t.alpha().set(0).writes_null());

    let f = TabFoo::default();
    assert_eq!(to_sql(&f.delta().set("")), "delta=''");
    assert_eq!(to_sql(&f.delta().set(tvin(""))), "delta=NULL");
    assert_eq!(to_sql(&f.delta().set(tvin("y"))), "delta='y'");
    assert_eq!(to_sql(&f.delta().set_null()), "delta=NULL");
    assert_eq!(to_sql(&f.delta().set_tvin("")), "delta=NULL");
    assert_eq!(to_sql(&f.delta().set_tvin("z")), "delta='z'");
}

#[test]
fn trivial_is_null_is_ignored_on_not_null_columns() {
    use crate::context::Context;
    use crate::expr::Expression;
    use crate::kind::{Integral, NotNull};
    use crate::serialize::Serialize;
    use crate::table::{Column, serialize_column};

    #[derive(Debug, Clone, Copy, Default)]
    struct Qty;

    impl Serialize for Qty {
        fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
            serialize_column::<Self, C>(ctx);
        }
    }

    impl Expression for Qty {
        type Kind = Integral;
        type Nullability = NotNull;
        const TRIVIAL_VALUE_IS_NULL: bool = true;
    }

    impl Column for Qty {
        type Table = TabFoo;
        const NAME: &'static str = "qty";
    }

    assert!(!Qty.set(0).writes_null());
    assert_eq!(to_sql(&Qty.set(0)), "qty=0");
}

#[test]
fn default_and_append() {
    let t = TabSample::default();
    assert_eq!(to_sql(&t.alpha().set_default()), "alpha=DEFAULT");
    assert_eq!(to_sql(&t.beta().append("!")), "beta=tab_sample.beta||'!'");
    assert_eq!(to_sql(&t.alpha().set(t.alpha().plus(1))), "alpha=tab_sample.alpha + 1");
}

#[test]
fn set_and_insert_values() {
    let t = TabSample::default();
    let list = (t.alpha().set(1), t.beta().set(""));
    assert_eq!(to_sql(&Set::new(list.clone())), " SET alpha=1,beta=NULL");
    assert_eq!(to_sql(&InsertSet::new(list)), " (alpha,beta) VALUES(1,NULL)");
    assert_eq!(to_sql(&DefaultValues), " DEFAULT VALUES");
}

#[test]
fn dynamic_set() {
    let t = TabSample::default();
    let mut set = DynamicSet::new(());
    assert!(set.is_empty());
    assert_eq!(to_sql(&set), "");
    set.add(t.gamma().set(true));
    assert!(!set.is_empty());
    assert_eq!(to_sql(&set), " SET gamma=TRUE");

    let mut set = DynamicSet::new((t.alpha().set(2),));
    set.add(t.beta().set("b"));
    assert_eq!(to_sql(&set), " SET alpha=2,beta='b'");
    assert_eq!(set.dynamic_len(), 1);
}

#[test]
fn grouping_ordering_and_paging() {
    let t = TabSample::default();
    assert_eq!(
        to_sql(&GroupBy::new((t.alpha(), t.gamma()))),
        " GROUP BY tab_sample.alpha,tab_sample.gamma"
    );
    assert_eq!(
        to_sql(&Having::new(count(t.beta()).gt(1))),
        " HAVING COUNT(tab_sample.beta)>1"
    );
    assert_eq!(
        to_sql(&OrderBy::new((t.alpha().asc(), t.beta()))),
        " ORDER BY tab_sample.alpha ASC,tab_sample.beta"
    );
    assert_eq!(to_sql(&Limit::new(10)), " LIMIT 10");
    assert_eq!(to_sql(&Offset::new(5)), " OFFSET 5");
    assert_eq!(Limit::new(10).count(), 10);
    assert_eq!(to_sql(&Flags::new(Distinct)), "DISTINCT ");
    assert_eq!(to_sql(&Flags::new(All)), "ALL ");
}

#[test]
fn select_list_shapes_the_row() {
    let t = TabSample::default();
    let list = (t.alpha(), t.beta().as_("b"), count_all().as_("n"));
    let row = list.new_row(ResultPolicy::new());
    assert_eq!(row.len(), 3);
    assert!(!row.is_valid());

    let mut ctx = StringContext::new();
    list.serialize_list(&mut ctx, ",");
    assert_eq!(ctx.as_str(), "tab_sample.alpha,tab_sample.beta AS b,COUNT(*) AS n");
}

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use typedsql::__doc_schema::TabSample;
use typedsql::prelude::*;
use typedsql::{ContextConfig, PlaceholderStyle, StringContext, to_sql_with};

fn bench_static_select(c: &mut Criterion) {
    let t = TabSample::default();
    let q = select((t.alpha(), t.beta(), t.gamma()))
        .from(t)
        .where_(t.alpha().gt(7).and(t.beta().like("%cake")).or(t.gamma()))
        .order_by(t.alpha().desc())
        .limit(10);

    c.bench_function("serialize/static_select", |b| {
        b.iter(|| black_box(to_sql(&q)));
    });
}

fn bench_dynamic_where(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize/dynamic_where");
    let t = TabSample::default();

    for n in [1, 5, 10, 50, 100] {
        let mut q = select(t.alpha()).from(t).dynamic_where(());
        for i in 0..n {
            q.add_where(t.alpha().ne(i as i64).or(t.beta().eq("x")));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(to_sql(q)));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize/in_list");
    let t = TabSample::default();

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        let q = remove_from(t).where_(t.alpha().in_(values));
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(to_sql(q)));
        });
    }

    group.finish();
}

fn bench_placeholders(c: &mut Criterion) {
    let t = TabSample::default();
    let q = update(t)
        .set((
            t.alpha().set(parameter_for(t.alpha())),
            t.beta().set(parameter_for(t.beta())),
        ))
        .where_(t.gamma().eq(parameter::<Boolean>("flag")));
    let config = ContextConfig::new().with_placeholder(PlaceholderStyle::Numbered);

    c.bench_function("serialize/numbered_placeholders", |b| {
        b.iter(|| black_box(to_sql_with(&q, StringContext::with_config(config))));
    });
}

criterion_group!(
    benches,
    bench_static_select,
    bench_dynamic_where,
    bench_in_list,
    bench_placeholders
);
criterion_main!(benches);

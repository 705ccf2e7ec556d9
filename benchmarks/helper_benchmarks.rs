#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Helper benchmarks: qsh operations vs the url crate's form serializer
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qsh::{QueryString, QueryStringHelper};

const QUERY: &str = "state=VIC&region=outer&suburb=Melbourne&region=north&postcode=3000&page=0&sort=stars,desc&locale=3&age=50&sort=name&region=central";
const ESCAPED: &str = "state=new%20south%20wales&region=outer%20east&suburb=melbourne%20west&region=north%20south&postcode=3000&%20%20page=0";

fn bench_reconstruct_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for (name, input) in [("plain", QUERY), ("escaped", ESCAPED)] {
        group.bench_function(format!("qsh/{name}"), |b| {
            b.iter(|| QueryString::parse(black_box(input)).reconstruct_query_string());
        });

        group.bench_function(format!("url_crate/{name}"), |b| {
            b.iter(|| {
                let pairs = url::form_urlencoded::parse(black_box(input).as_bytes());
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs)
                    .finish()
            });
        });
    }

    group.finish();
}

fn bench_remove_all_and_add(c: &mut Criterion) {
    let helper = QueryStringHelper::new();

    c.bench_function("remove_all_and_add", |b| {
        b.iter(|| {
            helper.remove_all_and_add(
                Some(black_box(QUERY)),
                ["region", "sort"],
                [("page", "1"), ("q", "san francisco")],
            )
        });
    });
}

fn bench_remove_nth_and_add(c: &mut Criterion) {
    let helper = QueryStringHelper::new();

    c.bench_function("remove_nth_and_add", |b| {
        b.iter(|| {
            helper.remove_nth_and_add(
                Some(black_box(QUERY)),
                [("region", [0, 2]), ("sort", [1, 5])],
                [("page", "1")],
            )
        });
    });
}

fn bench_adjust_numeric_value_by(c: &mut Criterion) {
    let helper = QueryStringHelper::new();

    c.bench_function("adjust_first_numeric_value_by", |b| {
        b.iter(|| helper.adjust_first_numeric_value_by(Some(black_box(QUERY)), "page", 1));
    });
}

criterion_group!(
    benches,
    bench_reconstruct_all,
    bench_remove_all_and_add,
    bench_remove_nth_and_add,
    bench_adjust_numeric_value_by
);
criterion_main!(benches);

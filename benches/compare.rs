use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use natseq::{compare, sorted, tokenize};

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, input) in [
        ("text_only", "plain alphabetic label"),
        ("numbered", "chapter 12 section 3.5 page 104"),
        ("dated", "released 2017/02/14 build 200"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| tokenize(black_box(input)))
        });
    }

    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    group.bench_function("equal_fast_path", |b| {
        b.iter(|| compare(black_box("report 2017-02-14"), black_box("report 2017-02-14")))
    });
    group.bench_function("signature_mismatch", |b| {
        b.iter(|| compare(black_box("2017/01/23 special"), black_box("20Watermelon")))
    });
    group.bench_function("value_comparison", |b| {
        b.iter(|| compare(black_box("started on 2016-01-02"), black_box("ended on 2017-01-05")))
    });

    group.finish();
}

fn benchmark_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted");

    let base = [
        "Valentine 2017-02-14",
        "a200",
        "a100",
        "abcd 2016/01/01",
        "bacon256",
        "def45",
        "321apple",
        "2017/01/23 special",
        "20Watermelon",
    ];

    for size in [9, 90, 900] {
        let items: Vec<String> = base
            .iter()
            .cycle()
            .take(size)
            .enumerate()
            .map(|(i, s)| format!("{s} {i}"))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| sorted(black_box(items.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenize,
    benchmark_compare,
    benchmark_sorted
);
criterion_main!(benches);

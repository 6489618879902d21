use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textkit_compare::{compare_nocase, natural_cmp};

fn bench_natural_sort(c: &mut Criterion) {
    let names: Vec<String> = (0..1000)
        .map(|i| format!("episode {} - part {}", i % 100, i))
        .collect();

    c.bench_function("natural_cmp sort 1000", |b| {
        b.iter(|| {
            let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
            sorted.sort_by(|a, b| natural_cmp(a, b));
            black_box(sorted)
        })
    });

    c.bench_function("compare_nocase pair", |b| {
        b.iter(|| {
            black_box(compare_nocase(
                black_box("The Quick Brown Fox"),
                black_box("the quick brown fox"),
            ))
        })
    });
}

criterion_group!(benches, bench_natural_sort);
criterion_main!(benches);

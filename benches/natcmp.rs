use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use natcmp::{natcmp, natcmp_utf8};

/// Generate file names like a camera roll, with numbers of varying widths.
fn generate_names(count: usize) -> Vec<String> {
    let mut seed = 12345u64;
    (0..count)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let n = seed % 100_000;
            match seed % 3 {
                0 => format!("IMG_{n}.jpg"),
                1 => format!("img_{n:06}.JPG"),
                _ => format!("Résumé-{n}-été.pdf"),
            }
        })
        .collect()
}

fn bench_pairs(c: &mut Criterion) {
    let pairs = [
        ("item2", "item10"),
        ("file0000000000000000000000000001x", "file0000000000000000000000000001y"),
        ("Résumé-12-été", "résumé-12-Été"),
    ];
    let mut group = c.benchmark_group("pairs");

    for (i, (a, b)) in pairs.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("ascii", i), &(a, b), |bench, (a, b)| {
            bench.iter(|| natcmp(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("utf8", i), &(a, b), |bench, (a, b)| {
            bench.iter(|| natcmp_utf8(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let sizes = [1_000, 10_000];
    let mut group = c.benchmark_group("sort");

    for size in sizes.iter() {
        let names = generate_names(*size);

        group.bench_with_input(BenchmarkId::new("ascii", size), &names, |b, names| {
            b.iter(|| {
                let mut names = names.clone();
                names.sort_by(|x, y| natcmp(x, y));
                names
            })
        });
        group.bench_with_input(BenchmarkId::new("utf8", size), &names, |b, names| {
            b.iter(|| {
                let mut names = names.clone();
                names.sort_by(|x, y| natcmp_utf8(x, y));
                names
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pairs, bench_sort);
criterion_main!(benches);

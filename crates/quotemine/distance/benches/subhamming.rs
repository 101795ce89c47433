use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quotemine_distance::{chars, words};

fn sentence(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("w{}", i % 17)).collect()
}

fn benchmark_word_subhamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_subhamming");

    for size in [8usize, 32, 128].iter() {
        let source = sentence(*size);
        let destination: Vec<String> = source[size / 4..size / 2].to_vec();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| words::subhamming(&source, &destination));
        });
    }
    group.finish();
}

fn benchmark_char_levenshtein(c: &mut Criterion) {
    c.bench_function("char levenshtein", |b| {
        b.iter(|| chars::levenshtein("programme", "program"));
    });
}

criterion_group!(benches, benchmark_word_subhamming, benchmark_char_levenshtein);
criterion_main!(benches);

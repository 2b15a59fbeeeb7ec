use acorn_trie::{Order, Trie};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_build(words: &[String]) -> anyhow::Result<Trie> {
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word)?;
    }
    Ok(trie)
}

fn criterion_benchmark(c: &mut Criterion) {
    let words: Vec<String> = (0..1000).map(|i| format!("word{i:04x}")).collect();

    c.bench_function("build 1000 words", |b| {
        b.iter(|| bench_build(black_box(&words)))
    });

    let trie = bench_build(&words).unwrap_or_default();
    c.bench_function("count under a prefix", |b| {
        b.iter(|| trie.count_with_prefix(black_box("word00")))
    });
    c.bench_function("list ascending", |b| {
        b.iter(|| trie.words_in_order(black_box(Order::Ascending)))
    });
    c.bench_function("scan for substring", |b| {
        b.iter(|| trie.words_containing(black_box("3e")))
    });
    c.bench_function("shortest unique prefixes", |b| {
        b.iter(|| trie.shortest_unique_prefixes())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mdsite_engine::parsing::inline::tokenize;
use mdsite_engine::{markdown_to_html, parse_document};
mod common;

fn bench_markdown_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_to_html");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| markdown_to_html(std::hint::black_box(content)));
        });
    }

    group.finish();
}

fn bench_block_parsing(c: &mut Criterion) {
    let content = common::generate_markdown_content(100);
    c.bench_function("parse_document", |b| {
        b.iter(|| parse_document(std::hint::black_box(&content)));
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let text = common::generate_inline_heavy_paragraph(50);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(std::hint::black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_markdown_to_html,
    bench_block_parsing,
    bench_tokenize
);
criterion_main!(benches);

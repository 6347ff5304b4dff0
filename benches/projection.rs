//! Benchmarks for segment projection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokmark::{decode_records, AnalyzeSettings, Analyzer, Chunk, Projector, WordBoundaryAnalyzer};

fn sample_text(size: usize) -> String {
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

/// Split into runs of uneven length, the way inline markup would.
fn fragment(text: &str) -> Vec<Chunk> {
    let mut runs = Vec::new();
    let mut rest = text;
    let mut width = 3;
    while !rest.is_empty() {
        let end = width.min(rest.len());
        runs.push(&rest[..end]);
        rest = &rest[end..];
        width = width % 17 + 5;
    }
    Chunk::collect(runs)
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let analyzer = WordBoundaryAnalyzer::default();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let records = analyzer
            .analyze(&text, &AnalyzeSettings::default())
            .expect("reference analyzer accepts jsonl");
        let segments = decode_records(&records).segments;
        let chunks = fragment(&text);
        let projector = Projector::default();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("fragmented", size),
            &(segments, chunks),
            |b, (segments, chunks)| {
                b.iter(|| projector.project(black_box(segments), black_box(chunks)))
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");
    let analyzer = WordBoundaryAnalyzer::default();

    for size in [1_000, 10_000, 100_000] {
        let records = analyzer
            .analyze(&sample_text(size), &AnalyzeSettings::default())
            .expect("reference analyzer accepts jsonl");

        group.throughput(Throughput::Bytes(records.len() as u64));
        group.bench_with_input(BenchmarkId::new("jsonl", size), &records, |b, records| {
            b.iter(|| decode_records(black_box(records)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_decode);
criterion_main!(benches);

use std::{collections::HashMap, hint::black_box};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use propfile::{Parser, Properties, Settings};

/// Builds a document of `n` definitions mixing the features the loader has to
/// handle: comments, padding, escapes and continuations.
fn document(n: usize) -> String {
    let mut text = String::with_capacity(n * 48);
    for i in 0..n {
        match i % 4 {
            0 => text.push_str(&format!("# section {i}\n")),
            1 => text.push_str(&format!("  key.{i} = value number {i}  \n")),
            2 => text.push_str(&format!("path\\={i}=c:\\\\dir\\\\{i}\\n\n")),
            _ => text.push_str(&format!("wrapped.{i}=first part \\\n    second part {i}\n")),
        }
    }
    text
}

fn table(n: usize) -> Properties {
    (0..n)
        .map(|i| (format!("key.{i}=x"), format!("value {i}\nwith\\slash")))
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for n in [16usize, 256, 4096] {
        let text = document(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| {
                let mut props = Properties::new();
                props.load(black_box(text.as_bytes())).unwrap();
                props
            });
        });
    }
    group.finish();
}

fn bench_parser_chunks(c: &mut Criterion) {
    let text = document(1024);
    let mut group = c.benchmark_group("parser_chunks");
    group.throughput(Throughput::Bytes(text.len() as u64));
    for size in [7usize, 64, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut sink: HashMap<String, String> = HashMap::new();
                let mut parser = Parser::default();
                for chunk in text.as_bytes().chunks(size) {
                    parser.feed(black_box(chunk), &mut sink).unwrap();
                }
                parser.finish(&mut sink).unwrap();
                sink
            });
        });
    }
    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    for (label, settings) in [
        ("unsorted", Settings::default()),
        ("sorted", Settings::default().with_sorted_output(true)),
    ] {
        let props = table(2048);
        group.bench_function(label, |b| {
            let mut out = Vec::with_capacity(128 * 1024);
            b.iter(|| {
                out.clear();
                props.store_with(&mut out, black_box(&settings)).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_parser_chunks, bench_store);
criterion_main!(benches);

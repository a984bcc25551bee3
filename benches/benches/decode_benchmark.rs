//! Decode throughput on synthetic metastock files.
//!
//! Run with: `cargo bench --package metastock-bench`

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use metastock_bench::{EMASTER_STRIDE, emaster_file, f32_to_mbf, series_file};
use metastock_codec::{TextEncoding, mbf_to_f32};
use metastock_reader::{EMASTER_LAYOUT, decode_catalog, decode_series};
use metastock_types::FieldCount;

fn mbf_benchmark(c: &mut Criterion) {
    let values: Vec<[u8; 4]> = (0..10_000).map(|i| f32_to_mbf(i as f32 * 0.37)).collect();

    let mut group = c.benchmark_group("mbf");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("mbf_to_f32", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|bytes| mbf_to_f32(black_box(*bytes)))
                .sum::<f32>()
        });
    });
    group.finish();
}

fn series_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for (name, count) in [("daily", FieldCount::Seven), ("intraday", FieldCount::Eight)] {
        for bars in [1_000usize, 20_000] {
            let data = series_file(count, bars);
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, bars), &data, |b, data| {
                b.iter(|| decode_series(black_box(data), count).unwrap());
            });
        }
    }

    group.finish();
}

fn catalog_benchmark(c: &mut Criterion) {
    let data = emaster_file(255);

    let mut group = c.benchmark_group("catalog");
    group.throughput(Throughput::Elements((data.len() / EMASTER_STRIDE - 1) as u64));
    group.bench_function("emaster_255", |b| {
        b.iter(|| {
            decode_catalog(black_box(&data), &EMASTER_LAYOUT, TextEncoding::Ascii).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, mbf_benchmark, series_benchmark, catalog_benchmark);
criterion_main!(benches);

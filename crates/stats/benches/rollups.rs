use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ombor_core::ProductId;
use ombor_inventory::variants::{decode, encode};
use ombor_inventory::{ProductRecord, VariantMap};
use ombor_stats::{summary, units_by_color, units_by_size};

const COLORS: [&str; 5] = ["Qora", "Oq", "Ko'k", "Qizil", "Yashil"];
const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

fn sample_records(count: usize) -> Vec<ProductRecord> {
    (0..count)
        .map(|i| {
            let mut variants = VariantMap::new();
            for (c, color) in COLORS.iter().enumerate().take(1 + i % COLORS.len()) {
                for (s, size) in SIZES.iter().enumerate() {
                    variants.set_quantity(*color, *size, ((i + c * s) % 40) as u32);
                }
            }
            ProductRecord {
                product_id: ProductId::new(),
                name: format!("Mahsulot {i}"),
                category: format!("Toifa {}", i % 4),
                country_of_origin: "O'zbekiston".to_string(),
                store_id: "D-01".to_string(),
                manager: format!("Omborchi {}", i % 3),
                image_ref: None,
                variants,
                unit_price: 1_000.0 + i as f64,
            }
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let records = sample_records(1);
    let field = encode(&records[0].variants);

    let mut group = c.benchmark_group("variant_codec");
    group.throughput(Throughput::Bytes(field.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&records[0].variants)))
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(Some(field.as_str()))))
    });
    group.finish();
}

fn bench_rollups(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollups");
    for count in [100usize, 1_000, 10_000] {
        let records = sample_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("summary", count), &records, |b, records| {
            b.iter(|| summary(black_box(records)))
        });
        group.bench_with_input(
            BenchmarkId::new("units_by_color", count),
            &records,
            |b, records| b.iter(|| units_by_color(black_box(records))),
        );
        group.bench_with_input(
            BenchmarkId::new("units_by_size", count),
            &records,
            |b, records| b.iter(|| units_by_size(black_box(records))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_codec, bench_rollups);
criterion_main!(benches);

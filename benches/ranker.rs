//! Ranker micro-benchmarks over a synthetic store.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tally::store::Record;
use tally::store::search::rank;

const LOCATIONS: &[&str] = &["garage", "attic", "basement", "shed", "office"];
const PROPERTIES: &[&str] = &["red", "blue", "steel", "bolt", "nut", "spare", "fragile"];

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::item(
                i as u32,
                LOCATIONS[i % LOCATIONS.len()],
                (i % 10).to_string(),
                vec![
                    PROPERTIES[i % PROPERTIES.len()].to_string(),
                    PROPERTIES[(i * 3) % PROPERTIES.len()].to_string(),
                ],
            )
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranker");

    for n in [100, 1_000, 10_000] {
        let records = synthetic_records(n);
        group.bench_function(format!("two_keywords_{n}_records"), |b| {
            b.iter(|| rank(black_box(&records), black_box(&["bolt", "garage"])))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);

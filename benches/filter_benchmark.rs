//! Filter and card-layout benchmarks.
//!
//! The visible subset is recomputed from scratch on every keystroke and
//! after every page, so both must stay cheap for thousands of records.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use launchdeck::model::{LaunchId, LaunchRecord};
use launchdeck::state::filter_indices;
use launchdeck::view::card_height;

const MISSIONS: &[&str] = &["FalconSat", "DemoSat", "Trailblazer", "CRS", "Starlink", "Iridium NEXT"];

fn generate_records(count: u32) -> Vec<LaunchRecord> {
    (1..=count)
        .map(|n| {
            let name = format!("{} {}", MISSIONS[n as usize % MISSIONS.len()], n);
            LaunchRecord::new(LaunchId::new(n), name).with_details(
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(6),
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = generate_records(5_000);

    c.bench_function("filter_5000_records_short_term", |b| {
        b.iter(|| filter_indices(black_box(&records), black_box("sat")))
    });

    c.bench_function("filter_5000_records_no_match", |b| {
        b.iter(|| filter_indices(black_box(&records), black_box("zzzz")))
    });

    c.bench_function("filter_5000_records_blank_term", |b| {
        b.iter(|| filter_indices(black_box(&records), black_box("")))
    });
}

fn bench_card_heights(c: &mut Criterion) {
    let records = generate_records(1_000);

    c.bench_function("card_heights_1000_one_expanded", |b| {
        b.iter(|| {
            records
                .iter()
                .enumerate()
                .map(|(i, r)| card_height(r, i == 500, black_box(80)))
                .map(u32::from)
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, bench_filter, bench_card_heights);
criterion_main!(benches);

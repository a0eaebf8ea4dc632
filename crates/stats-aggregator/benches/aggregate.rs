//! Aggregation throughput benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use station_model::{AddressInfo, OperatorInfo, StationRecord, StatusType};
use stats_aggregator::aggregate;

fn sample_records(count: usize) -> Vec<StationRecord> {
    let regions = ["VIC", "NSW", "QLD", "WA", "Unknown"];
    let operators = ["Chargefox", "Evie", "Tesla"];
    (0..count)
        .map(|i| StationRecord {
            id: Some(i as i64),
            address: Some(AddressInfo {
                state_or_province: Some(regions[i % regions.len()].to_string()),
                town: None,
            }),
            status: Some(StatusType {
                is_operational: Some(i % 3 == 0),
                title: None,
            }),
            operator: Some(OperatorInfo {
                title: Some(operators[i % operators.len()].to_string()),
            }),
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = sample_records(10_000);
    let refs: Vec<&StationRecord> = records.iter().collect();

    c.bench_function("aggregate_10k_records", |b| {
        b.iter(|| aggregate(black_box(&refs)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);

//! Cleaning pipeline throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record_cleaner::{CleaningPipeline, RawRecord};

const VEHICLES: [&str; 5] = ["Ambulance", " crane", "PATROL VEHICLE ", "bus", "tanker"];
const VERSIONS: [&str; 4] = ["2.0.8", "2.0.9", "", "1.9.4"];

fn synthetic_batch(rows: usize) -> Vec<RawRecord> {
    (0..rows)
        .map(|i| {
            [
                ("driver_id", i.to_string()),
                ("driver_name", format!("driver {}", i)),
                ("vehicle_type", VEHICLES[i % VEHICLES.len()].to_string()),
                ("intouch_active_status", if i % 7 == 0 { "false" } else { "TRUE" }.to_string()),
                ("current_version", VERSIONS[i % VERSIONS.len()].to_string()),
                ("device_imei", format!("35{:013}", i)),
                ("vehicle_no", format!("KA-01-{:04}", i % 10_000)),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = CleaningPipeline::default();
    let batch = synthetic_batch(10_000);

    c.bench_function("clean_10k_rows", |b| {
        b.iter(|| pipeline.run(black_box(batch.clone())))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);

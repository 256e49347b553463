//! Benchmarks for the MPS content store
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use mps_site::storage::*;
use std::sync::Arc;
use tempfile::tempdir;

fn create_test_leads(count: usize) -> Vec<Lead> {
    (0..count)
        .map(|i| {
            Lead::from_new(
                sample_lead(i),
                (1_700_000_000_000u64 + i as u64).to_string(),
                "2024-01-01T00:00:00.000Z",
            )
        })
        .collect()
}

fn sample_lead(i: usize) -> NewLead {
    NewLead {
        full_name: format!("Guest {}", i),
        email: format!("guest{}@example.com", i),
        phone: "+382 67 000 000".to_string(),
        message: "Weekly cleaning and key holding for the summer season".to_string(),
        property_location: "Budva".to_string(),
        property_types: vec!["Villa".to_string()],
        service_types: vec!["Cleaning".to_string(), "Key Holding".to_string()],
    }
}

/// Store over `medium` with `leads` already persisted
fn prefilled(medium: Arc<dyn KeyValueMedium>, leads: &[Lead]) -> ContentStore {
    let raw = serde_json::to_string(leads).unwrap();
    medium.set(keys::LEADS, &raw).unwrap();
    let store = ContentStore::new(medium);
    store.initialize().unwrap();
    store
}

fn bench_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory");

    for size in [10, 100, 1000] {
        let leads = create_test_leads(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("get_leads_{}", size), |b| {
            let store = prefilled(Arc::new(MemoryMedium::new()), &leads);
            b.iter(|| black_box(store.get_leads()))
        });

        group.bench_function(format!("insert_lead_into_{}", size), |b| {
            b.iter_batched(
                || prefilled(Arc::new(MemoryMedium::new()), &leads),
                |store| store.insert_lead(black_box(sample_lead(size))).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("get_config", |b| {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();
        b.iter(|| black_box(store.get_config()))
    });

    group.bench_function("services_grouped", |b| {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();
        b.iter(|| black_box(store.services_grouped()))
    });

    group.finish();
}

fn bench_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("file");
    let leads = create_test_leads(100);

    group.bench_function("insert_lead_into_100", |b| {
        let dir = tempdir().unwrap();
        let medium = Arc::new(FileMedium::open(dir.path()).unwrap());
        b.iter_batched(
            || prefilled(medium.clone(), &leads),
            |store| store.insert_lead(black_box(sample_lead(100))).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("get_leads_100", |b| {
        let dir = tempdir().unwrap();
        let store = prefilled(Arc::new(FileMedium::open(dir.path()).unwrap()), &leads);
        b.iter(|| black_box(store.get_leads()))
    });

    group.bench_function("get_config", |b| {
        let dir = tempdir().unwrap();
        let store = ContentStore::open(&StorageConfig::new(dir.path())).unwrap();
        store.initialize().unwrap();
        b.iter(|| black_box(store.get_config()))
    });

    group.finish();
}

criterion_group!(benches, bench_memory, bench_file);
criterion_main!(benches);

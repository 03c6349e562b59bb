use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use stockflow_catalog::{Catalog, Location, Product};
use stockflow_infra::{InMemorySnapshotStore, InventoryService};
use stockflow_ledger::{Movement, MovementLedger};
use stockflow_reporting::stock_report;

const PRODUCTS: usize = 10;
const LOCATIONS: usize = 10;

fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for p in 0..PRODUCTS {
        catalog
            .insert_product(Product::new(format!("P{p}"), format!("Product {p}"), None))
            .unwrap();
    }
    for l in 0..LOCATIONS {
        catalog
            .insert_location(Location::new(format!("L{l}"), format!("Location {l}")))
            .unwrap();
    }
    catalog
}

fn nth_movement(n: usize) -> Movement {
    // Spread movements across all pairs, alternating direction.
    let product = format!("P{}", n % PRODUCTS);
    let location = format!("L{}", (n / PRODUCTS) % LOCATIONS);
    let (from, to) = if n % 3 == 0 {
        (Some(location.into()), None)
    } else {
        (None, Some(location.into()))
    };
    Movement {
        id: format!("M{n}").into(),
        product_id: product.into(),
        from_location: from,
        to_location: to,
        qty: (n % 50 + 1) as i64,
        timestamp: Utc::now(),
    }
}

fn seeded_ledger(catalog: &Catalog, movements: usize) -> MovementLedger {
    let mut ledger = MovementLedger::new();
    for n in 0..movements {
        ledger.record(nth_movement(n), catalog).unwrap();
    }
    ledger
}

fn bench_ledger_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_append");
    group.sample_size(1000);

    // Raw domain insert: validation plus map insert, no persistence.
    group.bench_function("record_movement_raw", |b| {
        let catalog = seeded_catalog();
        let mut ledger = MovementLedger::new();
        let mut n = 0usize;
        b.iter(|| {
            ledger.record(black_box(nth_movement(n)), &catalog).unwrap();
            n += 1;
        });
    });

    // Full service commit: clone, apply, snapshot save, swap.
    group.bench_function("record_movement_committed", |b| {
        let service = InventoryService::open(InMemorySnapshotStore::new()).unwrap();
        for p in 0..PRODUCTS {
            service
                .create_product(Product::new(format!("P{p}"), format!("Product {p}"), None))
                .unwrap();
        }
        for l in 0..LOCATIONS {
            service
                .create_location(Location::new(format!("L{l}"), format!("Location {l}")))
                .unwrap();
        }
        let mut n = 0usize;
        b.iter(|| {
            service.record_movement(black_box(nth_movement(n))).unwrap();
            n += 1;
        });
    });

    group.finish();
}

fn bench_report_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_derivation");

    for movements in [1_000usize, 10_000] {
        let catalog = seeded_catalog();
        let ledger = seeded_ledger(&catalog, movements);

        group.throughput(Throughput::Elements(movements as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(movements),
            &movements,
            |b, _| {
                b.iter(|| stock_report(black_box(&catalog), black_box(&ledger)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ledger_append, bench_report_derivation);
criterion_main!(benches);

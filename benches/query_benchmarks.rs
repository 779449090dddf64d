//! Performance benchmarks for the contact list query.
//!
//! These benchmarks measure the filter/sort/group pipeline over stores of
//! different sizes:
//! - Unfiltered list (sort and group only)
//! - Filtered list with a common substring
//! - Save gate evaluation

use chrono::NaiveDate;
use contact_book::validation::is_save_enabled;
use contact_book::{
    ContactDraft, ContactRepository, ContactStore, EmailAddress, FixedClock, ListQuery,
    PersonName, PhoneNumber, SortOrder,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FIRST_NAMES: [&str; 8] = ["Alice", "Amy", "Bob", "Carl", "Dana", "Eve", "Frank", "Gina"];
const LAST_NAMES: [&str; 5] = ["Lee", "Moe", "Ray", "Smith", "Doe"];

fn build_store(size: usize) -> ContactStore {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let mut store = ContactStore::with_clock(clock);

    for i in 0..size {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
        store.add(ContactDraft::new(
            PersonName::new(first).unwrap(),
            PersonName::new(last).unwrap(),
            PhoneNumber::new(format!("555{:04}", i % 10_000)).unwrap(),
            EmailAddress::new(format!("user{}@example.com", i)).unwrap(),
        ));
    }

    store
}

/// Benchmark sorting and grouping without a search filter.
fn bench_unfiltered(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_unfiltered");

    for size in [100, 1_000, 10_000] {
        let store = build_store(size);
        let query = ListQuery::new("", SortOrder::Ascending);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(query.run(store.iter())).len());
        });
    }

    group.finish();
}

/// Benchmark the full pipeline with a substring filter.
fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_filtered");

    for size in [100, 1_000, 10_000] {
        let store = build_store(size);
        let query = ListQuery::new("mi", SortOrder::Descending);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(query.run(store.iter())).len());
        });
    }

    group.finish();
}

/// Benchmark the save gate, which runs on every keystroke.
fn bench_save_gate(c: &mut Criterion) {
    c.bench_function("save_gate", |b| {
        b.iter(|| {
            is_save_enabled(
                black_box("John"),
                black_box("Doe"),
                black_box("5551234"),
                black_box("john.doe+work@mail.example.com"),
            )
        });
    });
}

criterion_group!(benches, bench_unfiltered, bench_filtered, bench_save_gate);
criterion_main!(benches);

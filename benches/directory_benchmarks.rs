//! Performance benchmarks for directory queries.
//!
//! These benchmarks measure:
//! - Substring search over directories of different sizes
//! - Sorting and rendering the HTML listing

use agenda::{Contact, Directory, HtmlRenderer, JsonRenderer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a directory with `size` generated contacts.
fn create_directory(size: usize) -> Directory {
    let mut directory = Directory::new();
    for i in 0..size {
        let mut contact = Contact::new(
            format!("Contacto {:05}", size - i),
            format!("600{:06}", i),
            format!("Calle {} {}", i % 97, i),
        );
        if i % 2 == 0 {
            contact = contact.with_email(format!("contacto{}@example.com", i));
        }
        directory.add(contact);
    }
    directory
}

/// Benchmark search with different directory sizes.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000].iter() {
        let directory = create_directory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| directory.search(black_box("TO 00")));
        });
    }

    group.finish();
}

/// Benchmark the sorted HTML listing with different directory sizes.
fn bench_list_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_html");

    for size in [10, 100, 1000].iter() {
        let directory = create_directory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| directory.list_with(&HtmlRenderer));
        });
    }

    group.finish();
}

/// Benchmark the JSON listing.
fn bench_list_json(c: &mut Criterion) {
    let directory = create_directory(1000);

    c.bench_function("list_json_1000", |b| {
        b.iter(|| directory.list_with(&JsonRenderer));
    });
}

criterion_group!(benches, bench_search, bench_list_html, bench_list_json);
criterion_main!(benches);

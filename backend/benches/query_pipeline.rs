use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use designer_catalog::db::Catalog;
use designer_catalog::models::{Designer, DesignerId, Price};
use designer_catalog::services::{
    aggregate_stats, sort_by, DesignerFilters, PriceRange, SearchCriteria, SortField, SortOrder,
};

/// Seed designers repeated `n` times with fresh ids and varied prices.
fn scaled_catalog(n: usize) -> Vec<Designer> {
    let seed = Catalog::seed().expect("seed catalog");
    seed.all()
        .iter()
        .cycle()
        .take(n)
        .enumerate()
        .map(|(i, d)| {
            let mut d = d.clone();
            d.id = DesignerId::new(i as u32 + 1);
            d.price = Price::new("₹", 1_500 + (i as u64 * 37) % 3_000);
            d.rating = 4.0 + (i % 10) as f64 / 10.0;
            d
        })
        .collect()
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");

    for size in [100usize, 1_000, 10_000] {
        let designers = scaled_catalog(size);
        let refs: Vec<&Designer> = designers.iter().collect();
        let filters = DesignerFilters {
            search: Some("design".to_string()),
            location: Some("india".to_string()),
            min_rating: Some(4.5),
            max_price: Some(3_000),
            ..DesignerFilters::default()
        };

        group.bench_with_input(BenchmarkId::new("filter_and_sort", size), &refs, |b, refs| {
            b.iter(|| {
                let filtered = filters.apply(black_box(refs));
                black_box(sort_by(filtered, SortField::Rating, SortOrder::Desc))
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let designers = scaled_catalog(1_000);
    let refs: Vec<&Designer> = designers.iter().collect();
    let criteria = SearchCriteria {
        keywords: Some("spaces".to_string()),
        tags: Some(vec!["sustainable".to_string(), "luxury".to_string()]),
        price_range: Some(PriceRange {
            min: Some(2_000.0),
            max: Some(4_000.0),
        }),
        ..SearchCriteria::default()
    };

    group.bench_function("multi_criteria_1000", |b| {
        b.iter(|| black_box(criteria.apply(black_box(&refs))));
    });

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [100usize, 10_000] {
        let designers = scaled_catalog(size);
        let refs: Vec<&Designer> = designers.iter().collect();
        group.bench_with_input(BenchmarkId::new("aggregate", size), &refs, |b, refs| {
            b.iter(|| black_box(aggregate_stats(black_box(refs))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_listing, bench_search, bench_stats);
criterion_main!(benches);

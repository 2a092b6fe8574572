use criterion::{black_box, criterion_group, criterion_main, Criterion};
use leagues::filters::{filter_leagues, sport_types};
use leagues::fixtures::create_large_catalog;
use leagues::stats::{sport_breakdown, sport_stats, DEFAULT_TOP_SPORTS};
use leagues::tui::action::Action;
use leagues::tui::reducer::reduce;
use leagues::tui::state::{AppState, CatalogState};
use std::sync::Arc;

/// Roughly the size of the real catalog, and ten times that
const CATALOG_SIZES: &[usize] = &[1_000, 10_000];

/// Benchmark search and sport filtering
fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_leagues");

    for &size in CATALOG_SIZES {
        let leagues = create_large_catalog(size);

        group.bench_function(format!("no_filter_{}", size), |b| {
            b.iter(|| filter_leagues(black_box(&leagues), black_box(""), black_box("")))
        });

        group.bench_function(format!("search_{}", size), |b| {
            b.iter(|| filter_leagues(black_box(&leagues), black_box("Premier"), black_box("")))
        });

        group.bench_function(format!("search_and_sport_{}", size), |b| {
            b.iter(|| filter_leagues(black_box(&leagues), black_box("league"), black_box("Soccer")))
        });
    }

    group.finish();
}

/// Benchmark per-sport statistics
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for &size in CATALOG_SIZES {
        let leagues = create_large_catalog(size);

        group.bench_function(format!("sport_types_{}", size), |b| {
            b.iter(|| sport_types(black_box(&leagues)))
        });

        group.bench_function(format!("sport_stats_{}", size), |b| {
            b.iter(|| sport_stats(black_box(&leagues)))
        });

        group.bench_function(format!("sport_breakdown_{}", size), |b| {
            b.iter(|| sport_breakdown(black_box(&leagues), black_box(DEFAULT_TOP_SPORTS)))
        });
    }

    group.finish();
}

/// Benchmark reducer action dispatch on a loaded catalog
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = AppState {
        catalog: CatalogState::Loaded(Arc::new(create_large_catalog(1_000))),
        ..Default::default()
    };

    let mut group = c.benchmark_group("reducer");

    group.bench_function("search_input", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::SearchInput('a')));
            new_state
        })
    });

    group.bench_function("cycle_sport", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::CycleSport { forward: true }),
            );
            new_state
        })
    });

    group.bench_function("cursor_down", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::CursorDown));
            new_state
        })
    });

    group.finish();
}

criterion_group!(benches, bench_filtering, bench_statistics, bench_reducer_dispatch);
criterion_main!(benches);

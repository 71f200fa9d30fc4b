use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trip_collector::{
    algorithms::neighbors::SearchSpace,
    algorithms::path_enumerator::PathEnumerator,
    utils::synthetic::{synthetic_dataset, SyntheticOptions},
    BudgetedDfsPlanner, PlannerConfig, TripPlanner,
};

fn benchmark_trip_search(c: &mut Criterion) {
    // Create benchmark data
    let options = SyntheticOptions {
        locations: 300,
        ..SyntheticOptions::default()
    };
    let (locations, values) = synthetic_dataset(&options);
    let config = PlannerConfig::default();

    // Benchmark precomputation of distances and neighbor lists
    c.bench_function("search_space_build", |b| {
        b.iter(|| SearchSpace::new(black_box(&locations), config.neighbor_fanout_k))
    });

    let planner = BudgetedDfsPlanner::new(locations.clone(), config.clone());

    // Benchmark pulling the first hundred trips
    c.bench_function("enumerate_100_trips", |b| {
        b.iter(|| {
            PathEnumerator::new(planner.search_space(), black_box(config.distance_budget_km))
                .take(100)
                .count()
        })
    });

    // Benchmark the whole planning step
    c.bench_function("plan", |b| b.iter(|| planner.plan(black_box(&values))));
}

criterion_group!(benches, benchmark_trip_search);
criterion_main!(benches);

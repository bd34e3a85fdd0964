use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intersection_sim::{
    config::SimulationConfig,
    simulation::Intersection,
};

fn benchmark_intersection_tick(c: &mut Criterion) {
    let config = SimulationConfig::load_from_file("intersection.toml")
        .expect("Failed to load configuration");

    let mut intersection = Intersection::new(&config, Some(42))
        .expect("Failed to build intersection");

    // Warm up so the junction holds a realistic number of vehicles
    for _ in 0..2_000 {
        intersection.tick(16.0);
    }

    c.bench_function("intersection_tick", |b| {
        b.iter(|| {
            black_box(intersection.tick(black_box(16.0)));
        })
    });
}

fn benchmark_capacity_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity_scaling");

    for capacity in [5usize, 50, 500, 5_000].iter() {
        let mut config = SimulationConfig::default();
        config.traffic.max_vehicles = *capacity;
        config.traffic.spawn_interval_ms = 1.0;

        let mut intersection = Intersection::new(&config, Some(42))
            .expect("Failed to build intersection");

        // Fill up to the requested capacity
        for _ in 0..*capacity * 2 {
            intersection.tick(16.0);
            if intersection.vehicles().is_full() {
                break;
            }
        }

        group.bench_with_input(
            format!("tick_{}_vehicles", capacity),
            capacity,
            |b, _capacity| {
                b.iter(|| {
                    black_box(intersection.tick(black_box(16.0)));
                    black_box(intersection.sample());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_intersection_tick, benchmark_capacity_scaling);
criterion_main!(benches);

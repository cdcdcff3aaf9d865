use criterion::{
    AxisScale, BenchmarkId, Criterion, PlotConfiguration, criterion_group, criterion_main,
};
use kflow::Color;
use kflow::kmeans::{ClusterState, assign, update};
use kflow::rng;
use kflow::sample::SampledRgbSoA;
use rand::RngExt;
use std::collections::HashMap;

fn generate_random_points(n: usize) -> SampledRgbSoA {
    let mut rng = rng::seeded(314159);
    let mut sampled = SampledRgbSoA::new(n as u32, 1);
    for _ in 0..n {
        sampled.push(
            rng.random_range(0.0..255.0),
            rng.random_range(0.0..255.0),
            rng.random_range(0.0..255.0),
        );
    }
    sampled
}

fn generate_centers(k: usize) -> Vec<Color> {
    let mut rng = rng::seeded(271828);
    (0..k)
        .map(|_| {
            Color::new(
                rng.random_range(0.0..255.0),
                rng.random_range(0.0..255.0),
                rng.random_range(0.0..255.0),
            )
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    let sizes = [
        ("100k", 100_000usize),
        ("1M", 1_000_000usize),
        ("4M", 4_000_000usize),
    ];
    let samples: HashMap<usize, SampledRgbSoA> = sizes
        .iter()
        .map(|&(_, n)| (n, generate_random_points(n)))
        .collect();

    for k in [2usize, 6, 16] {
        let centers = generate_centers(k);

        let mut group = c.benchmark_group(format!("assign_labels/k{k}"));
        group.plot_config(plot_config.clone());
        for &(size_name, size) in sizes.iter() {
            let sample = &samples[&size];
            let mut labels = vec![0usize; size];
            let mut distances = vec![0f32; size];
            group.bench_with_input(BenchmarkId::from_parameter(size_name), &size, |b, _| {
                b.iter(|| assign::assign_labels(sample, &centers, &mut labels, &mut distances))
            });
        }
        group.finish();

        let mut group = c.benchmark_group(format!("update_centers/k{k}"));
        group.plot_config(plot_config.clone());
        for &(size_name, size) in sizes.iter() {
            let sample = &samples[&size];
            let mut labels = vec![0usize; size];
            let mut distances = vec![0f32; size];
            assign::assign_labels(sample, &centers, &mut labels, &mut distances);

            let mut clusters = ClusterState::new(k);
            clusters.previous.copy_from_slice(&centers);
            group.bench_with_input(BenchmarkId::from_parameter(size_name), &size, |b, _| {
                b.iter(|| update::update_centers(sample, &labels, &mut clusters, 5, 16, 0.06))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);

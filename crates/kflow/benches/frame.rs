use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kflow::render::{self, Frame};
use kflow::{Config, Driver, RandomColors, rng, sample};
use rand::Rng;

// (width, height) of typical stills
const IMAGES: [(u32, u32); 3] = [(320, 240), (1280, 720), (1920, 1080)];

fn noise(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    rng::seeded(1618).fill_bytes(&mut buf);
    buf
}

fn bench(c: &mut Criterion) {
    let config = Config {
        seed: Some(7),
        ..Config::default()
    };

    let mut flatten = c.benchmark_group("frame/flatten");
    for &(width, height) in &IMAGES {
        let buf = noise(width, height);
        flatten.throughput(Throughput::Elements(width as u64 * height as u64));
        flatten.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &buf,
            |b, buf| b.iter_with_large_drop(|| sample::sample(width, height, buf)),
        );
    }
    flatten.finish();

    // One animated iteration plus painting its frame, the per-frame cost of a run
    let mut step = c.benchmark_group("frame/iteration");
    step.sample_size(20);
    for &(width, height) in &IMAGES {
        let soa = sample::sample(width, height, &noise(width, height));
        let mut driver = Driver::new(&soa, &config, RandomColors::new(rng::seeded(7)));
        driver.advance();
        let mut frame = Frame::new(width, height);

        step.throughput(Throughput::Elements(soa.len() as u64));
        step.bench_function(BenchmarkId::from_parameter(format!("{width}x{height}")), |b| {
            b.iter(|| {
                driver.advance();
                render::render(driver.labels(), &driver.clusters().centers, &mut frame);
            })
        });
    }
    step.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);

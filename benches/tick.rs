//! Benchmarks for the CPU-side frame work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbor::prelude::*;
use arbor::snow::{SnowConfig, Snowfall};
use arbor::textures::TextureData;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("400_particles", |b| {
        let config = LayoutConfig::default();
        b.iter(|| black_box(generate(&config, 3, 42)))
    });

    group.bench_function("10k_particles", |b| {
        let config = LayoutConfig {
            particle_count: 10_000,
            ..LayoutConfig::default()
        };
        b.iter(|| black_box(generate(&config, 16, 42)))
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for mode in [Mode::Tree, Mode::Dispersed] {
        let layouts = generate(&LayoutConfig::default(), 3, 42);
        let mut out = FrameOutput::for_layouts(&layouts, 3);
        let mut driver = AnimationDriver::new(layouts, DriverConfig::default());

        group.bench_function(format!("400_particles_{mode:?}"), |b| {
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                driver.tick(t, 1.0 / 60.0, mode, &mut out);
                black_box(&out);
            })
        });
    }

    group.finish();
}

fn bench_ambient(c: &mut Criterion) {
    let mut group = c.benchmark_group("ambient");

    group.bench_function("snow_1000", |b| {
        let mut snow = Snowfall::new(SnowConfig::default(), 1);
        let mut t = 0.0f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            snow.update(t, 1.0 / 60.0);
            black_box(snow.instances());
        })
    });

    group.bench_function("snowflake_raster_256", |b| {
        b.iter(|| black_box(TextureData::snowflake(256, 2)))
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_tick, bench_ambient);
criterion_main!(benches);

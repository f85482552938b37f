use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ivivc::prelude::*;

fn bench_wagner_nelson(c: &mut Criterion) {
    let model = OneCompartmentOral {
        dose: 100.0,
        ka: 0.45,
        ke: 0.10,
        vd: 50.0,
    };
    let times: Vec<f64> = (0..=960).map(|i| i as f64 * 0.025).collect();
    let conc = model.concentrations(&times);

    c.bench_function("wagner_nelson_960_samples", |b| {
        b.iter(|| wagner_nelson(black_box(&times), black_box(&conc), black_box(0.10)).unwrap())
    });
}

fn bench_numerical_deconvolution(c: &mut Criterion) {
    let dt = 0.1;
    let times: Vec<f64> = (0..400).map(|i| i as f64 * dt).collect();
    let rate: Vec<f64> = times.iter().map(|&t| 5.0 * (-0.4 * t).exp()).collect();
    let impulse = impulse_response(&times, 0.15, 40.0);
    let conc = convolve(&rate, &impulse, dt);

    c.bench_function("numerical_deconvolution_400_samples", |b| {
        b.iter(|| {
            numerical_deconvolution(
                black_box(&times),
                black_box(&conc),
                black_box(&impulse),
                black_box(dt),
            )
            .unwrap()
        })
    });
}

fn bench_level_a_generation(c: &mut Criterion) {
    let config = LevelAConfig::default();
    c.bench_function("generate_level_a_default", |b| {
        b.iter(|| generate_level_a(black_box(&config)).unwrap())
    });
}

fn bench_level_c_generation(c: &mut Criterion) {
    let config = LevelCConfig::default();
    c.bench_function("generate_level_c_default", |b| {
        b.iter(|| generate_level_c(black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_wagner_nelson,
    bench_numerical_deconvolution,
    bench_level_a_generation,
    bench_level_c_generation
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use reflow_core::algorithms::aggregation::aggregate;
use reflow_core::algorithms::interpolation::{temperature_at, time_above_liquidus};
use reflow_core::algorithms::planning::plan;
use reflow_core::core::domain::{Band, PasteSpecification, ThermalEnvelope};
use reflow_core::services::verification::verify;

fn sample_envelope(index: usize) -> ThermalEnvelope {
    ThermalEnvelope {
        max_temperature_c: 240.0 + (index % 30) as f64,
        max_ramp_up_c_per_s: 2.0 + (index % 10) as f64 * 0.2,
        max_ramp_down_c_per_s: 3.0 + (index % 10) as f64 * 0.2,
        min_soak_time_s: if index % 2 == 0 { Some(60.0) } else { None },
        min_time_above_liquidus_s: Some(40.0 + (index % 5) as f64),
    }
}

fn sac305() -> PasteSpecification {
    PasteSpecification {
        name: "SAC305".to_string(),
        liquidus_temperature_c: 217.0,
        peak_temperature_range: Band::new(235.0, 250.0),
        preheat_target_c: 150.0,
        soak_temperature_range: Band::new(160.0, 180.0),
        soak_duration_range_s: Band::new(60.0, 120.0),
        time_above_liquidus_range_s: Band::new(45.0, 90.0),
        max_ramp_rate_c_per_s: 3.0,
        cooling_rate_range_c_per_s: Band::new(2.0, 4.0),
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [10usize, 100, 1000] {
        let envelopes: Vec<ThermalEnvelope> = (0..size).map(sample_envelope).collect();
        group.bench_with_input(BenchmarkId::new("aggregate", size), &envelopes, |b, input| {
            b.iter(|| aggregate(black_box(input)));
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    let envelope = sample_envelope(1);
    let paste = sac305();
    group.bench_function("plan", |b| {
        b.iter(|| plan(black_box(&envelope), black_box(&paste)));
    });

    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");

    let paste = sac305();
    let profile = plan(&sample_envelope(1), &paste).unwrap();
    let total = profile.total_duration_s();

    group.bench_function("temperature_at_sweep", |b| {
        b.iter(|| {
            for i in 0..100 {
                let t = total * (i as f64) / 100.0;
                black_box(temperature_at(black_box(&profile), black_box(t)).unwrap());
            }
        });
    });

    group.bench_function("time_above_liquidus", |b| {
        b.iter(|| time_above_liquidus(black_box(&profile), black_box(217.0)));
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification");

    let envelope = sample_envelope(1);
    let paste = sac305();
    let profile = plan(&envelope, &paste).unwrap();

    group.bench_function("verify", |b| {
        b.iter(|| verify(black_box(&profile), black_box(&envelope), black_box(&paste)));
    });

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_plan, bench_interpolation, bench_verify);
criterion_main!(benches);

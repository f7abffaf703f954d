//! Benchmarks for `DspCore` with per-block parameter updates.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::{DspCore, EngineConfig, OscType, Params};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/core");

    for &size in BLOCK_SIZES {
        let config = EngineConfig {
            sample_rate: SAMPLE_RATE,
            block_size: size,
        };
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        // === DEFAULT PATCH ===
        // Two plates, 25 resonators, sustained impulse train
        let params = Params::default();
        let mut core = DspCore::new(config, params);
        core.note_on(0, 60, 0.0, 1.0);

        group.bench_with_input(BenchmarkId::new("default", size), &size, |b, _| {
            b.iter(|| {
                core.set_parameters(black_box(&params));
                core.render(black_box(&mut left), black_box(&mut right));
            })
        });

        // === HEAVY PATCH ===
        // Everything at maximum
        let heavy = Params {
            n_cymbal: Params::MAX_N_CYMBAL,
            stack: Params::MAX_STACK,
            osc_type: OscType::Velvet,
            collision: true,
            ..Params::default()
        };
        let mut core = DspCore::new(config, heavy);
        core.note_on(0, 48, 0.0, 1.0);

        group.bench_with_input(BenchmarkId::new("heavy", size), &size, |b, _| {
            b.iter(|| {
                core.set_parameters(black_box(&heavy));
                core.render(black_box(&mut left), black_box(&mut right));
            })
        });
    }

    group.finish();
}

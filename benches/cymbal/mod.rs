//! Benchmarks for plates and stacked hats.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::{
    cymbal::{PlateParams, WaveHat, WaveString},
    dsp::{random::Random, smoother::SmootherConfig},
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_cymbal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cymbal");
    let smoothing = SmootherConfig::new(SAMPLE_RATE, 0.0, 512);

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
        let mut buffer = vec![0.0f32; size];

        for stack in [8, 25, 64] {
            let params = PlateParams {
                stack,
                damping: 0.9,
                ..PlateParams::default()
            };
            let mut plate = WaveString::new(SAMPLE_RATE, 64);
            plate.trigger(&mut Random::new(7));
            plate.set(&params, &smoothing);

            group.bench_with_input(
                BenchmarkId::new(format!("plate_stack_{}", stack), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        for (out, &x) in buffer.iter_mut().zip(&input) {
                            *out = plate.process(black_box(x));
                        }
                    })
                },
            );
        }

        // Worst case: four plates, full stack, collision on
        let params = PlateParams {
            stack: WaveHat::MAX_STACK,
            damping: 0.9,
            ..PlateParams::default()
        };
        let mut hat = WaveHat::new(SAMPLE_RATE);
        hat.set(WaveHat::MAX_CYMBAL, 0.5, &params, &smoothing);
        hat.trigger(&mut Random::new(7));
        hat.set(WaveHat::MAX_CYMBAL, 0.5, &params, &smoothing);

        group.bench_with_input(BenchmarkId::new("hat_4x64_collision", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = hat.process(black_box(x), true);
                }
            })
        });
    }

    group.finish();
}

//! Benchmarks for the pick excitor.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::dsp::{comb::Excitor, random::Random, smoother::SmootherConfig};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_comb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/comb");
    let smoothing = SmootherConfig::new(SAMPLE_RATE, 0.04, 512);

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
        let mut buffer = vec![0.0f32; size];

        let mut excitor = Excitor::new(SAMPLE_RATE);
        excitor.trigger(&mut Random::new(1));
        excitor.set(0.002, 0.3, 1.0, &smoothing);

        group.bench_with_input(BenchmarkId::new("excitor", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = excitor.process(black_box(x));
                }
            })
        });
    }

    group.finish();
}

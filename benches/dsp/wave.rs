//! Benchmarks for the 1D wave lattice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::dsp::wave::Wave1D;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_wave(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wave");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();

        // Lattice length tracks the resonator stack, 64 at most
        for length in [8, 64] {
            let mut wave = Wave1D::new(SAMPLE_RATE, length);
            wave.set(length, 0.9, 0.5, 0.5);

            group.bench_with_input(
                BenchmarkId::new(format!("length_{}", length), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        for &x in &input {
                            wave.process(black_box(x));
                        }
                        black_box(wave.get(0))
                    })
                },
            );
        }
    }

    group.finish();
}

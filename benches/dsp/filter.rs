//! Benchmarks for the resonator filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::dsp::filter::{BiquadBandpass, OneZeroLowpass, RcHighpass};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();
        let mut buffer = input.clone();

        let mut bandpass = BiquadBandpass::new(SAMPLE_RATE);
        bandpass.set_cutoff_q(1_000.0, 0.5);
        group.bench_with_input(BenchmarkId::new("bandpass", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = bandpass.process(black_box(x));
                }
            })
        });

        let mut lowpass = OneZeroLowpass::new(0.5);
        group.bench_with_input(BenchmarkId::new("one_zero_lowpass", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = lowpass.process(black_box(x));
                }
            })
        });

        let mut highpass = RcHighpass::new(0.5);
        group.bench_with_input(BenchmarkId::new("rc_highpass", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = highpass.process(black_box(x));
                }
            })
        });
    }

    group.finish();
}

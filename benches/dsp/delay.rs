//! Benchmarks for the oversampled delay and the string built on it.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wave_cymbal::dsp::{delay::Delay, ks_string::KsString};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
        let mut buffer = vec![0.0f32; size];

        // Fractional time, exercises interpolation
        let mut delay = Delay::new(SAMPLE_RATE, 0.002_37, 0.1);
        group.bench_with_input(BenchmarkId::new("fractional", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = delay.process(black_box(x));
                }
            })
        });

        let mut string = KsString::new(SAMPLE_RATE, 440.0, 1.0);
        group.bench_with_input(BenchmarkId::new("ks_string", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = string.process(black_box(x));
                }
            })
        });
    }

    group.finish();
}

//! Benchmarks for low-level DSP primitives.

mod comb;
mod delay;
mod filter;
mod wave;

pub use comb::bench_comb;
pub use delay::bench_delay;
pub use filter::bench_filter;
pub use wave::bench_wave;

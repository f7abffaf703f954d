//! Low-level DSP primitives used by the cymbal model.
//!
//! These components allocate only in their constructors and are realtime-safe
//! afterwards, making them safe to embed directly inside the resonator banks.
//! They stay focused on the signal-processing math; coupling and orchestration
//! live in [`crate::cymbal`] and [`crate::synth`].

/// Pick excitation combs.
pub mod comb;
/// 2x oversampled fractional delay line.
pub mod delay;
/// One-zero lowpass, RC highpass and self-healing bandpass biquad.
pub mod filter;
/// Karplus-Strong string resonator.
pub mod ks_string;
/// Impulse trains and noise sources for excitation.
pub mod oscillator;
/// Seedable linear congruential generator.
pub mod random;
/// Per-block parameter smoothing.
pub mod smoother;
/// 1-D wave equation lattice.
pub mod wave;

pub use random::Random;
pub use smoother::{LinearSmoother, SmootherConfig};

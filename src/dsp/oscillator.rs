//! Excitation sources that drive the cymbal.
//!
//! None of these are meant to be heard directly: they are impulse trains and
//! noise fed into the pick combs and the lattice.

use crate::dsp::random::Random;

/// Single-sample impulse train at `frequency`.
///
/// Setting the phase to `1.0` makes the very next sample an impulse, which is
/// how a note-on produces an immediate strike even at zero frequency.
#[derive(Debug, Clone, Copy)]
pub struct Pulsar {
    sample_rate: f32,
    tick: f32,
    phase: f32,
}

impl Pulsar {
    pub fn new(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            tick: frequency / sample_rate,
            phase: 0.0,
        }
    }

    pub fn set_frequency(&mut self, hz: f32) {
        self.tick = hz / self.sample_rate;
    }

    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    pub fn reset(&mut self) {
        self.tick = 0.0;
        self.phase = 0.0;
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.phase += self.tick;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
            return 1.0;
        }
        0.0
    }
}

/// Sparse random-sign impulses.
///
/// `set_density` picks a random rate up to `density` impulses per second, so
/// each block gets a slightly different grain.
#[derive(Debug, Clone, Copy)]
pub struct VelvetNoise {
    sample_rate: f32,
    phase: f32,
    tick: f32,
    rng: Random,
}

impl VelvetNoise {
    pub fn new(sample_rate: f32, density: f32, seed: u32) -> Self {
        let mut noise = Self {
            sample_rate,
            phase: 0.0,
            tick: 0.0,
            rng: Random::new(seed),
        };
        noise.set_density(density);
        noise
    }

    pub fn set_density(&mut self, density: f32) {
        self.tick = self.rng.next_f32() * density / self.sample_rate;
    }

    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.phase += self.tick;
        if self.phase < 1.0 {
            return 0.0;
        }
        self.phase -= 1.0;
        2.0 * self.rng.next_f32().round() - 1.0
    }
}

/// Bounded random walk ("brown" noise).
///
/// Each step moves by at most `drift` and is redrawn until it stays inside
/// `[-1, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct BrownNoise {
    seed: i32,
    drift: f32,
    last: f32,
}

impl BrownNoise {
    const MIN_DRIFT: f32 = 1e-5;

    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            drift: 1.0 / 16.0,
            last: 0.0,
        }
    }

    /// Step size, clamped to `[0, 1]` so a valid step always exists.
    pub fn set_drift(&mut self, drift: f32) {
        self.drift = drift.clamp(0.0, 1.0);
    }

    pub fn drift(&self) -> f32 {
        self.drift
    }

    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        self.seed = self
            .seed
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.seed as f32 / (i32::MAX as f32 + 1.0)
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.drift < Self::MIN_DRIFT {
            return 0.0;
        }
        let output = loop {
            let candidate = self.last + self.next_bipolar() * self.drift;
            if candidate.abs() <= 1.0 {
                break candidate;
            }
        };
        self.last = output;
        output
    }
}

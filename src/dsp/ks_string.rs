//! Karplus-Strong string resonator.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!  input ──▶(+)──▶ [Delay 1/f] ──┬──▶ [RC highpass] ──▶ output
//!            ▲                   │
//!            └── decay ◀─ [LP] ◀─┘
//! ```
//!
//! The delay is one period long, so the loop rings at `f` and its harmonics.
//! Every trip around the loop is scaled by `0.5^(decay / f)`, which halves
//! the amplitude `decay` times per second regardless of pitch. The one-zero
//! lowpass in the loop damps upper harmonics faster, and the highpass keeps
//! DC from building up in the output.

use crate::dsp::{
    delay::Delay,
    filter::{OneZeroLowpass, RcHighpass},
    smoother::{LinearSmoother, SmootherConfig},
};

/// Longest period the delay can hold, i.e. 10 Hz.
const MAX_PERIOD: f32 = 0.1;
/// Below this frequency the decay formula divides by (nearly) zero.
const MIN_DECAY_FREQUENCY: f32 = 1e-5;

#[derive(Debug, Clone)]
pub struct KsString {
    frequency: f32,
    feedback: f32,
    decay_mul: f32,
    lowpass: OneZeroLowpass,
    highpass: RcHighpass,
    delay_time: LinearSmoother,
    delay: Delay,
}

impl KsString {
    pub fn new(sample_rate: f32, frequency: f32, decay: f32) -> Self {
        let period = Self::period(frequency);
        let mut string = Self {
            frequency,
            feedback: 0.0,
            decay_mul: 1.0,
            lowpass: OneZeroLowpass::new(0.5),
            highpass: RcHighpass::new(0.5),
            delay_time: LinearSmoother::new(period),
            delay: Delay::new(sample_rate, period, MAX_PERIOD),
        };
        string.decay_mul = Self::decay_multiplier(frequency, decay);
        string
    }

    /// Delay length for `frequency`. Anything below 10 Hz would not fit the
    /// delay line anyway, and zero would produce an infinite period.
    fn period(frequency: f32) -> f32 {
        (1.0 / frequency).clamp(0.0, MAX_PERIOD)
    }

    /// Loop gain applied once per period.
    pub fn decay_multiplier(frequency: f32, decay: f32) -> f32 {
        if frequency < MIN_DECAY_FREQUENCY {
            1.0
        } else {
            0.5f32.powf(decay / frequency)
        }
    }

    /// Retune the string. The period glides to the new value over the
    /// smoothing time instead of jumping.
    pub fn set(&mut self, frequency: f32, decay: f32, smoothing: &SmootherConfig) {
        self.frequency = frequency;
        self.decay_mul = Self::decay_multiplier(frequency, decay);
        self.delay_time.push(Self::period(frequency), smoothing);
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn decay_mul(&self) -> f32 {
        self.decay_mul
    }

    pub fn reset(&mut self) {
        self.feedback = 0.0;
        self.decay_mul = 1.0;
        self.lowpass.reset();
        self.highpass.reset();
        self.delay.reset();
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.delay.set_time(self.delay_time.next_sample());
        let output = self.delay.process(input + self.feedback);
        self.feedback = self.lowpass.process(output) * self.decay_mul;
        self.highpass.process(output)
    }
}

//! Pick excitation: a cascade of short negative-feedback combs.
//!
//! ```text
//! Input ──▶ [Comb 1] ──▶ [Comb 2] ──▶ ... ──▶ [Comb 8] ──▶ Output
//! ```
//!
//! Each comb computes
//!
//! ```text
//! v[n] = x[n] - feedback * v[n - D]
//! y[n] = gain * v[n]
//! ```
//!
//! with `gain = -1`. Eight of them in series, each with its own randomized
//! delay of a couple of milliseconds, smear a single click into the dense,
//! slightly pitched transient of a stick hitting metal.

use crate::dsp::{
    delay::Delay,
    random::Random,
    smoother::{LinearSmoother, SmootherConfig},
};

pub const EXCITOR_COMBS: usize = 8;

/// Longest comb delay the ring can hold.
const MAX_COMB_TIME: f32 = 0.4;
const DEFAULT_COMB_TIME: f32 = 0.002;

#[derive(Debug, Clone)]
pub struct Comb {
    /// Cached random offset in `[0, 1]`, redrawn per strike.
    random: f32,
    buf: f32,
    gain: f32,
    feedback: f32,
    delay_time: LinearSmoother,
    delay: Delay,
}

impl Comb {
    pub fn new(sample_rate: f32, time: f32, gain: f32, feedback: f32) -> Self {
        Self {
            random: 0.0,
            buf: 0.0,
            gain,
            feedback,
            delay_time: LinearSmoother::new(time),
            delay: Delay::new(sample_rate, time, MAX_COMB_TIME),
        }
    }

    /// `random` in `[0, 1]`.
    pub fn trigger(&mut self, random: f32) {
        self.random = random;
    }

    /// Delay time is shortened by up to `random_amount` of itself, scaled by
    /// the cached random value.
    pub fn set(
        &mut self,
        time: f32,
        gain: f32,
        feedback: f32,
        random_amount: f32,
        smoothing: &SmootherConfig,
    ) {
        self.gain = gain;
        self.feedback = feedback;
        self.delay_time
            .push(time * (1.0 - random_amount * self.random), smoothing);
    }

    pub fn reset(&mut self) {
        self.delay.reset();
        self.buf = 0.0;
    }

    #[inline]
    pub fn process(&mut self, mut input: f32) -> f32 {
        self.delay.set_time(self.delay_time.next_sample());
        input -= self.feedback * self.buf;
        self.buf = self.delay.process(input);
        self.gain * input
    }
}

#[derive(Debug, Clone)]
pub struct Excitor {
    combs: [Comb; EXCITOR_COMBS],
}

impl Excitor {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            combs: std::array::from_fn(|_| Comb::new(sample_rate, DEFAULT_COMB_TIME, -1.0, 1.0)),
        }
    }

    /// Draw a fresh delay offset for every comb.
    pub fn trigger(&mut self, rng: &mut Random) {
        for comb in &mut self.combs {
            comb.trigger(rng.next_f32());
        }
    }

    pub fn set(
        &mut self,
        pick_comb_time: f32,
        pick_comb_feedback: f32,
        random_amount: f32,
        smoothing: &SmootherConfig,
    ) {
        for comb in &mut self.combs {
            comb.set(
                pick_comb_time,
                -1.0,
                pick_comb_feedback,
                random_amount,
                smoothing,
            );
        }
    }

    pub fn reset(&mut self) {
        for comb in &mut self.combs {
            comb.reset();
        }
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.combs
            .iter_mut()
            .fold(input, |signal, comb| comb.process(signal))
    }
}

//! One-dimensional wave equation on a ring lattice.
//!
//! The lattice is a closed loop of `length` nodes, advanced with the standard
//! explicit leapfrog scheme:
//!
//! ```text
//! u[t+1, i] = damping * (alpha * (u[t, i-1] + u[t, i+1]) + beta * u[t, i] - u[t-1, i])
//! ```
//!
//! `alpha = c²·dt²` is derived from a fixed wave speed, so it equals 0.5 at
//! 44.1 kHz and shrinks at higher rates. The scheme is stable while
//! `alpha <= 1`, which holds for every sample rate from 44.1 kHz up. There is
//! no runtime check or amplitude clamp: energy only leaves through
//! `damping < 1`, and anything coupled into the lattice from outside must
//! stay small.

use std::f32::consts::TAU;
use std::ops::{Index, IndexMut};

/// `c²` in nodes²/s², chosen so that `alpha = 0.5` at 44.1 kHz.
const WAVE_SPEED_SQUARED: f32 = 972_405_000.0;
/// Sample rate the damping parameter is calibrated at.
const REFERENCE_RATE: f32 = 44_100.0;
const MIN_PULSE_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct Wave1D {
    sample_rate: f32,
    length: usize,
    damping: f32,
    alpha: f32,
    beta: f32,
    pulse_position: usize,
    pulse_width: usize,

    /// Current state, `t`.
    wave0: Vec<f32>,
    /// `t - 1`.
    wave1: Vec<f32>,
    /// `t - 2`.
    wave2: Vec<f32>,
}

impl Wave1D {
    /// Allocates `max_length` nodes per snapshot. Nothing is allocated
    /// afterwards.
    pub fn new(sample_rate: f32, max_length: usize) -> Self {
        let max_length = max_length.max(1);
        let mut wave = Self {
            sample_rate,
            length: 1,
            damping: 0.0,
            alpha: 0.0,
            beta: 0.0,
            pulse_position: 0,
            pulse_width: MIN_PULSE_WIDTH,
            wave0: vec![0.0; max_length],
            wave1: vec![0.0; max_length],
            wave2: vec![0.0; max_length],
        };
        wave.set(max_length, 0.5, 0.5, 0.1);
        wave
    }

    /// - `length`: active node count, clamped to capacity (at least one node)
    /// - `damping`: in `[0, 1)`, per-sample loss calibrated at 44.1 kHz
    /// - `pulse_position`, `pulse_width`: fractions of the lattice length
    pub fn set(&mut self, length: usize, damping: f32, pulse_position: f32, pulse_width: f32) {
        self.length = length.clamp(1, self.capacity());

        self.damping = damping.max(0.0).powf(REFERENCE_RATE / self.sample_rate);

        let len = self.length as f32;
        self.pulse_position = ((pulse_position.max(0.0) * len) as usize).min(self.length - 1);
        self.pulse_width = ((pulse_width.max(0.0) * len) as usize).max(MIN_PULSE_WIDTH);

        self.alpha = WAVE_SPEED_SQUARED / (self.sample_rate * self.sample_rate);
        self.beta = 2.0 - 2.0 * self.alpha;
    }

    pub fn reset(&mut self) {
        self.wave0.fill(0.0);
        self.wave1.fill(0.0);
        self.wave2.fill(0.0);
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn capacity(&self) -> usize {
        self.wave0.len()
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Bounds-checked read; nodes outside the active length read as silence.
    pub fn get(&self, index: usize) -> f32 {
        if index < self.length {
            self.wave0[index]
        } else {
            0.0
        }
    }

    /// Active nodes of the current snapshot.
    pub fn nodes(&self) -> &[f32] {
        &self.wave0[..self.length]
    }

    /// Add a Hann-shaped bump of total height `height` centered on the pulse
    /// position, wrapping around the ring.
    pub fn pulse(&mut self, height: f32) {
        let length = self.length;
        let width = self.pulse_width;

        let start = self.pulse_position as isize - width.div_ceil(2) as isize;
        let mut index = start.rem_euclid(length as isize) as usize;

        // Peaks in the middle. A `cos(x - PI)` variant would invert the bump.
        let step = TAU / (width - 1) as f32;
        let gain = height / (width as f32 * 0.5);
        for i in 0..width {
            self.wave0[index] += gain * (1.0 - (step * i as f32).cos());
            index += 1;
            if index >= length {
                index = 0;
            }
        }
    }

    /// Advance the lattice by one time step.
    pub fn step(&mut self) {
        // Rotate snapshots: t-2 storage becomes the new t.
        std::mem::swap(&mut self.wave2, &mut self.wave1);
        std::mem::swap(&mut self.wave1, &mut self.wave0);

        let length = self.length;
        let last = length - 1;
        let (damping, alpha, beta) = (self.damping, self.alpha, self.beta);

        for i in 0..length {
            let left = if i == 0 { last } else { i - 1 };
            let right = if i == last { 0 } else { i + 1 };
            self.wave0[i] = damping
                * (alpha * (self.wave1[left] + self.wave1[right]) + beta * self.wave1[i]
                    - self.wave2[i]);
        }
    }

    #[inline]
    pub fn process(&mut self, input: f32) {
        if input != 0.0 {
            self.pulse(input);
        }
        self.step();
    }
}

impl Index<usize> for Wave1D {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.wave0[index]
    }
}

impl IndexMut<usize> for Wave1D {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.wave0[index]
    }
}

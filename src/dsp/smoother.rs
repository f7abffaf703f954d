//! Linear parameter smoothing.
//!
//! Parameters arrive once per audio block. Jumping straight to a new value
//! produces zipper noise, so each smoothed parameter ramps linearly toward its
//! target over a configurable time.
//!
//! The ramp time is shared by every smoother in an instrument. Rather than
//! hiding it in global state, it lives in a [`SmootherConfig`] that the owner
//! passes to [`LinearSmoother::push`] explicitly.

use crate::MIN_TIME;

/// Distance below which a smoother snaps onto its target.
const SNAP_EPSILON: f32 = 1e-5;

/// Shared timing context for a group of smoothers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherConfig {
    sample_rate: f32,
    time_in_samples: f32,
    buffer_size: f32,
}

impl SmootherConfig {
    /// `buffer_size` is the audio block length in samples. Ramps shorter than
    /// one block are pointless, so pushes within that window snap instantly.
    pub fn new(sample_rate: f32, time_seconds: f32, buffer_size: usize) -> Self {
        let mut config = Self {
            sample_rate,
            time_in_samples: 0.0,
            buffer_size: buffer_size as f32,
        };
        config.set_time(time_seconds);
        config
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.time_in_samples = seconds.max(MIN_TIME) * self.sample_rate;
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn time_in_samples(&self) -> f32 {
        self.time_in_samples
    }

    pub fn buffer_size(&self) -> f32 {
        self.buffer_size
    }

    fn snaps(&self) -> bool {
        self.time_in_samples < self.buffer_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSmoother {
    value: f32,
    target: f32,
    ramp: f32,
}

impl LinearSmoother {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            ramp: 0.0,
        }
    }

    /// Jump to `value` with no ramp.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.ramp = 0.0;
    }

    pub fn push(&mut self, target: f32, config: &SmootherConfig) {
        self.target = target;
        if config.snaps() {
            self.value = target;
            self.ramp = 0.0;
        } else {
            self.ramp = (target - self.value) / config.time_in_samples;
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.value += self.ramp;
        let overshot = (self.ramp > 0.0 && self.value > self.target)
            || (self.ramp < 0.0 && self.value < self.target);
        if overshot || (self.value - self.target).abs() < SNAP_EPSILON {
            self.value = self.target;
            self.ramp = 0.0;
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Default for LinearSmoother {
    fn default() -> Self {
        Self::new(0.0)
    }
}

//! Instrument parameters as pushed once per audio block.
//!
//! Values are in physical units (Hz, seconds, linear gain). Two fields keep
//! the host's 0-based integer convention: `n_cymbal` and `stack` count
//! *extra* plates and resonators, so `n_cymbal = 0` still plays one plate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cymbal::{CrossoverType, PlateParams};

/// Which excitation source drives the cymbal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscType {
    /// External input only.
    Off,
    /// One click per note-on.
    Impulse,
    /// Impulse train at the note frequency.
    #[default]
    Sustain,
    /// Random-sign sparse impulses, density follows the note frequency.
    Velvet,
    /// Random walk, step size follows the note frequency.
    Brown,
}

impl OscType {
    pub const ALL: [OscType; 5] = [
        OscType::Off,
        OscType::Impulse,
        OscType::Sustain,
        OscType::Velvet,
        OscType::Brown,
    ];

    /// Host-style integer parameter. Out-of-range indices fall back to
    /// `Impulse`.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => OscType::Off,
            1 => OscType::Impulse,
            2 => OscType::Sustain,
            3 => OscType::Velvet,
            4 => OscType::Brown,
            _ => OscType::Impulse,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Sources whose rate tracks the current note.
    pub fn is_pitched(self) -> bool {
        matches!(self, OscType::Sustain | OscType::Velvet | OscType::Brown)
    }

    pub fn name(self) -> &'static str {
        match self {
            OscType::Off => "off",
            OscType::Impulse => "impulse",
            OscType::Sustain => "sustain",
            OscType::Velvet => "velvet",
            OscType::Brown => "brown",
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// RNG seed for the per-strike fingerprint.
    pub seed: u32,
    /// How far random offsets pull frequencies and comb times, `[0, 1]`.
    pub random_amount: f32,
    /// Extra plates, `0..=3`.
    pub n_cymbal: u32,
    /// Extra resonators per plate, `0..=63`.
    pub stack: u32,
    /// Halvings per second of the string loop gain.
    pub decay: f32,
    /// Collision gap between adjacent plates.
    pub distance: f32,
    pub min_frequency: f32,
    pub max_frequency: f32,
    /// Bandpass bandwidth in octaves, `(0, 1]`.
    pub bandpass_q: f32,
    /// Lattice damping, `[0, 0.999]`.
    pub damping: f32,
    pub pulse_position: f32,
    pub pulse_width: f32,
    pub pick_comb_feedback: f32,
    /// Seconds.
    pub pick_comb_time: f32,
    /// Reseed on every strike so each hit sounds identical.
    pub retrigger: bool,
    pub cutoff_map: CrossoverType,
    /// Route the source through the pick combs.
    pub excitation: bool,
    pub collision: bool,
    pub osc_type: OscType,
    /// Parameter ramp time in seconds.
    pub smoothness: f32,
    /// Linear output gain.
    pub gain: f32,
    /// `0.5` is centre, `[0, 1]` spans ±200 cents.
    pub pitch_bend: f32,
}

impl Params {
    pub const MAX_N_CYMBAL: u32 = 3;
    pub const MAX_STACK: u32 = 63;
    pub const MAX_DAMPING: f32 = 0.999;

    /// Active plate count.
    pub fn cymbal_count(&self) -> usize {
        self.n_cymbal.min(Self::MAX_N_CYMBAL) as usize + 1
    }

    /// Active resonators per plate.
    pub fn stack_count(&self) -> usize {
        self.stack.min(Self::MAX_STACK) as usize + 1
    }

    pub fn plate_params(&self) -> PlateParams {
        PlateParams {
            stack: self.stack_count(),
            min_frequency: self.min_frequency,
            max_frequency: self.max_frequency,
            damping: self.damping.clamp(0.0, Self::MAX_DAMPING),
            pulse_position: self.pulse_position,
            pulse_width: self.pulse_width,
            decay: self.decay,
            bandpass_q: self.bandpass_q,
            crossover: self.cutoff_map,
            random_amount: self.random_amount,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            seed: 6_583_421,
            random_amount: 1.0,
            n_cymbal: 1,
            stack: 24,
            decay: 1.0,
            distance: 0.5,
            min_frequency: 200.0,
            max_frequency: 2_000.0,
            bandpass_q: 0.5,
            damping: 0.5,
            pulse_position: 0.5,
            pulse_width: 0.5,
            pick_comb_feedback: 0.3,
            pick_comb_time: 0.002,
            retrigger: false,
            cutoff_map: CrossoverType::Log,
            excitation: true,
            collision: true,
            osc_type: OscType::Sustain,
            smoothness: 0.04,
            gain: 0.5,
            pitch_bend: 0.5,
        }
    }
}

use crate::dsp::{
    filter::BiquadBandpass,
    ks_string::KsString,
    random::Random,
    smoother::SmootherConfig,
    wave::Wave1D,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest and highest edge of the bandpass crossover ladder.
const LADDER_LOW: f32 = 20.0;
const LADDER_HIGH: f32 = 20_000.0;

/// Resonator output is fed back into the lattice scaled by
/// `1 / (stack * FEEDBACK_DIVISOR)`.
const FEEDBACK_DIVISOR: f32 = 1024.0;

/// How the bandpass centers are spread across the audio band.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverType {
    #[default]
    Log,
    Linear,
}

impl CrossoverType {
    /// Host-style integer parameter: `0 = log`, anything else `linear`.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => CrossoverType::Log,
            _ => CrossoverType::Linear,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CrossoverType::Log => "log",
            CrossoverType::Linear => "linear",
        }
    }

    /// Upper edge of band `index` out of `bands`.
    pub fn frequency(self, low: f32, high: f32, index: usize, bands: usize) -> f32 {
        let ratio = index as f32 / bands as f32;
        match self {
            CrossoverType::Linear => low + (high - low) * ratio,
            CrossoverType::Log => ((high / low).ln() * ratio + low.ln()).exp(),
        }
    }
}

/// Everything a plate needs per block, shared by every plate in a hat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    /// Active resonator count, also the lattice length.
    pub stack: usize,
    pub min_frequency: f32,
    /// Width of the string frequency range above `min_frequency`.
    pub max_frequency: f32,
    pub damping: f32,
    pub pulse_position: f32,
    pub pulse_width: f32,
    pub decay: f32,
    pub bandpass_q: f32,
    pub crossover: CrossoverType,
    pub random_amount: f32,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            stack: 25,
            min_frequency: 200.0,
            max_frequency: 2_000.0,
            damping: 0.5,
            pulse_position: 0.5,
            pulse_width: 0.5,
            decay: 1.0,
            bandpass_q: 0.5,
            crossover: CrossoverType::Log,
            random_amount: 1.0,
        }
    }
}

/// One cymbal "plate": a wave lattice whose nodes each drive a
/// bandpass → Karplus-Strong pair.
///
/// ```text
///          ┌──────────── rendered / (stack·1024) ◀─────────────┐
///          ▼                                                   │
/// input ─▶ lattice[i] ──▶ [Bandpass i] ──▶ [KsString i] ──┬────┘
///                                                         └──▶ Σ output
/// ```
///
/// The lattice itself is never heard; it only spreads the strike across the
/// resonators and lets them leak energy into each other.
#[derive(Debug, Clone)]
pub struct WaveString {
    stack: usize,
    wave: Wave1D,
    strings: Vec<KsString>,
    string_rnd: Vec<f32>,
    bandpasses: Vec<BiquadBandpass>,
    bandpass_rnd: Vec<f32>,
}

impl WaveString {
    pub fn new(sample_rate: f32, max_stack: usize) -> Self {
        let max_stack = max_stack.max(1);
        Self {
            stack: max_stack,
            wave: Wave1D::new(sample_rate, max_stack),
            strings: (0..max_stack)
                .map(|_| KsString::new(sample_rate, 100.0, 0.5))
                .collect(),
            string_rnd: vec![1.0; max_stack],
            bandpasses: (0..max_stack)
                .map(|_| BiquadBandpass::new(sample_rate))
                .collect(),
            bandpass_rnd: vec![1.0; max_stack],
        }
    }

    pub fn capacity(&self) -> usize {
        self.strings.len()
    }

    pub fn stack(&self) -> usize {
        self.stack
    }

    pub fn wave(&self) -> &Wave1D {
        &self.wave
    }

    pub fn wave_mut(&mut self) -> &mut Wave1D {
        &mut self.wave
    }

    pub fn string_frequency(&self, index: usize) -> f32 {
        self.strings[index].frequency()
    }

    pub fn bandpass_cutoff(&self, index: usize) -> f32 {
        self.bandpasses[index].cutoff_hz()
    }

    /// Redraw the per-resonator random offsets. Takes effect on the next
    /// [`WaveString::set`].
    pub fn trigger(&mut self, rng: &mut Random) {
        for random in &mut self.string_rnd {
            *random = rng.next_f32();
        }
        for random in &mut self.bandpass_rnd {
            *random = rng.next_f32();
        }
    }

    pub fn set(&mut self, params: &PlateParams, smoothing: &SmootherConfig) {
        self.stack = params.stack.min(self.capacity());

        self.wave.set(
            self.stack,
            params.damping,
            params.pulse_position,
            params.pulse_width,
        );

        let mut low = LADDER_LOW;
        for i in 0..self.stack {
            let frequency = (1.0 - params.random_amount * self.string_rnd[i])
                * params.max_frequency
                + params.min_frequency;
            self.strings[i].set(frequency, params.decay, smoothing);

            let high = params
                .crossover
                .frequency(LADDER_LOW, LADDER_HIGH, i + 1, self.stack);
            let cutoff = low + (high - low) * (1.0 - params.random_amount * self.bandpass_rnd[i]);
            self.bandpasses[i].set_cutoff_q(cutoff, params.bandpass_q);
            low = high;
        }
    }

    pub fn reset(&mut self) {
        self.wave.reset();
        for string in &mut self.strings {
            string.reset();
        }
        for bandpass in &mut self.bandpasses {
            bandpass.reset();
        }
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.wave.process(input);

        let denominator = self.stack as f32 * FEEDBACK_DIVISOR;
        let mut output = 0.0;
        for i in 0..self.stack {
            let rendered = self.strings[i].process(self.bandpasses[i].process(self.wave[i]));
            self.wave[i] += rendered / denominator;
            output += rendered;
        }
        output
    }
}

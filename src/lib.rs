pub mod cymbal; // Plates, resonator banks and collision
pub mod dsp; // Filters, delays, lattices and excitation sources
pub mod io;
pub mod synth; // Notes, parameters and the message-driven instrument

pub use cymbal::{CrossoverType, WaveHat, WaveString};
pub use synth::{CymbalSynth, DspCore, MessageReceiver, OscType, Params, SynthMessage};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;

/// Host audio settings, fixed between calls to [`DspCore::setup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    /// Expected host block size. Parameter ramps shorter than one block snap
    /// straight to their target.
    pub block_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            block_size: 512,
        }
    }
}

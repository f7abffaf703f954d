use tracing::debug;

use crate::{
    cymbal::WaveHat,
    dsp::{
        comb::Excitor,
        oscillator::{BrownNoise, Pulsar, VelvetNoise},
        random::Random,
        smoother::{LinearSmoother, SmootherConfig},
    },
    synth::{
        note::{midi_note_to_frequency, pitch_bend_ratio, NoteInfo, NoteStack},
        params::{OscType, Params},
    },
    EngineConfig,
};

const VELVET_SEED: u32 = 0;
const BROWN_SEED: i32 = 0;

/// Monophonic cymbal voice: excitation → pick combs → plates → gain.
///
/// The physical model is shared by every held note. Notes only decide when
/// the cymbal is struck and what rate the pitched excitation sources run at.
///
/// Call [`DspCore::set_parameters`] once per block, then
/// [`DspCore::process`] for that block. Nothing allocates after
/// construction.
#[derive(Debug, Clone)]
pub struct DspCore {
    config: EngineConfig,
    smoothing: SmootherConfig,
    params: Params,
    notes: NoteStack,
    /// Set by note-on, consumed by the next `set_parameters`.
    trigger: bool,
    rng: Random,

    pulsar: Pulsar,
    velvet: VelvetNoise,
    brown: BrownNoise,
    excitor: Excitor,
    cymbal: WaveHat,

    master_gain: LinearSmoother,
    pitch: LinearSmoother,
}

impl DspCore {
    pub fn new(config: EngineConfig, params: Params) -> Self {
        let sample_rate = config.sample_rate;
        debug!(
            sample_rate,
            block_size = config.block_size,
            "setting up cymbal core"
        );

        let mut core = Self {
            config,
            smoothing: SmootherConfig::new(sample_rate, params.smoothness, config.block_size),
            params,
            notes: NoteStack::new(),
            trigger: false,
            rng: Random::new(params.seed),
            pulsar: Pulsar::new(sample_rate, 0.0),
            velvet: VelvetNoise::new(sample_rate, 0.0, VELVET_SEED),
            brown: BrownNoise::new(BROWN_SEED),
            excitor: Excitor::new(sample_rate),
            cymbal: WaveHat::new(sample_rate),
            master_gain: LinearSmoother::new(params.gain),
            pitch: LinearSmoother::new(0.0),
        };
        core.set_system();
        core.startup();
        core
    }

    /// Rebuild every buffer for a new sample rate. Held notes are dropped.
    pub fn setup(&mut self, config: EngineConfig) {
        *self = Self::new(config, self.params);
    }

    /// Silence the model and reseed the RNG without reallocating.
    pub fn reset(&mut self) {
        debug!(seed = self.params.seed, "resetting cymbal core");
        self.cymbal.reset();
        self.excitor.reset();
        self.startup();
    }

    fn startup(&mut self) {
        self.rng.reseed(self.params.seed);
    }

    fn set_system(&mut self) {
        let params = &self.params;
        self.excitor.set(
            params.pick_comb_time,
            params.pick_comb_feedback,
            params.random_amount,
            &self.smoothing,
        );
        self.cymbal.set(
            params.cymbal_count(),
            params.distance,
            &params.plate_params(),
            &self.smoothing,
        );
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn notes(&self) -> &NoteStack {
        &self.notes
    }

    pub fn is_sounding(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn cymbal(&self) -> &WaveHat {
        &self.cymbal
    }

    /// Apply a block's worth of parameters. A pending strike is resolved here:
    /// the excitor and plates draw a fresh random fingerprint.
    pub fn set_parameters(&mut self, params: &Params) {
        self.params = *params;
        self.smoothing.set_time(params.smoothness);

        self.master_gain.push(params.gain, &self.smoothing);

        if self.trigger {
            self.trigger = false;
            if params.retrigger {
                self.rng.reseed(params.seed);
            }
            self.excitor.trigger(&mut self.rng);
            self.cymbal.trigger(&mut self.rng);
        }

        self.set_system();

        match self.notes.last() {
            Some(note) if params.osc_type.is_pitched() => {
                let frequency = note.frequency * pitch_bend_ratio(params.pitch_bend);
                self.pitch.push(frequency, &self.smoothing);
                self.velvet.set_density(frequency);
            }
            _ => {
                self.pulsar.set_frequency(0.0);
                self.velvet.set_density(0.0);
                self.pitch.push(0.0, &self.smoothing);
            }
        }
    }

    pub fn note_on(&mut self, id: i32, pitch: i16, tuning: f32, velocity: f32) {
        self.trigger = true;
        self.pulsar.set_phase(1.0);
        self.velvet.set_phase(1.0);

        self.notes.push(NoteInfo {
            id,
            frequency: midi_note_to_frequency(pitch, tuning),
            velocity,
        });
    }

    /// Unknown ids are ignored.
    pub fn note_off(&mut self, id: i32) {
        if !self.notes.remove(id) {
            return;
        }
        if self.notes.is_empty() {
            self.pulsar.reset();
        }
    }

    pub fn all_notes_off(&mut self) {
        self.notes.clear();
        self.pulsar.reset();
    }

    /// Render `out0.len().min(out1.len())` samples. The two inputs are summed
    /// into the excitation; missing input samples count as silence.
    pub fn process(&mut self, in0: &[f32], in1: &[f32], out0: &mut [f32], out1: &mut [f32]) {
        let excitation = self.params.excitation;
        let collision = self.params.collision;
        let osc_type = self.params.osc_type;
        let sample_rate = self.config.sample_rate;

        for (i, (left, right)) in out0.iter_mut().zip(out1.iter_mut()).enumerate() {
            let external =
                in0.get(i).copied().unwrap_or(0.0) + in1.get(i).copied().unwrap_or(0.0);
            let pitch = self.pitch.next_sample();

            let source = match osc_type {
                OscType::Off => 0.0,
                OscType::Impulse => self.pulsar.next_sample(),
                OscType::Sustain => {
                    self.pulsar.set_frequency(pitch);
                    self.pulsar.next_sample()
                }
                OscType::Velvet => self.velvet.next_sample(),
                OscType::Brown => {
                    self.brown.set_drift(2.0 * pitch / sample_rate);
                    self.brown.next_sample()
                }
            };

            let mut sample = source + external;
            if excitation {
                sample = self.excitor.process(sample);
            }
            sample = self.cymbal.process(sample, collision);

            let gain = self.master_gain.next_sample();
            *left = gain * sample;
            *right = gain * sample;
        }
    }

    /// [`DspCore::process`] with no external input.
    pub fn render(&mut self, out0: &mut [f32], out1: &mut [f32]) {
        self.process(&[], &[], out0, out1);
    }
}

use crate::{
    synth::{
        core::DspCore,
        message::{MessageReceiver, SynthMessage},
        params::Params,
    },
    EngineConfig, MAX_BLOCK_SIZE,
};

/// A [`DspCore`] driven by a message queue.
///
/// Messages are drained at the start of every [`CymbalSynth::render_block`],
/// so note and parameter changes land on block boundaries. Blocks longer than
/// [`MAX_BLOCK_SIZE`] are split, with parameters re-applied per chunk.
///
/// Once a [`SynthMessage::PitchBend`] has arrived, the bend belongs to the
/// message stream: later [`SynthMessage::SetParams`] keep it instead of
/// resetting it to their own `pitch_bend`.
pub struct CymbalSynth<R: MessageReceiver> {
    core: DspCore,
    params: Params,
    /// Last bend received as a message.
    pitch_bend: Option<f32>,
    rx: R,
}

impl<R: MessageReceiver> CymbalSynth<R> {
    pub fn new(config: EngineConfig, params: Params, rx: R) -> Self {
        Self {
            core: DspCore::new(config, params),
            params,
            pitch_bend: None,
            rx,
        }
    }

    pub fn core(&self) -> &DspCore {
        &self.core
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    fn handle(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn {
                id,
                pitch,
                tuning,
                velocity,
            } => self.core.note_on(id, pitch, tuning, velocity),
            SynthMessage::NoteOff { id } => self.core.note_off(id),
            SynthMessage::PitchBend { value } => {
                let value = value.clamp(0.0, 1.0);
                self.pitch_bend = Some(value);
                self.params.pitch_bend = value;
            }
            SynthMessage::SetParams(params) => {
                self.params = params;
                if let Some(bend) = self.pitch_bend {
                    self.params.pitch_bend = bend;
                }
            }
            SynthMessage::AllNotesOff => self.core.all_notes_off(),
            SynthMessage::Reset => self.core.reset(),
        }
    }

    pub fn render_block(&mut self, out0: &mut [f32], out1: &mut [f32]) {
        while let Some(msg) = self.rx.pop() {
            self.handle(msg);
        }

        let len = out0.len().min(out1.len());
        let mut start = 0;
        while start < len {
            let end = (start + MAX_BLOCK_SIZE).min(len);
            self.core.set_parameters(&self.params);
            self.core.render(&mut out0[start..end], &mut out1[start..end]);
            start = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::synth::params::OscType;

    fn params() -> Params {
        Params {
            n_cymbal: 0,
            stack: 7,
            osc_type: OscType::Impulse,
            ..Params::default()
        }
    }

    #[test]
    fn test_messages_drive_core() {
        let mut queue = VecDeque::new();
        queue.push_back(SynthMessage::NoteOn {
            id: 3,
            pitch: 60,
            tuning: 0.0,
            velocity: 1.0,
        });
        let mut synth = CymbalSynth::new(EngineConfig::default(), params(), queue);

        let mut left = vec![0.0; 2048];
        let mut right = vec![0.0; 2048];
        synth.render_block(&mut left, &mut right);
        assert!(synth.core().is_sounding());
        assert!(left.iter().any(|x| x.abs() > 1e-6));

        synth.receiver_mut().push_back(SynthMessage::NoteOff { id: 3 });
        synth.render_block(&mut left, &mut right);
        assert!(!synth.core().is_sounding());
    }

    #[test]
    fn test_pitch_bend_and_params_update() {
        let mut queue = VecDeque::new();
        queue.push_back(SynthMessage::SetParams(Params {
            gain: 0.1,
            ..params()
        }));
        queue.push_back(SynthMessage::PitchBend { value: 2.0 });
        let mut synth = CymbalSynth::new(EngineConfig::default(), params(), queue);

        let mut left = vec![0.0; 64];
        let mut right = vec![0.0; 64];
        synth.render_block(&mut left, &mut right);

        assert_eq!(synth.params().gain, 0.1);
        assert_eq!(synth.params().pitch_bend, 1.0);
        assert_eq!(synth.core().params().gain, 0.1);
    }

    #[test]
    fn test_params_update_keeps_received_pitch_bend() {
        let mut queue = VecDeque::new();
        queue.push_back(SynthMessage::PitchBend { value: 1.0 });
        let mut synth = CymbalSynth::new(EngineConfig::default(), params(), queue);

        let mut left = vec![0.0; 64];
        let mut right = vec![0.0; 64];
        synth.render_block(&mut left, &mut right);
        assert_eq!(synth.core().params().pitch_bend, 1.0);

        // A knob edit carrying the default centred bend.
        synth.receiver_mut().push_back(SynthMessage::SetParams(Params {
            gain: 0.3,
            ..Params::default()
        }));
        synth.render_block(&mut left, &mut right);

        assert_eq!(synth.core().params().gain, 0.3);
        assert_eq!(synth.core().params().pitch_bend, 1.0);

        synth
            .receiver_mut()
            .push_back(SynthMessage::PitchBend { value: 0.25 });
        synth.render_block(&mut left, &mut right);
        assert_eq!(synth.core().params().pitch_bend, 0.25);
    }

    #[test]
    fn test_long_block_is_split() {
        let mut queue = VecDeque::new();
        queue.push_back(SynthMessage::NoteOn {
            id: 1,
            pitch: 60,
            tuning: 0.0,
            velocity: 1.0,
        });
        let mut synth = CymbalSynth::new(EngineConfig::default(), params(), queue);

        let len = MAX_BLOCK_SIZE * 2 + 17;
        let mut left = vec![0.0; len];
        let mut right = vec![0.0; len];
        synth.render_block(&mut left, &mut right);

        assert_eq!(left, right);
        assert!(left.iter().all(|x| x.is_finite()));
        assert!(left[MAX_BLOCK_SIZE * 2..].iter().any(|x| x.abs() > 0.0));
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn test_rtrb_consumer_as_receiver() {
        let (mut tx, rx) = rtrb::RingBuffer::<SynthMessage>::new(16);
        let mut synth = CymbalSynth::new(EngineConfig::default(), params(), rx);

        tx.push(SynthMessage::NoteOn {
            id: 9,
            pitch: 64,
            tuning: 0.0,
            velocity: 0.5,
        })
        .unwrap();

        let mut left = vec![0.0; 128];
        let mut right = vec![0.0; 128];
        synth.render_block(&mut left, &mut right);
        assert_eq!(synth.core().notes().len(), 1);

        tx.push(SynthMessage::AllNotesOff).unwrap();
        synth.render_block(&mut left, &mut right);
        assert!(!synth.core().is_sounding());
    }
}

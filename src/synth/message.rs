#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use std::collections::VecDeque;

use crate::synth::params::Params;

/// Control messages sent from the UI/MIDI thread to the audio thread.
#[derive(Debug, Copy, Clone)]
pub enum SynthMessage {
    NoteOn {
        id: i32,
        pitch: i16,
        /// Cents added on top of `pitch`.
        tuning: f32,
        velocity: f32,
    },
    NoteOff {
        id: i32,
    },
    /// Normalized, `0.5` is centre.
    PitchBend {
        value: f32,
    },
    SetParams(Params),
    AllNotesOff,
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering: queue everything up front.
impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}

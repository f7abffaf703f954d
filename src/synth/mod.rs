// Purpose: note handling, parameters and the message-driven instrument
// This layer sits above the cymbal model and turns notes into strikes

pub mod core;
pub mod instrument;
pub mod message;
pub mod note;
pub mod params;

pub use self::core::DspCore;
pub use instrument::CymbalSynth;
pub use message::{MessageReceiver, SynthMessage};
pub use note::{midi_note_to_frequency, pitch_bend_ratio, NoteInfo, NoteStack};
pub use params::{OscType, Params};

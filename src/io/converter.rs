use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// Centre of the 14-bit pitch bend range once shifted to signed.
const PITCH_BEND_CENTER: f32 = 8192.0;

/// Map a MIDI event on `channel_filter` to a synth message.
///
/// Host-facing: a plugin wrapper or MIDI input thread calls this and pushes
/// the result into the [`CymbalSynth`](crate::synth::CymbalSynth) queue.
///
/// Note ids are the MIDI key, so a note-off always finds its note-on.
/// A note-on with zero velocity is a note-off.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    if midi.channel() != channel_filter {
        return None;
    }

    match midi {
        MidiEvent::NoteOn { key, velocity, .. } if velocity > 0 => Some(SynthMessage::NoteOn {
            id: key as i32,
            pitch: key as i16,
            tuning: 0.0,
            velocity: velocity as f32 / 127.0,
        }),
        MidiEvent::NoteOn { key, .. } | MidiEvent::NoteOff { key, .. } => {
            Some(SynthMessage::NoteOff { id: key as i32 })
        }
        MidiEvent::PitchBend { value, .. } => Some(SynthMessage::PitchBend {
            value: pitch_bend_to_normalized(value),
        }),
        MidiEvent::ControlChange { .. } | MidiEvent::ProgramChange { .. } => None,
    }
}

/// `-8192..=8191` to `[0, 1]`, centre at `0.5`.
pub fn pitch_bend_to_normalized(value: i16) -> f32 {
    ((value as f32 + PITCH_BEND_CENTER) / (2.0 * PITCH_BEND_CENTER)).clamp(0.0, 1.0)
}

/// A held note.
///
/// Velocity is kept for hosts that read it back; the model itself strikes at
/// a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteInfo {
    pub id: i32,
    pub frequency: f32,
    pub velocity: f32,
}

/// Convert a MIDI note plus tuning in cents to Hz.
/// A4 = 440 Hz = MIDI note 69
#[inline]
pub fn midi_note_to_frequency(pitch: i16, tuning_cents: f32) -> f32 {
    440.0 * 2.0f32.powf(((pitch as f32 - 69.0) * 100.0 + tuning_cents) / 1200.0)
}

/// Normalized bend in `[0, 1]` to a frequency ratio, ±200 cents around 0.5.
#[inline]
pub fn pitch_bend_ratio(bend: f32) -> f32 {
    2.0f32.powf(((bend - 0.5) * 400.0) / 1200.0)
}

/// Held notes, newest last.
///
/// Capacity is reserved up front; when it is full the oldest note is
/// dropped so `push` never reallocates on the audio thread.
#[derive(Debug, Clone)]
pub struct NoteStack {
    notes: Vec<NoteInfo>,
}

impl NoteStack {
    pub const CAPACITY: usize = 128;

    pub fn new() -> Self {
        Self {
            notes: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub fn push(&mut self, note: NoteInfo) {
        if self.notes.len() >= Self::CAPACITY {
            self.notes.remove(0);
        }
        self.notes.push(note);
    }

    /// Remove the first note with `id`. Returns false if none matched.
    pub fn remove(&mut self, id: i32) -> bool {
        match self.notes.iter().position(|note| note.id == id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn last(&self) -> Option<&NoteInfo> {
        self.notes.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteInfo> {
        self.notes.iter()
    }
}

impl Default for NoteStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i32) -> NoteInfo {
        NoteInfo {
            id,
            frequency: 440.0,
            velocity: 1.0,
        }
    }

    #[test]
    fn test_midi_note_to_frequency() {
        assert!((midi_note_to_frequency(69, 0.0) - 440.0).abs() < 1e-3);
        assert!((midi_note_to_frequency(81, 0.0) - 880.0).abs() < 1e-2);
        assert!((midi_note_to_frequency(60, 0.0) - 261.63).abs() < 0.01);
        // 100 cents up is one semitone
        assert!((midi_note_to_frequency(60, 100.0) - midi_note_to_frequency(61, 0.0)).abs() < 1e-2);
    }

    #[test]
    fn test_pitch_bend_ratio() {
        assert_eq!(pitch_bend_ratio(0.5), 1.0);
        let up = pitch_bend_ratio(1.0);
        assert!((up - 2.0f32.powf(200.0 / 1200.0)).abs() < 1e-6);
        assert!(pitch_bend_ratio(0.0) < 1.0);
    }

    #[test]
    fn test_remove_matching_id() {
        let mut stack = NoteStack::new();
        stack.push(note(1));
        stack.push(note(2));
        stack.push(note(3));

        assert!(stack.remove(2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.last().map(|n| n.id), Some(3));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut stack = NoteStack::new();
        stack.push(note(1));
        assert!(!stack.remove(42));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_full_stack_drops_oldest() {
        let mut stack = NoteStack::new();
        for id in 0..(NoteStack::CAPACITY as i32 + 5) {
            stack.push(note(id));
        }
        assert_eq!(stack.len(), NoteStack::CAPACITY);
        assert_eq!(stack.iter().next().map(|n| n.id), Some(5));
    }
}

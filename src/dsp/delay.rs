//! Fractional delay line with 2x oversampled storage.
//!
//! Each call to [`Delay::process`] writes two samples into the ring: a
//! midpoint interpolated between the previous and current input, then the
//! input itself. Reads advance two slots per call and interpolate linearly
//! between them. Callers see a plain 1x interface, while the extra resolution
//! keeps short, rapidly modulated delays (Karplus-Strong periods, pick combs)
//! from sounding grainy.
//!
//! ```text
//!   write ──▶ [ mid | x | mid | x | ... ] ◀── read (trails by 2·fs·time)
//! ```

/// Upper bound on ring length, guarding `2 * sample_rate * max_time`
/// against overflow.
const MAX_BUFFER_LEN: usize = i32::MAX as usize;

#[derive(Debug, Clone)]
pub struct Delay {
    buffer: Vec<f32>,
    /// Oversampled rate, `2 * sample_rate`.
    rate: f32,
    fraction: f32,
    previous_input: f32,
    write_pos: usize,
    read_pos: usize,
}

impl Delay {
    /// Allocate a ring large enough for `max_time` seconds and set the
    /// initial delay to `time`.
    pub fn new(sample_rate: f32, time: f32, max_time: f32) -> Self {
        let rate = 2.0 * sample_rate;
        let size = (rate * max_time.max(0.0)) as usize;
        let len = if size >= MAX_BUFFER_LEN {
            MAX_BUFFER_LEN
        } else {
            size + 1
        };

        let mut delay = Self {
            buffer: vec![0.0; len],
            rate,
            fraction: 0.0,
            previous_input: 0.0,
            write_pos: 0,
            read_pos: 0,
        };
        delay.set_time(time);
        delay
    }

    /// Reposition the read pointer. Times beyond capacity are clamped.
    pub fn set_time(&mut self, seconds: f32) {
        let len = self.buffer.len();
        let max_samples = (len - 1) as f32;
        let time_in_samples = (self.rate * seconds).clamp(0.0, max_samples);

        let whole = time_in_samples as usize;
        self.fraction = time_in_samples - whole as f32;
        self.read_pos = (self.write_pos + len - whole) % len;
    }

    /// Current delay in seconds, measured from the pointer distance.
    pub fn time(&self) -> f32 {
        let len = self.buffer.len();
        let distance = (self.write_pos + len - self.read_pos) % len;
        distance as f32 / self.rate
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.previous_input = 0.0;
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let len = self.buffer.len();

        self.buffer[self.write_pos] = input - 0.5 * (input - self.previous_input);
        self.write_pos = (self.write_pos + 1) % len;
        self.buffer[self.write_pos] = input;
        self.write_pos = (self.write_pos + 1) % len;
        self.previous_input = input;

        let i1 = self.read_pos;
        self.read_pos = (self.read_pos + 1) % len;
        let i0 = self.read_pos;
        self.read_pos = (self.read_pos + 1) % len;

        self.buffer[i0] - self.fraction * (self.buffer[i0] - self.buffer[i1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse_arrival(delay: &mut Delay, max_samples: usize) -> Option<usize> {
        (0..max_samples).position(|i| {
            let input = if i == 0 { 1.0 } else { 0.0 };
            delay.process(input).abs() > 0.4
        })
    }

    #[test]
    fn test_impulse_arrives_after_delay() {
        // 10 samples at 48kHz
        let mut delay = Delay::new(48_000.0, 10.0 / 48_000.0, 0.1);
        let arrival = impulse_arrival(&mut delay, 100);
        assert_eq!(arrival, Some(10));
    }

    #[test]
    fn test_time_reports_setting() {
        let mut delay = Delay::new(44_100.0, 0.0, 0.5);
        delay.set_time(0.25);
        assert!((delay.time() - 0.25).abs() < 1e-4, "got {}", delay.time());
    }

    #[test]
    fn test_excessive_time_is_clamped() {
        let mut delay = Delay::new(48_000.0, 0.001, 0.01);
        let capacity = delay.capacity();
        delay.set_time(1.0e6);

        for i in 0..(capacity * 3) {
            let out = delay.process((i as f32 * 0.1).sin());
            assert!(out.is_finite());
        }
        assert!(delay.time() <= capacity as f32 / 96_000.0);
    }

    #[test]
    fn test_negative_time_is_clamped_to_zero() {
        let mut delay = Delay::new(48_000.0, 0.01, 0.1);
        delay.set_time(-5.0);
        assert_eq!(delay.time(), 0.0);
        let out = delay.process(1.0);
        assert!((out - 1.0).abs() < 1e-6, "zero delay should pass input, got {}", out);
    }

    #[test]
    fn test_reset_silences_buffer() {
        let mut delay = Delay::new(48_000.0, 0.001, 0.01);
        for _ in 0..200 {
            delay.process(1.0);
        }
        delay.reset();
        for _ in 0..200 {
            assert_eq!(delay.process(0.0), 0.0);
        }
    }
}

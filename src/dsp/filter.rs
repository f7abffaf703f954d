use std::f32::consts::TAU;

/*
| type            | role in the cymbal                         | stability        |
| --------------- | ------------------------------------------ | ---------------- |
| OneZeroLowpass  | damping inside the Karplus-Strong loop     | FIR, always      |
| RcHighpass      | DC blocker on Karplus-Strong output        | pole at alpha    |
| BiquadBandpass  | picks one band of the lattice per string   | self-resetting   |
*/

/// One-zero lowpass, `y = b1 * (x - x[n-1]) + x[n-1]`.
///
/// With `b1 = 0.5` this is a two-tap average: unity gain at DC and a zero at
/// Nyquist, which is what gives plucked strings their darkening decay.
#[derive(Debug, Clone, Copy)]
pub struct OneZeroLowpass {
    b1: f32,
    z1: f32,
}

impl OneZeroLowpass {
    /// `b1` in `[-1, 1]`.
    pub fn new(b1: f32) -> Self {
        Self { b1, z1: 0.0 }
    }

    pub fn reset(&mut self) {
        self.z1 = 0.0;
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b1 * (input - self.z1) + self.z1;
        self.z1 = input;
        output
    }
}

/// Discrete RC highpass. `alpha` is the smoothing factor.
#[derive(Debug, Clone, Copy)]
pub struct RcHighpass {
    alpha: f32,
    y: f32,
    z1: f32,
}

impl RcHighpass {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            y: 0.0,
            z1: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
        self.z1 = 0.0;
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.y = self.alpha * self.y + self.alpha * (input - self.z1);
        self.z1 = input;
        self.y
    }
}

/// Bandpass biquad from the RBJ cookbook, bandwidth form with unity peak gain.
///
/// If the output ever goes non-finite the state is cleared and `0.0` is
/// returned, so a blow-up costs one silent sample instead of poisoning the
/// whole resonator bank.
#[derive(Debug, Clone, Copy)]
pub struct BiquadBandpass {
    sample_rate: f32,
    cutoff_hz: f32,
    q: f32,

    b0: f32,
    b1: f32,
    b2: f32,
    a0: f32,
    a1: f32,
    a2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl BiquadBandpass {
    pub const MIN_CUTOFF: f32 = 20.0;
    pub const MAX_CUTOFF: f32 = 20_000.0;
    pub const MIN_Q: f32 = 1e-5;
    pub const MAX_Q: f32 = 1.0;

    /// Starts with all-zero coefficients (silent) until `set_cutoff_q`.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            cutoff_hz: 100.0,
            q: 0.5,
            b0: 0.0,
            b1: 0.0,
            b2: 0.0,
            a0: 1.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Zero both coefficients and state.
    pub fn reset(&mut self) {
        self.a0 = 1.0;
        self.b0 = 0.0;
        self.b1 = 0.0;
        self.b2 = 0.0;
        self.a1 = 0.0;
        self.a2 = 0.0;
        self.clear();
    }

    /// Zero the state, keeping coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    pub fn set_cutoff_q(&mut self, hz: f32, q: f32) {
        self.cutoff_hz = hz.clamp(Self::MIN_CUTOFF, Self::MAX_CUTOFF);
        self.q = q.clamp(Self::MIN_Q, Self::MAX_Q);

        let w0 = TAU * self.cutoff_hz / self.sample_rate;
        let (sin_w0, cos_w0) = w0.sin_cos();

        // ln(2) / 2: maps q (in octaves of bandwidth) through sinh so the
        // response stays well-conditioned near both ends of the q range.
        let alpha = sin_w0 * (std::f32::consts::LN_2 * 0.5 * self.q * w0 / sin_w0).sinh();

        self.b0 = alpha;
        self.b1 = 0.0;
        self.b2 = -alpha;
        self.a0 = 1.0 + alpha;
        self.a1 = -2.0 * cos_w0;
        self.a2 = 1.0 - alpha;
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn q(&self) -> f32 {
        self.q
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = (self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2)
            / self.a0;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        if output.is_finite() {
            return output;
        }
        self.clear();
        0.0
    }
}

use crate::cymbal::string::{PlateParams, WaveString};
use crate::dsp::{random::Random, smoother::SmootherConfig, wave::Wave1D};

/// Collision gap is given in lattice units of `1 / GAP_DIVISOR`.
const GAP_DIVISOR: f32 = 1024.0;

/// A stack of up to [`WaveHat::MAX_CYMBAL`] plates that can clash.
///
/// Adjacent plates are treated as surfaces `distance / 1024` apart. After
/// every sample, wherever plate `i` has passed through plate `i + 1`, the
/// node of plate `i` is flipped. This is a single forward pass per sample and
/// does not conserve energy; it only has to sound like metal rattling.
#[derive(Debug, Clone)]
pub struct WaveHat {
    n_cymbal: usize,
    distance: f32,
    plates: Vec<WaveString>,
}

impl WaveHat {
    pub const MAX_STACK: usize = 64;
    pub const MAX_CYMBAL: usize = 4;

    pub fn new(sample_rate: f32) -> Self {
        Self {
            n_cymbal: 1,
            distance: 100.0,
            plates: (0..Self::MAX_CYMBAL)
                .map(|_| WaveString::new(sample_rate, Self::MAX_STACK))
                .collect(),
        }
    }

    pub fn n_cymbal(&self) -> usize {
        self.n_cymbal
    }

    pub fn plate(&self, index: usize) -> &WaveString {
        &self.plates[index]
    }

    /// Redraw the random fingerprint of every active plate.
    pub fn trigger(&mut self, rng: &mut Random) {
        for plate in &mut self.plates[..self.n_cymbal] {
            plate.trigger(rng);
        }
    }

    /// `n_cymbal` is clamped to `1..=MAX_CYMBAL`.
    pub fn set(
        &mut self,
        n_cymbal: usize,
        distance: f32,
        params: &PlateParams,
        smoothing: &SmootherConfig,
    ) {
        self.n_cymbal = n_cymbal.clamp(1, Self::MAX_CYMBAL);
        self.distance = distance;

        for plate in &mut self.plates[..self.n_cymbal] {
            plate.set(params, smoothing);
        }
    }

    pub fn reset(&mut self) {
        for plate in &mut self.plates {
            plate.reset();
        }
    }

    fn collide(upper: &mut Wave1D, lower: &Wave1D, distance: f32) {
        let gap = distance / GAP_DIVISOR;
        let length = upper.length().min(lower.length());
        for i in 0..length {
            if upper[i] - lower[i] + gap < 0.0 {
                upper[i] = -upper[i];
            }
        }
    }

    #[inline]
    pub fn process(&mut self, input: f32, collision: bool) -> f32 {
        let mut output = 0.0;
        for plate in &mut self.plates[..self.n_cymbal] {
            output += plate.process(input);
        }

        if collision {
            for i in 1..self.n_cymbal {
                let (head, tail) = self.plates.split_at_mut(i);
                Self::collide(head[i - 1].wave_mut(), tail[0].wave(), self.distance);
            }
        }

        output / self.n_cymbal as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn snap_config() -> SmootherConfig {
        SmootherConfig::new(SAMPLE_RATE, 0.0, 512)
    }

    fn plate_params() -> PlateParams {
        PlateParams {
            stack: 12,
            damping: 0.95,
            ..PlateParams::default()
        }
    }

    fn struck_hat(n_cymbal: usize, distance: f32, seed: u32) -> WaveHat {
        let mut hat = WaveHat::new(SAMPLE_RATE);
        hat.set(n_cymbal, distance, &plate_params(), &snap_config());
        hat.trigger(&mut Random::new(seed));
        hat.set(n_cymbal, distance, &plate_params(), &snap_config());
        hat
    }

    #[test]
    fn test_n_cymbal_is_clamped() {
        let mut hat = WaveHat::new(SAMPLE_RATE);
        hat.set(10, 1.0, &plate_params(), &snap_config());
        assert_eq!(hat.n_cymbal(), WaveHat::MAX_CYMBAL);
        hat.set(0, 1.0, &plate_params(), &snap_config());
        assert_eq!(hat.n_cymbal(), 1);
    }

    #[test]
    fn test_same_seed_same_assignments() {
        let a = struck_hat(3, 1.0, 6_583_421);
        let b = struck_hat(3, 1.0, 6_583_421);

        for p in 0..3 {
            for i in 0..12 {
                assert_eq!(a.plate(p).string_frequency(i), b.plate(p).string_frequency(i));
                assert_eq!(a.plate(p).bandpass_cutoff(i), b.plate(p).bandpass_cutoff(i));
            }
        }
    }

    #[test]
    fn test_plates_get_distinct_fingerprints() {
        let hat = struck_hat(2, 1.0, 42);
        let differs = (0..12).any(|i| {
            hat.plate(0).string_frequency(i) != hat.plate(1).string_frequency(i)
        });
        assert!(differs, "each plate should draw its own offsets");
    }

    #[test]
    fn test_no_collision_matches_plain_sum() {
        let mut hat = struck_hat(3, 0.0, 9);
        let mut reference = hat.clone();

        for n in 0..4800 {
            let input = if n % 1000 == 0 { 1.0 } else { 0.0 };
            let out = hat.process(input, false);

            let mut sum = 0.0;
            for plate in &mut reference.plates[..3] {
                sum += plate.process(input);
            }
            let expected = sum / 3.0;

            assert_eq!(out.to_bits(), expected.to_bits(), "diverged at sample {}", n);
        }
    }

    #[test]
    fn test_collision_changes_output() {
        let mut free = struck_hat(2, 0.0, 17);
        let mut clashing = free.clone();

        let mut diverged = false;
        for n in 0..4800 {
            let input = if n == 0 { 1.0 } else { 0.0 };
            let a = free.process(input, false);
            let b = clashing.process(input, true);
            assert!(b.is_finite());
            if a != b {
                diverged = true;
            }
        }
        assert!(diverged, "touching plates should interact");
    }

    #[test]
    fn test_collide_flips_intersecting_nodes() {
        let mut upper = Wave1D::new(SAMPLE_RATE, 4);
        let mut lower = Wave1D::new(SAMPLE_RATE, 4);
        upper.set(4, 0.5, 0.5, 0.5);
        lower.set(4, 0.5, 0.5, 0.5);

        upper[0] = -0.5;
        lower[0] = 0.5;
        upper[1] = 0.5;
        lower[1] = -0.5;

        WaveHat::collide(&mut upper, &lower, 0.0);
        assert_eq!(upper[0], 0.5);
        assert_eq!(upper[1], 0.5);
        assert_eq!(lower[0], 0.5);
    }

    #[test]
    fn test_single_plate_ignores_collision_flag() {
        let mut a = struck_hat(1, 0.0, 3);
        let mut b = a.clone();
        for n in 0..2000 {
            let input = if n == 0 { 1.0 } else { 0.0 };
            assert_eq!(a.process(input, true), b.process(input, false));
        }
    }
}

//! The physical model: wave lattices coupled to resonator banks.
//!
//! A [`WaveString`] is one plate, a lattice driving a bank of bandpass and
//! Karplus-Strong pairs. A [`WaveHat`] stacks up to four plates and lets
//! neighbours collide.

pub mod hat;
pub mod string;

pub use hat::WaveHat;
pub use string::{CrossoverType, PlateParams, WaveString};

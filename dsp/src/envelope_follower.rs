//! Two-stage envelope follower.
//!
//! The first stage holds peaks and lets them decay with the release
//! coefficient. The second stage is a one-pole low-pass smoothing the held
//! peaks with the attack coefficient. Splitting the two lets the detector
//! catch short transients while the removal of the attack is applied
//! gradually.

use libm::{expf, fabsf};

const DEFAULT_SAMPLE_RATE: u32 = 48_000;

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvelopeFollower {
    sample_rate: u32,
    attack_coef: f32,
    release_coef: f32,
    fast_stage: f32,
    smoothed: f32,
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl EnvelopeFollower {
    #[must_use]
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            attack_coef: 0.0,
            release_coef: 0.0,
            fast_stage: 0.0,
            smoothed: 0.0,
        }
    }

    /// Derive per-sample coefficients from time constants.
    ///
    /// Both times must be positive and the sample rate non-zero. This is
    /// not checked here, it is up to the caller to pass valid values.
    pub fn set_coef(&mut self, attack_time_ms: f32, release_time_ms: f32) {
        let sample_rate = self.sample_rate as f32;
        self.attack_coef = expf(-1000.0 / (attack_time_ms * sample_rate));
        self.release_coef = expf(-1000.0 / (release_time_ms * sample_rate));
    }

    pub fn process(&mut self, x: f32) -> f32 {
        let x = fabsf(x);
        self.fast_stage = f32::max(
            x,
            self.release_coef * self.fast_stage + (1.0 - self.release_coef) * x,
        );
        self.smoothed =
            self.attack_coef * self.smoothed + (1.0 - self.attack_coef) * self.fast_stage;
        self.smoothed
    }

    #[must_use]
    pub fn attack_coef(&self) -> f32 {
        self.attack_coef
    }

    #[must_use]
    pub fn release_coef(&self) -> f32 {
        self.release_coef
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.smoothed
    }
}

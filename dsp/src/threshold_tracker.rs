//! Detection threshold following the macro-loudness of the program.
//!
//! Once per block, RMS of the reference channel is converted to decibels
//! and smoothed by a one-pole filter. The threshold then sits a fixed offset
//! below the smoothed level, so the sensitivity adapts to how loud the
//! material is instead of relying on an absolute value.

use libm::sqrt;

use crate::decibels::{self, MINUS_INFINITY_DB};

/// Weight of the newest block in the smoothed level.
pub const SMOOTHING: f32 = 0.45;

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdTracker {
    smoothed_rms_db: f32,
}

impl Default for ThresholdTracker {
    fn default() -> Self {
        Self {
            smoothed_rms_db: MINUS_INFINITY_DB,
        }
    }
}

impl ThresholdTracker {
    /// Feed the unprocessed reference block and return the threshold for it.
    pub fn update(&mut self, reference: &[f32], threshold_offset_db: f32) -> f32 {
        let rms_db = decibels::from_gain(root_mean_square(reference));
        self.smoothed_rms_db = SMOOTHING * rms_db + (1.0 - SMOOTHING) * self.smoothed_rms_db;
        self.smoothed_rms_db - threshold_offset_db
    }

    #[must_use]
    pub fn smoothed_rms_db(&self) -> f32 {
        self.smoothed_rms_db
    }
}

fn root_mean_square(block: &[f32]) -> f32 {
    if block.is_empty() {
        return 0.0;
    }

    // Accumulated in double precision so loud blocks cannot overflow.
    let sum = block
        .iter()
        .fold(0.0, |sum, x| sum + f64::from(*x) * f64::from(*x));
    sqrt(sum / block.len() as f64) as f32
}

//! Mapping of user attributes to coefficients of the dynamics loop.

use libm::powf;

use crate::decibels;

/// Distance of the detection threshold below the smoothed program level.
///
/// The same amount is used as makeup gain when attack eating is fully
/// engaged.
pub const THRESHOLD_OFFSET_DB: f32 = 6.0;

/// Ratio reached when attack eating is fully engaged.
const MAX_RATIO: f32 = 8.0;

/// Exponent warping the raw amount, most of its range is spent near full
/// effect.
const EAT_ATTACK_CURVE: f32 = 0.1;

/// Raw user-facing controls.
///
/// Validation and clamping are done by whoever owns the parameters, these
/// values are taken as they are.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    /// Normalized amount of attack eating, 0.0 to 1.0.
    pub eat_attack: f32,
    /// Output trim in decibels, -24.0 to 24.0.
    pub volume: f32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            eat_attack: 0.5,
            volume: 0.0,
        }
    }
}

/// Coefficients derived from attributes at the start of every block.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coefficients {
    pub eat_attack: f32,
    pub eat_attack_inverse: f32,
    pub ratio: f32,
    pub ratio_inverse_minus_one: f32,
    pub volume_gain: f32,
    pub threshold_offset_db: f32,
}

impl From<Attributes> for Coefficients {
    fn from(attributes: Attributes) -> Self {
        let eat_attack = powf(attributes.eat_attack, EAT_ATTACK_CURVE);
        let ratio = 1.0 + eat_attack * (MAX_RATIO - 1.0);
        Self {
            eat_attack,
            eat_attack_inverse: 1.0 - eat_attack,
            ratio,
            ratio_inverse_minus_one: 1.0 / ratio - 1.0,
            volume_gain: decibels::to_gain(THRESHOLD_OFFSET_DB * eat_attack + attributes.volume),
            threshold_offset_db: THRESHOLD_OFFSET_DB,
        }
    }
}

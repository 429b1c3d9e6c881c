//! Definitions of user-facing parameters.

#[allow(unused_imports)]
use micromath::F32Ext;

use core::fmt;

/// Unique identifier of a parameter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterId {
    EatAttack,
    Volume,
}

/// Allowed values of a parameter.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

const EAT_ATTACK_RANGE: Range = Range {
    min: 0.0,
    max: 1.0,
    step: 0.05,
    default: 0.5,
};

const VOLUME_RANGE: Range = Range {
    min: -24.0,
    max: 24.0,
    step: 0.1,
    default: 0.0,
};

pub const PARAMETERS: [ParameterId; 2] = [ParameterId::EatAttack, ParameterId::Volume];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownParameter;

impl fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter")
    }
}

impl ParameterId {
    /// # Errors
    ///
    /// Fails with `UnknownParameter` when the name matches none of
    /// [`PARAMETERS`].
    pub fn from_name(name: &str) -> Result<Self, UnknownParameter> {
        PARAMETERS
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or(UnknownParameter)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EatAttack => "EatAttack",
            Self::Volume => "Volume",
        }
    }

    #[must_use]
    pub fn range(self) -> Range {
        match self {
            Self::EatAttack => EAT_ATTACK_RANGE,
            Self::Volume => VOLUME_RANGE,
        }
    }
}

impl Range {
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp the value and snap it to the closest step.
    ///
    /// Values that are not finite fall back to the default.
    #[must_use]
    pub fn constrain(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.default;
        }

        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_identifiers() {
        assert_eq!(ParameterId::from_name("EatAttack"), Ok(ParameterId::EatAttack));
        assert_eq!(ParameterId::from_name("Volume"), Ok(ParameterId::Volume));
        for id in PARAMETERS {
            assert_eq!(ParameterId::from_name(id.name()), Ok(id));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(ParameterId::from_name("volume"), Err(UnknownParameter));
        assert_eq!(ParameterId::from_name(""), Err(UnknownParameter));
    }

    #[test]
    fn defaults_lie_within_ranges() {
        for id in PARAMETERS {
            let range = id.range();
            assert!(range.contains(range.default));
            assert_relative_eq!(range.constrain(range.default), range.default);
        }
    }

    #[test]
    fn values_outside_range_are_clamped() {
        let range = ParameterId::EatAttack.range();
        assert_relative_eq!(range.constrain(-0.5), 0.0);
        assert_relative_eq!(range.constrain(1.5), 1.0);

        let range = ParameterId::Volume.range();
        assert_relative_eq!(range.constrain(-100.0), -24.0);
        assert_relative_eq!(range.constrain(30.0), 24.0);
    }

    #[test]
    fn values_snap_to_step() {
        let range = ParameterId::EatAttack.range();
        assert_relative_eq!(range.constrain(0.52), 0.5, epsilon = 0.0001);
        assert_relative_eq!(range.constrain(0.53), 0.55, epsilon = 0.0001);

        let range = ParameterId::Volume.range();
        assert_relative_eq!(range.constrain(3.14), 3.1, epsilon = 0.0001);
        assert_relative_eq!(range.constrain(-11.96), -12.0, epsilon = 0.0001);
    }

    #[test]
    fn non_finite_values_fall_back_to_default() {
        let range = ParameterId::Volume.range();
        assert_relative_eq!(range.constrain(f32::NAN), 0.0);
        assert_relative_eq!(range.constrain(f32::INFINITY), 0.0);
        assert_relative_eq!(range.constrain(f32::NEG_INFINITY), 0.0);
    }
}

//! Parameter layer passing user input to the DSP.
//!
//! The DSP treats parameters as plain numbers. This crate owns their
//! definitions, validates them and hands them over to the audio thread
//! without locking:
//!
//! ```text
//!     [ ControlLoop ]                       [ DSPLoop ]
//!           |                                    A
//!           | (ControlAction)                    | (Attributes, once per block)
//!           V                                    |
//!   apply_control_action -----> {SharedParameters}
//!                                                A
//!     [ HostAdapter ] --(StreamConfig)--> prepare/release
//! ```

#![no_std]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate approx;

mod log;
pub mod parameters;
pub mod shared;
pub mod stream;

pub use parameters::{ParameterId, Range, UnknownParameter, PARAMETERS};
pub use shared::SharedParameters;
pub use stream::{InvalidStreamConfig, StreamConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    SetEatAttack(f32),
    SetVolume(f32),
}

impl ControlAction {
    #[must_use]
    pub fn parameter(&self) -> ParameterId {
        match self {
            Self::SetEatAttack(_) => ParameterId::EatAttack,
            Self::SetVolume(_) => ParameterId::Volume,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        match self {
            Self::SetEatAttack(x) | Self::SetVolume(x) => *x,
        }
    }
}

/// Store the requested value and return what was actually stored.
pub fn apply_control_action(action: ControlAction, parameters: &SharedParameters) -> f32 {
    let id = action.parameter();
    let value = parameters.set(id, action.value());
    log::info!("Setting {}={}", id.name(), value);
    value
}

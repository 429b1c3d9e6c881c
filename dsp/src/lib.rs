//! Digital signal processing components that must run in real-time.
//!
//! The crate implements an attack eater: a dynamics processor that
//! attenuates transient attacks above a threshold following the program
//! loudness, while sustain and release pass through.
//!
//! # Example
//!
//! ```
//! use attack_eater_dsp::coefficients::Attributes;
//! use attack_eater_dsp::processor::Processor;
//!
//! let mut processor = Processor::new(48_000.0, 32, 2);
//! processor.set_attributes(Attributes {
//!     eat_attack: 0.8,
//!     volume: -3.0,
//! });
//!
//! let mut left = [0.0; 32];
//! let mut right = [0.0; 32];
//! processor.process(&mut [&mut left[..], &mut right[..]]);
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod coefficients;
pub mod decibels;
pub mod envelope_follower;
mod log;
pub mod processor;
pub mod threshold_tracker;

//! Main interface for the DSP loop.
//!
//! The processor detects attacks above the adaptive threshold, attenuates
//! them through per-channel envelope followers and blends the result with
//! the dry signal.

use libm::fabsf;

use crate::coefficients::{Attributes, Coefficients};
use crate::decibels;
use crate::envelope_follower::EnvelopeFollower;
use crate::log;
use crate::threshold_tracker::ThresholdTracker;

const ATTACK_TIME_MS: f32 = 0.01;
const RELEASE_TIME_MS: f32 = 10.0;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Processor {
    envelope_followers: Vec<EnvelopeFollower>,
    threshold_tracker: ThresholdTracker,
    attributes: Attributes,
    max_block_size: usize,
}

impl Processor {
    #[must_use]
    pub fn new(sample_rate: f32, max_block_size: usize, channels: usize) -> Self {
        let mut processor = Self {
            envelope_followers: Vec::new(),
            threshold_tracker: ThresholdTracker::default(),
            attributes: Attributes::default(),
            max_block_size: 0,
        };
        processor.prepare(sample_rate, max_block_size, channels);
        processor
    }

    /// Reset all running state for the given stream configuration.
    ///
    /// Must not be called while a block is being processed. Attributes set
    /// earlier are retained.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize, channels: usize) {
        log::info!(
            "Preparing sample_rate={} max_block_size={} channels={}",
            sample_rate,
            max_block_size,
            channels
        );
        if channels == 0 {
            log::warn!("Prepared without any channel, blocks will pass intact");
        }

        let mut envelope_follower = EnvelopeFollower::new(sample_rate as u32);
        envelope_follower.set_coef(ATTACK_TIME_MS, RELEASE_TIME_MS);

        self.envelope_followers.clear();
        self.envelope_followers.resize(channels, envelope_follower);
        self.threshold_tracker = ThresholdTracker::default();
        self.max_block_size = max_block_size;
    }

    /// Drop per-channel state. Blocks passed before the next `prepare` are
    /// left untouched.
    pub fn release(&mut self) {
        log::info!("Releasing channels={}", self.envelope_followers.len());
        self.envelope_followers = Vec::new();
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[must_use]
    pub fn channels(&self) -> usize {
        self.envelope_followers.len()
    }

    #[must_use]
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    #[must_use]
    pub fn smoothed_rms_db(&self) -> f32 {
        self.threshold_tracker.smoothed_rms_db()
    }

    /// Process channel-major block in place.
    ///
    /// The first channel is used as the reference for the adaptive
    /// threshold. Channels exceeding the prepared count are left intact.
    pub fn process(&mut self, buffer: &mut [&mut [f32]]) {
        if self.envelope_followers.is_empty() {
            return;
        }
        let Some(reference) = buffer.first() else {
            return;
        };
        debug_assert!(reference.len() <= self.max_block_size);

        let coefficients = Coefficients::from(self.attributes);
        let threshold = self
            .threshold_tracker
            .update(reference, coefficients.threshold_offset_db);

        // With the ratio at 1 there is nothing to reduce.
        let factor = if coefficients.ratio > 1.0 { -1.0 } else { 1.0 };

        for (channel, envelope_follower) in buffer.iter_mut().zip(&mut self.envelope_followers) {
            for x in channel.iter_mut() {
                let input = *x;
                let input_db = decibels::from_gain(fabsf(input));

                let attenuation_db = if input_db >= threshold {
                    (input_db - threshold) * coefficients.ratio_inverse_minus_one
                } else {
                    0.0
                };
                let smooth_db = factor * envelope_follower.process(attenuation_db);
                let output = input * decibels::to_gain(smooth_db);

                *x = coefficients.volume_gain
                    * (coefficients.eat_attack * output + coefficients.eat_attack_inverse * input);
            }
        }
    }
}

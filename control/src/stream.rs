//! Validation of the stream configuration requested by the host.
//!
//! The processor trusts whatever it is given, so the checks live here,
//! before it gets prepared.

use core::fmt;

use attack_eater_dsp::processor::Processor;

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamConfig {
    sample_rate: f32,
    max_block_size: usize,
    channels: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidStreamConfig {
    InvalidSampleRate,
    InvalidBlockSize,
    InvalidChannelCount,
}

impl fmt::Display for InvalidStreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleRate => write!(f, "sample rate must be at least 1 Hz"),
            Self::InvalidBlockSize => write!(f, "maximum block size must not be zero"),
            Self::InvalidChannelCount => write!(f, "at least one channel is required"),
        }
    }
}

impl StreamConfig {
    /// # Errors
    ///
    /// Sample rate must be finite and at least 1 Hz, since envelope
    /// coefficients are derived from its integer part. Block size and
    /// channel count must not be zero.
    pub fn new(
        sample_rate: f32,
        max_block_size: usize,
        channels: usize,
    ) -> Result<Self, InvalidStreamConfig> {
        if !sample_rate.is_finite() || sample_rate < 1.0 {
            return Err(InvalidStreamConfig::InvalidSampleRate);
        }
        if max_block_size == 0 {
            return Err(InvalidStreamConfig::InvalidBlockSize);
        }
        if channels == 0 {
            return Err(InvalidStreamConfig::InvalidChannelCount);
        }

        Ok(Self {
            sample_rate,
            max_block_size,
            channels,
        })
    }

    #[must_use]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[must_use]
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[must_use]
    pub fn build_processor(&self) -> Processor {
        Processor::new(self.sample_rate, self.max_block_size, self.channels)
    }

    pub fn prepare(&self, processor: &mut Processor) {
        processor.prepare(self.sample_rate, self.max_block_size, self.channels);
    }
}

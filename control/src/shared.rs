//! Parameters shared between the control thread and the audio thread.
//!
//! Every value is stored as bits of `f32` in its own atomic, so the writer
//! never blocks the reader and the reader never observes a torn value. The
//! audio thread is expected to take a single snapshot per block.

use core::sync::atomic::{AtomicU32, Ordering};

use attack_eater_dsp::coefficients::Attributes;

use crate::log;
use crate::parameters::ParameterId;

#[derive(Debug)]
pub struct SharedParameters {
    eat_attack: AtomicU32,
    volume: AtomicU32,
}

impl Default for SharedParameters {
    fn default() -> Self {
        Self {
            eat_attack: AtomicU32::new(ParameterId::EatAttack.range().default.to_bits()),
            volume: AtomicU32::new(ParameterId::Volume.range().default.to_bits()),
        }
    }
}

impl SharedParameters {
    /// Constrain and store the value, returning what was stored.
    pub fn set(&self, id: ParameterId, value: f32) -> f32 {
        let range = id.range();
        if !range.contains(value) {
            log::warn!("Value {} is out of range of {}", value, id);
        }

        let value = range.constrain(value);
        self.slot(id).store(value.to_bits(), Ordering::Relaxed);
        value
    }

    #[must_use]
    pub fn get(&self, id: ParameterId) -> f32 {
        f32::from_bits(self.slot(id).load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn snapshot(&self) -> Attributes {
        Attributes {
            eat_attack: self.get(ParameterId::EatAttack),
            volume: self.get(ParameterId::Volume),
        }
    }

    fn slot(&self, id: ParameterId) -> &AtomicU32 {
        match id {
            ParameterId::EatAttack => &self.eat_attack,
            ParameterId::Volume => &self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn it_starts_with_defaults() {
        let parameters = SharedParameters::default();
        assert_eq!(parameters.snapshot(), Attributes::default());
    }

    #[test]
    fn stored_values_are_constrained() {
        let parameters = SharedParameters::default();
        assert_relative_eq!(parameters.set(ParameterId::EatAttack, 2.0), 1.0);
        assert_relative_eq!(parameters.set(ParameterId::Volume, -30.0), -24.0);

        let snapshot = parameters.snapshot();
        assert_relative_eq!(snapshot.eat_attack, 1.0);
        assert_relative_eq!(snapshot.volume, -24.0);
    }

    #[test]
    fn parameters_are_stored_independently() {
        let parameters = SharedParameters::default();
        parameters.set(ParameterId::Volume, 6.0);
        assert_relative_eq!(parameters.get(ParameterId::EatAttack), 0.5);
        assert_relative_eq!(parameters.get(ParameterId::Volume), 6.0);
    }

    #[test]
    fn reader_never_observes_torn_values() {
        const WRITES: usize = 10_000;
        let parameters = Arc::new(SharedParameters::default());

        let writer = {
            let parameters = Arc::clone(&parameters);
            thread::spawn(move || {
                for i in 0..WRITES {
                    let value = if i % 2 == 0 { -24.0 } else { 24.0 };
                    parameters.set(ParameterId::Volume, value);
                }
            })
        };

        for _ in 0..WRITES {
            let volume = parameters.snapshot().volume;
            assert!(volume == -24.0 || volume == 24.0 || volume == 0.0);
        }

        writer.join().unwrap();
        assert_relative_eq!(parameters.get(ParameterId::Volume), 24.0);
    }
}

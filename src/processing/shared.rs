//! Lock-free handoff of the latest variation between threads

use crate::core::VariationEstimate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Latest magnetic variation, shareable across threads.
///
/// The `f64` is stored as its bit pattern in an `AtomicU64`, so a reader always
/// sees either the previous or the new value in full.
#[derive(Debug, Clone)]
pub struct SharedVariation {
    bits: Arc<AtomicU64>,
}

impl SharedVariation {
    /// New cell holding zero variation
    pub fn new() -> Self {
        Self::with_value(0.0)
    }

    pub fn with_value(value: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(value.to_bits())),
        }
    }

    pub fn store(&self, estimate: VariationEstimate) {
        self.bits.store(estimate.value.to_bits(), Ordering::Release);
    }

    pub fn load(&self) -> VariationEstimate {
        VariationEstimate::new(f64::from_bits(self.bits.load(Ordering::Acquire)))
    }
}

impl Default for SharedVariation {
    fn default() -> Self {
        Self::new()
    }
}

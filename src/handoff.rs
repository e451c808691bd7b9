//! Sample buffer and ready flag shared between the ADC interrupt and the main loop.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

/// Largest burst the handoff buffer can hold.
pub const MAX_BURST_SIZE: usize = 16;

/// A snapshot of one completed burst.
pub type Burst = heapless::Vec<u16, MAX_BURST_SIZE>;

/// Single-producer, single-consumer burst slot.
///
/// The engine stores samples and then publishes with release ordering; the controller
/// observes the flag with acquire ordering before it reads any sample. No lock is taken:
/// the engine is only re-armed by the controller after it has consumed the burst.
pub struct BurstHandoff {
    samples: [AtomicU16; MAX_BURST_SIZE],
    ready: AtomicBool,
}

impl BurstHandoff {
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const EMPTY: AtomicU16 = AtomicU16::new(0);
        Self {
            samples: [EMPTY; MAX_BURST_SIZE],
            ready: AtomicBool::new(false),
        }
    }

    pub(crate) fn store(&self, index: usize, sample: u16) {
        self.samples[index].store(sample, Ordering::Relaxed);
    }

    pub(crate) fn publish(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// `true` when a full burst is waiting to be consumed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Marks the burst as consumed. Clearing an empty slot does nothing.
    pub fn clear(&self) {
        self.ready.store(false, Ordering::Relaxed);
    }

    /// Copies out the first `len` samples.
    pub fn read(&self, len: usize) -> Burst {
        self.samples
            .iter()
            .take(len)
            .map(|sample| sample.load(Ordering::Relaxed))
            .collect()
    }
}

impl Default for BurstHandoff {
    fn default() -> Self {
        Self::new()
    }
}

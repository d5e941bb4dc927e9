//! Overlap guard for update cycles

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one update cycle in flight.
///
/// Acquisition is a single compare-and-swap, so it is safe to call from
/// any worker thread.
#[derive(Clone, Default)]
pub struct CycleGuard {
    in_flight: Arc<AtomicBool>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard if no cycle is running
    pub fn try_acquire(&self) -> Option<CyclePermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CyclePermit {
                in_flight: self.in_flight.clone(),
            })
    }

    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the guard when dropped, including during a panic unwind
pub struct CyclePermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for CyclePermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

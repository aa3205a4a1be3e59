//! Single in-flight flag for one collection.
//!
//! The guard has two states, idle and busy. A mutation may only start after
//! winning [`ConcurrencyGuard::try_acquire`]; losers are rejected rather than
//! queued. The returned [`GuardPermit`] releases the guard when dropped, so a
//! failing or panicking persistence call can never leave it stuck.

use std::sync::atomic::{AtomicBool, Ordering};

/// Idle/busy flag serializing mutations of one collection.
#[derive(Debug, Default)]
pub struct ConcurrencyGuard {
    busy: AtomicBool,
}

impl ConcurrencyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves idle -> busy. Returns `None` and changes nothing when already
    /// busy.
    pub fn try_acquire(&self) -> Option<GuardPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GuardPermit { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Unconditionally returns to idle.
    pub fn release(&self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Proof of a successful acquire; releases the guard on drop.
#[derive(Debug)]
#[must_use = "dropping the permit immediately releases the guard"]
pub struct GuardPermit<'a> {
    guard: &'a ConcurrencyGuard,
}

impl Drop for GuardPermit<'_> {
    fn drop(&mut self) {
        self.guard.release();
    }
}

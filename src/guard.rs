//! Request Guard
//!
//! Prevents overlapping issues of a single logical request. Each guard is
//! owned by the component instance that fires the requests, not shared
//! module-wide.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single in-flight flag with RAII release.
#[derive(Clone, Default)]
pub struct RequestGuard {
    in_flight: Arc<AtomicBool>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. Returns `None` while a previous permit is live.
    pub fn try_acquire(&self) -> Option<RequestPermit> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(RequestPermit {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one request. Dropping releases the guard
/// unconditionally, so success and failure paths both reset the flag.
#[must_use]
pub struct RequestPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for RequestPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_permit_live() {
        let guard = RequestGuard::new();

        let permit = guard.try_acquire();
        assert!(permit.is_some());
        assert!(guard.is_in_flight());
        assert!(guard.try_acquire().is_none());
    }

    #[test]
    fn drop_releases_guard() {
        let guard = RequestGuard::new();

        let permit = guard.try_acquire().unwrap();
        drop(permit);

        assert!(!guard.is_in_flight());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn clones_share_the_flag() {
        let guard = RequestGuard::new();
        let clone = guard.clone();

        let _permit = guard.try_acquire().unwrap();
        assert!(clone.is_in_flight());
        assert!(clone.try_acquire().is_none());
    }
}

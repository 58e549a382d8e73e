use std::sync::atomic::{AtomicU64, Ordering};

/// How many pixels a row task computes between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled once the shared counter has moved past the generation it was issued for.
#[derive(Debug)]
pub struct SupersededBy<'a> {
    issued_for: u64,
    latest: &'a AtomicU64,
}

impl<'a> SupersededBy<'a> {
    #[must_use]
    pub fn new(issued_for: u64, latest: &'a AtomicU64) -> Self {
        Self { issued_for, latest }
    }
}

impl CancelToken for SupersededBy<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.latest.load(Ordering::Relaxed) != self.issued_for
    }
}

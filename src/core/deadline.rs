/*!
 * Deadline Tracking
 *
 * Monotonic budget for a multiplexed wait. Derived once at call entry and
 * consumed by repeated per-batch native calls; the scheduler never issues a
 * call whose slice exceeds the remaining budget.
 */

use std::time::{Duration, Instant};

/// Monotonic deadline derived from the caller's timeout
///
/// `limit == None` is an unbounded wait that still proceeds round-by-round
/// so no single native call can block the scheduler forever.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Start the clock for a new top-level call
    #[inline]
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// True once the budget is fully consumed (never for unbounded waits)
    #[inline]
    pub fn expired(&self) -> bool {
        match self.limit {
            None => false,
            Some(limit) => self.start.elapsed() >= limit,
        }
    }

    /// Remaining budget; `None` for unbounded waits
    #[inline]
    pub fn remaining(&self) -> Option<Duration> {
        self.limit.map(|limit| limit.saturating_sub(self.start.elapsed()))
    }

    /// Elapsed time since call entry
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Clamp a poll slice to the remaining budget
    #[inline]
    pub fn clamp_slice(&self, slice: Duration) -> Duration {
        match self.remaining() {
            None => slice,
            Some(remaining) => slice.min(remaining),
        }
    }
}

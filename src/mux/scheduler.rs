/*!
 * Round Scheduler
 *
 * Drives repeated native calls across batches and across time until a
 * terminal outcome. One scheduler instance serves one top-level call; no
 * state is shared between concurrent calls.
 *
 * # Design: Slice Polling
 *
 * No native primitive can block on handles from several independent calls
 * at once, so a multi-batch wait must poll. Each batch gets a small bounded
 * slice (clamped to the remaining budget) instead of the whole remaining
 * timeout, keeping discovery latency for later batches bounded by the slice
 * even while an earlier batch is idle. Unbounded waits proceed round by
 * round for the same reason.
 */

use crate::core::deadline::Deadline;
use crate::core::limits::ERROR_INVALID_PARAMETER;
use crate::core::types::{Handle, WaitMode, WaitOutcome};
use crate::mux::adapter::{NativeStatus, NativeWait};
use crate::mux::batch::plan;
use crate::mux::combine::to_global;
use std::time::Duration;
use tracing::{debug, trace};

/// Per-call scheduler over one native primitive
pub(crate) struct RoundScheduler<'a, W: NativeWait + ?Sized> {
    native: &'a W,
    slice: Duration,
}

impl<'a, W: NativeWait + ?Sized> RoundScheduler<'a, W> {
    pub fn new(native: &'a W, slice: Duration) -> Self {
        Self { native, slice }
    }

    /// Run the state machine to a terminal outcome
    ///
    /// Issues no native call for an empty sequence and none once the
    /// deadline is observed expired at a round boundary.
    pub fn run(
        &self,
        handles: &[Handle],
        mode: WaitMode,
        timeout: Option<Duration>,
    ) -> WaitOutcome {
        if handles.is_empty() {
            // The native primitive rejects zero handles the same way
            debug!(adapter = self.native.name(), "wait on empty handle sequence");
            return WaitOutcome::Failed(ERROR_INVALID_PARAMETER);
        }

        let cap = self.native.capacity();
        let deadline = Deadline::start(timeout);

        // One batch needs no multiplexing: hand the whole budget to a
        // single native call and keep exact native semantics (including
        // zero-timeout polls).
        if handles.len() <= cap {
            let status = self.native.wait(handles, mode, timeout);
            return to_global(status, 0).unwrap_or(WaitOutcome::TimedOut);
        }

        let outcome = match mode {
            WaitMode::Any => self.run_any(handles, cap, deadline),
            WaitMode::All => self.run_all(handles, cap, deadline),
        };
        debug!(
            ?outcome,
            handles = handles.len(),
            elapsed_ms = deadline.elapsed().as_millis() as u64,
            "multiplexed wait terminal"
        );
        outcome
    }

    /// ANY mode: scan batches in ascending order every round
    ///
    /// The first signaled or abandoned handle in scan order wins, matching
    /// the priority the unrestricted primitive gives lower indices.
    fn run_any(&self, handles: &[Handle], cap: usize, deadline: Deadline) -> WaitOutcome {
        let batches = plan(handles, cap);
        loop {
            if deadline.expired() {
                return WaitOutcome::TimedOut;
            }
            for batch in batches.clone() {
                let slice = deadline.clamp_slice(self.slice);
                trace!(start = batch.start, len = batch.handles.len(), ?slice, "poll batch");
                let status = self.native.wait(batch.handles, WaitMode::Any, Some(slice));
                if let Some(outcome) = to_global(status, batch.start) {
                    return outcome;
                }
            }
        }
    }

    /// ALL mode: satisfy batches strictly in order
    ///
    /// A batch is polled until its own call reports all-signaled, then
    /// never re-polled; only then does the next batch start. An abandoned
    /// index or a failure anywhere is terminal.
    fn run_all(&self, handles: &[Handle], cap: usize, deadline: Deadline) -> WaitOutcome {
        for batch in plan(handles, cap) {
            loop {
                if deadline.expired() {
                    return WaitOutcome::TimedOut;
                }
                let slice = deadline.clamp_slice(self.slice);
                trace!(start = batch.start, ?slice, "poll batch (all)");
                match self.native.wait(batch.handles, WaitMode::All, Some(slice)) {
                    // All handles in this batch signaled; it is never
                    // re-polled
                    NativeStatus::Signaled(_) => break,
                    NativeStatus::TimedOut => continue,
                    NativeStatus::Abandoned(local) => {
                        return WaitOutcome::Abandoned(batch.global(local))
                    }
                    NativeStatus::Failed(code) => return WaitOutcome::Failed(code),
                }
            }
        }
        // Every batch reported all-signaled; the native all-signaled code
        WaitOutcome::Signaled(0)
    }
}

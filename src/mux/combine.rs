/*!
 * Result Combiner
 *
 * Maps per-batch native results and batch-local indices into the single
 * global result space the caller expects. Translation is the only place a
 * local index meets its batch's starting offset, so an index can never be
 * offset twice.
 */

use crate::core::types::WaitOutcome;
use crate::mux::adapter::NativeStatus;

/// Translate one batch's native status to the global outcome space
///
/// `None` means the batch timed out and the round continues; everything
/// else is terminal for the whole multiplexed call. Failures pass through
/// unchanged and are never reinterpreted.
#[inline]
pub fn to_global(status: NativeStatus, base: usize) -> Option<WaitOutcome> {
    match status {
        NativeStatus::Signaled(local) => Some(WaitOutcome::Signaled(base + local)),
        NativeStatus::Abandoned(local) => Some(WaitOutcome::Abandoned(base + local)),
        NativeStatus::TimedOut => None,
        NativeStatus::Failed(code) => Some(WaitOutcome::Failed(code)),
    }
}

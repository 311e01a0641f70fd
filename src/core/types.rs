/*!
 * Core Wait Types
 *
 * The caller-facing vocabulary of the multiplexer: opaque handles, wait
 * modes, and the single global outcome space. Indices carried by
 * [`WaitOutcome`] are always positions in the caller's original handle
 * sequence, never batch-local ones.
 */

use crate::core::errors::{MuxError, MuxResult};
use crate::core::limits::{INFINITE, WAIT_ABANDONED_0, WAIT_FAILED, WAIT_OBJECT_0, WAIT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque identifier for a caller-owned synchronization object
///
/// The multiplexer never creates, closes, or mutates the underlying object;
/// ownership stays with the caller for the full call duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Handle(pub usize);

impl Handle {
    /// Raw integer value, as passed to the native primitive
    #[inline(always)]
    pub const fn as_raw(self) -> usize {
        self.0
    }

    /// Null handles are never valid wait targets
    #[inline(always)]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Handle {
    #[inline]
    fn from(raw: usize) -> Self {
        Handle(raw)
    }
}

/// Wait mode for a multiplexed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitMode {
    /// Return on the first ready or abandoned handle, lowest index wins
    Any,
    /// Require every handle across every batch to be observed ready
    All,
}

/// Terminal outcome of a multiplexed wait
///
/// Exactly the four outcomes of the unrestricted native primitive; the
/// batching underneath is invisible to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "details", rename_all = "snake_case")]
pub enum WaitOutcome {
    /// Handle at this global index became signaled (index 0 for a satisfied
    /// wait-all, mirroring the native code)
    Signaled(usize),
    /// Mutex at this global index was abandoned by its previous owner
    Abandoned(usize),
    /// The deadline elapsed before any batch produced a result
    TimedOut,
    /// The native primitive failed; carries the opaque native error code
    Failed(u32),
}

impl WaitOutcome {
    /// Global index for signaled/abandoned outcomes
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Signaled(i) | Self::Abandoned(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn is_signaled(&self) -> bool {
        matches!(self, Self::Signaled(_))
    }

    /// Encode into the raw native code space
    ///
    /// The abandoned-base offset is applied exactly once here; the global
    /// index must already be fully resolved.
    pub fn to_raw(&self) -> u32 {
        match self {
            Self::Signaled(i) => WAIT_OBJECT_0 + *i as u32,
            Self::Abandoned(i) => WAIT_ABANDONED_0 + *i as u32,
            Self::TimedOut => WAIT_TIMEOUT,
            Self::Failed(_) => WAIT_FAILED,
        }
    }
}

/// Convert a raw millisecond timeout into the internal representation
///
/// `None` means an unbounded wait. Negative values are rejected before any
/// native call; values at or past the `INFINITE` sentinel are unbounded.
pub fn timeout_from_millis(ms: i64) -> MuxResult<Option<Duration>> {
    if ms < 0 {
        return Err(MuxError::InvalidTimeout(ms));
    }
    if ms >= i64::from(INFINITE) {
        return Ok(None);
    }
    Ok(Some(Duration::from_millis(ms as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_handle_null() {
        assert!(Handle(0).is_null());
        assert!(!Handle(0x1c4).is_null());
    }

    #[test]
    fn test_outcome_raw_encoding() {
        assert_eq!(WaitOutcome::Signaled(65).to_raw(), 65);
        assert_eq!(WaitOutcome::Abandoned(65).to_raw(), WAIT_ABANDONED_0 + 65);
        assert_eq!(WaitOutcome::TimedOut.to_raw(), WAIT_TIMEOUT);
        assert_eq!(WaitOutcome::Failed(87).to_raw(), WAIT_FAILED);
    }

    #[test]
    fn test_outcome_index() {
        assert_eq!(WaitOutcome::Signaled(3).index(), Some(3));
        assert_eq!(WaitOutcome::Abandoned(9).index(), Some(9));
        assert_eq!(WaitOutcome::TimedOut.index(), None);
        assert_eq!(WaitOutcome::Failed(5).index(), None);
    }

    #[test]
    fn test_timeout_conversion() {
        assert_eq!(
            timeout_from_millis(50).unwrap(),
            Some(Duration::from_millis(50))
        );
        assert_eq!(timeout_from_millis(0).unwrap(), Some(Duration::ZERO));
        assert_eq!(timeout_from_millis(i64::from(INFINITE)).unwrap(), None);
        assert_eq!(
            timeout_from_millis(-1),
            Err(MuxError::InvalidTimeout(-1))
        );
    }
}

/*!
 * Native Wait Adapter
 *
 * The seam between the scheduler and the platform's bounded wait primitive.
 *
 * # Design: Explicit Capability Instead of a Patched Global
 *
 * The scheduler receives the primitive as an explicit `NativeWait`
 * reference rather than resolving a process-global function table. The
 * Windows implementation wraps `WaitForMultipleObjects`; tests and
 * non-Windows embedders inject their own implementation.
 */

use crate::core::limits::{INFINITE, NATIVE_CAP, WAIT_ABANDONED_0, WAIT_OBJECT_0, WAIT_TIMEOUT};
use crate::core::types::{Handle, WaitMode};
use std::time::Duration;

/// Untranslated result of one native call, indices batch-local
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeStatus {
    /// Handle at this local index is signaled (local 0 for a satisfied
    /// wait-all)
    Signaled(usize),
    /// Mutex at this local index was abandoned
    Abandoned(usize),
    /// No handle in the batch became ready within the slice
    TimedOut,
    /// Opaque native failure; surfaced unchanged and never retried
    Failed(u32),
}

impl NativeStatus {
    /// Decode a raw native return code for a call over `len` handles
    ///
    /// Each base offset is subtracted exactly once; codes outside the
    /// signaled/abandoned/timeout ranges are failures.
    pub fn from_raw(code: u32, len: usize) -> Self {
        let len = len as u32;
        if code == WAIT_TIMEOUT {
            Self::TimedOut
        } else if code.wrapping_sub(WAIT_OBJECT_0) < len {
            Self::Signaled((code - WAIT_OBJECT_0) as usize)
        } else if code.wrapping_sub(WAIT_ABANDONED_0) < len {
            Self::Abandoned((code - WAIT_ABANDONED_0) as usize)
        } else {
            Self::Failed(code)
        }
    }
}

/// Bounded native wait primitive
///
/// Implementations must be:
/// - **Thread-safe**: safe to call from multiple threads concurrently
/// - **Single-shot**: exactly one underlying wait per `wait()` invocation
/// - **Transparent**: failures propagate unchanged, never swallowed
#[cfg_attr(test, mockall::automock)]
pub trait NativeWait: Send + Sync {
    /// Wait on one batch of handles
    ///
    /// `timeout == None` blocks without bound. At most
    /// [`capacity()`](Self::capacity) handles may be passed; more is a
    /// native failure, exactly as the real primitive behaves.
    fn wait(&self, handles: &[Handle], mode: WaitMode, timeout: Option<Duration>) -> NativeStatus;

    /// Per-call handle capacity of this primitive
    fn capacity(&self) -> usize {
        NATIVE_CAP
    }

    /// Adapter name for diagnostics
    fn name(&self) -> &'static str;
}

/// Convert a timeout to the native millisecond argument
///
/// Rounds up, so a non-zero timeout can never collapse into a zero-timeout
/// poll and report a premature timeout while budget remains. `INFINITE - 1`
/// is the largest finite wait the primitive accepts.
pub fn native_timeout_millis(timeout: Option<Duration>) -> u32 {
    match timeout {
        None => INFINITE,
        Some(d) => d
            .as_nanos()
            .div_ceil(1_000_000)
            .min(u128::from(INFINITE - 1)) as u32,
    }
}

/// `WaitForMultipleObjects`-backed adapter
#[cfg(windows)]
pub struct WindowsWait;

#[cfg(windows)]
impl NativeWait for WindowsWait {
    fn wait(&self, handles: &[Handle], mode: WaitMode, timeout: Option<Duration>) -> NativeStatus {
        use crate::core::limits::WAIT_FAILED;
        use winapi::um::errhandlingapi::GetLastError;
        use winapi::um::synchapi::WaitForMultipleObjects;
        use winapi::um::winnt::HANDLE;

        let raw: Vec<HANDLE> = handles.iter().map(|h| h.as_raw() as HANDLE).collect();
        let ms = native_timeout_millis(timeout);
        let wait_all = match mode {
            WaitMode::Any => 0,
            WaitMode::All => 1,
        };

        let code = unsafe { WaitForMultipleObjects(raw.len() as u32, raw.as_ptr(), wait_all, ms) };
        if code == WAIT_FAILED {
            NativeStatus::Failed(unsafe { GetLastError() })
        } else {
            NativeStatus::from_raw(code, handles.len())
        }
    }

    fn name(&self) -> &'static str {
        "wait_for_multiple_objects"
    }
}

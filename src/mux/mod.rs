/*!
 * Wait Multiplexer
 *
 * Emulates an unrestricted wait-for-multiple-objects over a primitive with
 * a fixed per-call handle capacity:
 * - Validate: structural checks before any native call
 * - Plan: contiguous batches no larger than the native capacity
 * - Schedule: rounds of slice-bounded native calls against one deadline
 * - Combine: batch-local results mapped into the global index space
 *
 * Callers see exactly the four native outcomes (signaled, abandoned,
 * timeout, failed) no matter how many native calls were needed.
 */

pub mod adapter;
pub mod batch;
pub mod combine;
pub mod scheduler;
pub mod validate;

use crate::core::errors::MuxResult;
use crate::core::limits::{DEFAULT_SLICE, DEFAULT_UPPER_BOUND};
use crate::core::types::{timeout_from_millis, Handle, WaitMode, WaitOutcome};
use crate::install;
use adapter::NativeWait;
use scheduler::RoundScheduler;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Multiplexer configuration
#[derive(Debug, Clone)]
pub struct MuxConfig {
    /// Per-batch poll slice for multi-batch rounds
    pub slice: Duration,
    /// Maximum multiplexed handle count accepted per call
    pub upper_bound: usize,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            slice: DEFAULT_SLICE,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

/// Capacity-bypassing wait entry point
///
/// Owns a reference to the native primitive (explicitly injected or
/// resolved from the installation manager) and a configuration. One
/// instance can serve concurrent callers; every call runs its own
/// scheduler with no shared mutable state.
///
/// # Examples
///
/// ```no_run
/// use waitmux::{Handle, WaitMode, WaitMux};
/// use std::time::Duration;
///
/// let mux = WaitMux::installed().expect("install() first");
/// let handles: Vec<Handle> = vec![Handle(0x1c4), Handle(0x1c8)];
/// let outcome = mux.wait(&handles, WaitMode::Any, Some(Duration::from_millis(50)));
/// ```
pub struct WaitMux {
    native: Arc<dyn NativeWait>,
    config: MuxConfig,
}

impl WaitMux {
    /// Create with an explicitly injected native primitive
    pub fn new(native: Arc<dyn NativeWait>, config: MuxConfig) -> Self {
        Self { native, config }
    }

    /// Create with the default configuration
    pub fn with_defaults(native: Arc<dyn NativeWait>) -> Self {
        Self::new(native, MuxConfig::default())
    }

    /// Create over the installed primitive
    ///
    /// Fails with `NotInstalled` before a successful `install()` (or
    /// `install_adapter()`) capture.
    pub fn installed() -> MuxResult<Self> {
        Ok(Self::with_defaults(install::current()?))
    }

    /// Wait on up to the configured upper bound of handles
    ///
    /// Semantically identical to one unrestricted native call: the result
    /// index is always a global index into `handles`, the lowest-ordered
    /// ready handle wins in ANY mode, and a native failure from any batch
    /// is terminal.
    pub fn wait(
        &self,
        handles: &[Handle],
        mode: WaitMode,
        timeout: Option<Duration>,
    ) -> MuxResult<WaitOutcome> {
        if let Err(e) = validate::validate(handles, self.config.upper_bound) {
            tracing::debug!(error = %e, "wait rejected before any native call");
            return Err(e);
        }
        trace!(
            handles = handles.len(),
            ?mode,
            ?timeout,
            adapter = self.native.name(),
            "multiplexed wait start"
        );
        Ok(RoundScheduler::new(self.native.as_ref(), self.config.slice).run(handles, mode, timeout))
    }

    /// Raw-code surface matching the native primitive's signature
    ///
    /// Accepts raw integer handles and a millisecond timeout (the
    /// `INFINITE` sentinel for unbounded) and returns the raw result code
    /// with the global index already encoded.
    pub fn wait_raw(&self, handles: &[usize], wait_all: bool, timeout_ms: i64) -> MuxResult<u32> {
        let timeout = timeout_from_millis(timeout_ms)?;
        let handles: Vec<Handle> = handles.iter().copied().map(Handle).collect();
        let mode = if wait_all { WaitMode::All } else { WaitMode::Any };
        Ok(self.wait(&handles, mode, timeout)?.to_raw())
    }
}

/*!
 * Installation Manager
 *
 * Process-wide, publish-once capture of the native wait primitive.
 *
 * # Design: Publish-Once Cell
 *
 * The saved primitive is written at most once, inside a mutual-exclusion
 * region, and read lock-free afterwards. Exactly one concurrent caller wins
 * the capture; every caller observes either "not installed" or the fully
 * published reference, never a partial state.
 *
 * On platforms without the capacity constraint `install()` captures nothing
 * and reports non-applicability (`false`) without error. Embedders on such
 * platforms, and tests everywhere, inject a primitive through
 * [`install_adapter`].
 */

use crate::core::errors::{MuxError, MuxResult};
use crate::core::limits::DEFAULT_UPPER_BOUND;
use crate::mux::adapter::NativeWait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Consumer of the multiplexed capacity limit
///
/// Worker-pool components that size themselves by the native per-call limit
/// implement this; installation pushes the multiplexed bound into each
/// registered target. Best-effort configuration, not a correctness
/// dependency of the wait algorithm.
pub trait CapacityTarget: Send + Sync {
    fn set_wait_capacity(&self, capacity: usize);
}

impl CapacityTarget for AtomicUsize {
    fn set_wait_capacity(&self, capacity: usize) {
        self.store(capacity, Ordering::SeqCst);
    }
}

/// Publish-once owner of the saved primitive reference
///
/// The process-global instance backs [`install`]/[`current`]; separate
/// instances exist only in tests.
pub struct Installer {
    saved: OnceLock<Arc<dyn NativeWait>>,
    lock: Mutex<()>,
}

impl Installer {
    pub const fn new() -> Self {
        Self {
            saved: OnceLock::new(),
            lock: Mutex::new(()),
        }
    }

    /// Capture a primitive and push the capacity limit to targets
    ///
    /// Idempotent: the first call captures and returns true; every later
    /// call changes nothing and returns the same indicator. The capacity
    /// push happens only on the winning call.
    pub fn install_adapter(
        &self,
        primitive: Arc<dyn NativeWait>,
        targets: &[Arc<dyn CapacityTarget>],
    ) -> bool {
        let _guard = self.lock.lock();
        if self.saved.get().is_some() {
            return true;
        }
        let name = primitive.name();
        let _ = self.saved.set(primitive);
        for target in targets {
            target.set_wait_capacity(DEFAULT_UPPER_BOUND);
        }
        info!(
            adapter = name,
            capacity = DEFAULT_UPPER_BOUND,
            targets = targets.len(),
            "wait multiplexer installed"
        );
        true
    }

    /// The saved primitive, or `NotInstalled` before a successful capture
    pub fn current(&self) -> MuxResult<Arc<dyn NativeWait>> {
        self.saved
            .get()
            .map(Arc::clone)
            .ok_or(MuxError::NotInstalled)
    }
}

impl Default for Installer {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Installer = Installer::new();

/// Install the platform primitive for this process
///
/// Returns true when the capacity bypass is active, false where the
/// platform has no capacity constraint to bypass. Never errors.
pub fn install() -> bool {
    install_with_targets(&[])
}

/// [`install`] plus a capacity push to the given targets
pub fn install_with_targets(targets: &[Arc<dyn CapacityTarget>]) -> bool {
    #[cfg(windows)]
    {
        GLOBAL.install_adapter(Arc::new(crate::mux::adapter::WindowsWait), targets)
    }
    #[cfg(not(windows))]
    {
        let _ = targets;
        tracing::debug!("no native wait capacity limit on this platform; nothing to install");
        false
    }
}

/// Install an explicitly injected primitive (process-global)
pub fn install_adapter(
    primitive: Arc<dyn NativeWait>,
    targets: &[Arc<dyn CapacityTarget>],
) -> bool {
    GLOBAL.install_adapter(primitive, targets)
}

/// The process-global saved primitive
pub fn current() -> MuxResult<Arc<dyn NativeWait>> {
    GLOBAL.current()
}

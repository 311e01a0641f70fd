/*!
 * waitmux
 *
 * Multiplexes a wait-for-multiple-objects operation across more handles
 * than the native primitive accepts in one call, returning exactly the
 * result an unrestricted primitive would have: signaled or abandoned global
 * index, timeout, or failure.
 */

pub mod core;
pub mod install;
pub mod mux;

// Re-exports
pub use crate::core::errors::{MuxError, MuxResult};
pub use crate::core::limits::{DEFAULT_UPPER_BOUND, NATIVE_CAP};
pub use crate::core::types::{timeout_from_millis, Handle, WaitMode, WaitOutcome};
pub use install::{current, install, install_adapter, install_with_targets, CapacityTarget, Installer};
pub use mux::adapter::{native_timeout_millis, NativeStatus, NativeWait};
pub use mux::{MuxConfig, WaitMux};

#[cfg(windows)]
pub use mux::adapter::WindowsWait;

/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for multiplexed wait operations
pub type MuxResult<T> = Result<T, MuxError>;

/// Errors raised before any native call is issued
///
/// A native-level failure is never an error: it surfaces as
/// [`WaitOutcome::Failed`](crate::core::types::WaitOutcome) so the caller
/// sees exactly the outcome space of the unrestricted primitive.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MuxError {
    #[error("Handle at index {0} is not a valid wait handle")]
    #[diagnostic(
        code(waitmux::invalid_handle),
        help("Null handle values cannot be waited on. Check that every handle in the sequence is open.")
    )]
    InvalidHandle(usize),

    #[error("Too many handles: {count} exceeds the multiplexer limit of {max}")]
    #[diagnostic(
        code(waitmux::too_many_handles),
        help("Split the wait across multiple calls or raise the configured upper bound.")
    )]
    TooManyHandles { count: usize, max: usize },

    #[error("Invalid timeout: {0}ms")]
    #[diagnostic(
        code(waitmux::invalid_timeout),
        help("Timeouts must be non-negative milliseconds or the INFINITE sentinel.")
    )]
    InvalidTimeout(i64),

    #[error("Wait multiplexer is not installed")]
    #[diagnostic(
        code(waitmux::not_installed),
        help("Call install() (or install_adapter() on platforms without the capacity limit) before resolving the saved primitive.")
    )]
    NotInstalled,
}

/*!
 * Core Module
 * Fundamental types, limits, and error handling
 */

pub mod deadline;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use deadline::Deadline;
pub use errors::{MuxError, MuxResult};
pub use types::{timeout_from_millis, Handle, WaitMode, WaitOutcome};

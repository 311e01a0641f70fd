/*!
 * Wait Limits and Constants
 *
 * Centralized location for the capacity limits and the raw result-code
 * space of the native wait primitive.
 *
 * The raw codes are defined here (not pulled from the platform crate) so
 * that result translation and its tests compile on every platform; they are
 * ABI constants and never change.
 */

use std::time::Duration;

// =============================================================================
// CAPACITY LIMITS
// =============================================================================

/// Handles per native call (one below MAXIMUM_WAIT_OBJECTS)
/// The spare slot lets callers layered above the multiplexer add a control
/// handle to any batch without overflowing the native limit.
pub const NATIVE_CAP: usize = 63;

/// Default cap on the multiplexed handle count (8 full batches plus a tail)
pub const DEFAULT_UPPER_BOUND: usize = 508;

// =============================================================================
// TIMING
// =============================================================================

/// Per-call poll slice for multi-batch rounds (15ms)
/// Bounds how long one batch's wait can delay discovery of a ready handle
/// in a later batch. Correctness does not depend on the value.
pub const DEFAULT_SLICE: Duration = Duration::from_millis(15);

// =============================================================================
// NATIVE RESULT-CODE SPACE
// =============================================================================

/// Base of the signaled range: code = WAIT_OBJECT_0 + index
pub const WAIT_OBJECT_0: u32 = 0x0000_0000;

/// Base of the abandoned-mutex range: code = WAIT_ABANDONED_0 + index
pub const WAIT_ABANDONED_0: u32 = 0x0000_0080;

/// No handle became signaled within the timeout
pub const WAIT_TIMEOUT: u32 = 0x0000_0102;

/// The native call itself failed; the cause is in the last-error code
pub const WAIT_FAILED: u32 = 0xFFFF_FFFF;

/// Millisecond sentinel for an unbounded wait
pub const INFINITE: u32 = 0xFFFF_FFFF;

/// Last-error code the primitive sets when given zero handles
pub const ERROR_INVALID_PARAMETER: u32 = 87;

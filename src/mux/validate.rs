/*!
 * Input Validation
 *
 * Pure structural checks performed before any native call is issued.
 * Rejections are raised synchronously; a rejected call never reaches the
 * scheduler, so no work is partially applied.
 */

use crate::core::errors::{MuxError, MuxResult};
use crate::core::types::Handle;

/// Validate a handle sequence against the configured upper bound
///
/// Length is checked before the elements so an oversized sequence is
/// rejected in O(1).
pub fn validate(handles: &[Handle], upper_bound: usize) -> MuxResult<()> {
    if handles.len() > upper_bound {
        return Err(MuxError::TooManyHandles {
            count: handles.len(),
            max: upper_bound,
        });
    }
    for (index, handle) in handles.iter().enumerate() {
        if handle.is_null() {
            return Err(MuxError::InvalidHandle(index));
        }
    }
    Ok(())
}

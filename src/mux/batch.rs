/*!
 * Batch Planner
 *
 * Partitions an ordered handle sequence into contiguous groups no larger
 * than the native per-call capacity, each tagged with its starting global
 * index. Pure function over the input slice; the plan is lazy and can be
 * restarted for every polling round.
 */

use crate::core::types::Handle;

/// A contiguous slice of the caller's handle sequence
///
/// Batch `b` covers global indices `[start, start + handles.len())`;
/// batches are disjoint, ordered, and their union is the full sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Global index of the first handle in this batch
    pub start: usize,
    /// The handles themselves, at most the planning capacity
    pub handles: &'a [Handle],
}

impl Batch<'_> {
    /// Translate a batch-local index to the global index space
    #[inline(always)]
    pub fn global(&self, local: usize) -> usize {
        debug_assert!(local < self.handles.len());
        self.start + local
    }
}

/// Plan batches of at most `cap` handles, preserving sequence order
///
/// The returned iterator is `Clone`, so one plan serves every round of a
/// polling loop without re-slicing.
pub fn plan(handles: &[Handle], cap: usize) -> impl Iterator<Item = Batch<'_>> + Clone {
    debug_assert!(cap > 0);
    handles
        .chunks(cap)
        .enumerate()
        .map(move |(i, chunk)| Batch {
            start: i * cap,
            handles: chunk,
        })
}

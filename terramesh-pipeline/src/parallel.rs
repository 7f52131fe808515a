//! Parallel processing helpers for the pipeline stages
//!
//! Only order-preserving maps are needed: the per-candidate edge
//! measurement and the per-triangle face-normal computation are both pure
//! per-element transforms, and `par_iter().map().collect()` keeps output
//! order, so results stay deterministic. Accumulation into shared vertex
//! slots is always done sequentially by the callers.

use rayon::prelude::*;

/// Below this many elements the parallel split costs more than it saves.
const MIN_PARALLEL_LEN: usize = 1024;

/// Map over a slice, in parallel for large inputs, preserving order.
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if data.len() < MIN_PARALLEL_LEN {
        data.iter().map(f).collect()
    } else {
        data.par_iter().map(f).collect()
    }
}

use log::debug;
use rayon::prelude::*;

use crate::cell::{Cell, Direction};
use crate::error::Result;
use crate::quant::{QValue, Q15};

/// Run independent sequences in parallel, each from a copy of `init`.
///
/// The model is shared read-only; each rayon worker gets its own buffers. Results come back in
/// input order.
pub fn run_batch<T: QValue>(cell: &Cell<'_, T>, init: &[Q15], sequences: &[Vec<T>], direction: Direction, normalize: bool) -> Vec<Result<Vec<Q15>>> {
    run_batch_with(cell, init, sequences, direction, normalize, || {})
}

/// [`run_batch`] calling `tick` once per finished sequence (for progress reporting).
pub fn run_batch_with<T, F>(cell: &Cell<'_, T>, init: &[Q15], sequences: &[Vec<T>], direction: Direction, normalize: bool, tick: F) -> Vec<Result<Vec<Q15>>>
where
    T: QValue,
    F: Fn() + Sync,
{
    debug!("batch: {} sequences on {} threads", sequences.len(), rayon::current_num_threads());
    sequences
        .par_iter()
        .map_init(
            || cell.buffers(normalize),
            |buffers, seq| {
                let mut hidden = init.to_vec();
                let res = cell.run(&mut hidden, seq, buffers, direction, normalize).map(|_| hidden);
                tick();
                res
            },
        )
        .collect()
}

/// Both directions of a bidirectional layer over one sequence, run concurrently.
/// Returns `(forward, backward)` final hidden states.
pub fn bidirectional<T: QValue>(
    forward: &Cell<'_, T>,
    backward: &Cell<'_, T>,
    init: &[Q15],
    sequence: &[T],
    normalize: bool,
) -> Result<(Vec<Q15>, Vec<Q15>)> {
    let run = |cell: &Cell<'_, T>, direction| {
        let mut hidden = init.to_vec();
        let mut buffers = cell.buffers(normalize);
        cell.run(&mut hidden, sequence, &mut buffers, direction, normalize).map(|_| hidden)
    };
    let (fwd, bwd) = rayon::join(|| run(forward, Direction::Forward), || run(backward, Direction::Backward));
    Ok((fwd?, bwd?))
}

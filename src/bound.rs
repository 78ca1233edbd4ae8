use num_traits::PrimInt;

use crate::error::{Error, Result};

/// Converts a neighborhood bound into a step count.
///
/// Bounds too large for `usize` saturate, since no sequence has that much room.
pub(crate) fn try_steps<N>(n: N) -> Result<usize>
where
    N: PrimInt,
{
    if n < N::zero() {
        return Err(Error::NegativeBound);
    }
    Ok(n.to_usize().unwrap_or(usize::MAX))
}

pub(crate) fn steps<N>(n: N) -> usize
where
    N: PrimInt,
{
    match try_steps(n) {
        Ok(steps) => steps,
        Err(e) => panic!("{e}"),
    }
}

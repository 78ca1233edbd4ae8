use std::cmp::Ordering;

use crate::position::{Bidirectional, Forward};

/// Moves `pos` forward by up to `n` steps without passing `limit`.
pub fn advance_forward_bounded<P>(mut pos: P, limit: &P, n: usize) -> P
where
    P: Forward,
{
    pos.advance_toward(limit, n);
    pos
}

/// Moves `pos` backward by up to `n` steps without passing `limit`.
pub fn advance_backward_bounded<P>(mut pos: P, limit: &P, n: usize) -> P
where
    P: Bidirectional,
{
    pos.retreat_toward(limit, n);
    pos
}

/// Moves `pos` by up to `count` steps, keeping it within `[lower, upper]`.
///
/// A positive `count` moves forward toward `upper`, a negative one moves
/// backward toward `lower`.
pub fn advance_bounded<P>(lower: &P, upper: &P, pos: P, count: isize) -> P
where
    P: Bidirectional,
{
    let n = count.unsigned_abs();
    match count.cmp(&0) {
        Ordering::Greater => advance_forward_bounded(pos, upper, n),
        Ordering::Less => advance_backward_bounded(pos, lower, n),
        Ordering::Equal => pos,
    }
}

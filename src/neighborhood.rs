use neighborhood_cursor::{
    advance_backward_bounded, advance_forward_bounded, Bidirectional, Forward,
};
use num_traits::PrimInt;

use crate::{
    bound::{steps, try_steps},
    error::Result,
};

/// Computes the start of the left neighborhood of `element`.
///
/// Moves up to `n` positions backward from `element` without passing
/// `first`. The returned position `l` satisfies `first <= l <= element`.
///
/// # Panics
///
/// Panics if `n` is negative.
pub fn neighborhood_left<P, N>(first: P, element: P, n: N) -> P
where
    P: Bidirectional,
    N: PrimInt,
{
    advance_backward_bounded(element, &first, steps(n))
}

/// Computes one past the end of the right neighborhood of `element`.
///
/// Moves up to `n + 1` positions forward from `element` without passing
/// `last`; the extra step covers `element` itself. `element` must come
/// before `last`.
///
/// # Panics
///
/// Panics if `n` is negative. Debug builds also panic if `element` is
/// `last`.
pub fn neighborhood_right<P, N>(last: P, element: P, n: N) -> P
where
    P: Forward,
    N: PrimInt,
{
    debug_assert!(element != last, "element is the end of the sequence");
    advance_forward_bounded(element, &last, steps(n).saturating_add(1))
}

/// Computes the neighborhood `[l, r)` of at most `n` elements on either side
/// of `element`, clamped to `[first, last)`.
///
/// The two sides are clamped independently: room missing on one side is not
/// handed to the other.
///
/// # Panics
///
/// Panics if `n` is negative.
pub fn neighborhood<P, N>(first: P, last: P, element: P, n: N) -> (P, P)
where
    P: Bidirectional,
    N: PrimInt,
{
    let n = steps(n);
    (
        neighborhood_left(first, element.clone(), n),
        neighborhood_right(last, element, n),
    )
}

/// Like [`neighborhood_left`], but returns an error for a negative `n`.
pub fn try_neighborhood_left<P, N>(first: P, element: P, n: N) -> Result<P>
where
    P: Bidirectional,
    N: PrimInt,
{
    Ok(neighborhood_left(first, element, try_steps(n)?))
}

/// Like [`neighborhood_right`], but returns an error for a negative `n`.
pub fn try_neighborhood_right<P, N>(last: P, element: P, n: N) -> Result<P>
where
    P: Forward,
    N: PrimInt,
{
    Ok(neighborhood_right(last, element, try_steps(n)?))
}

/// Like [`neighborhood`], but returns an error for a negative `n`.
pub fn try_neighborhood<P, N>(first: P, last: P, element: P, n: N) -> Result<(P, P)>
where
    P: Bidirectional,
    N: PrimInt,
{
    Ok(neighborhood(first, last, element, try_steps(n)?))
}

#[cfg(test)]
mod tests {
    use neighborhood_cursor::CharCursor;

    use super::*;
    use crate::error::Error;

    #[test]
    fn left() {
        assert_eq!(neighborhood_left(0_usize, 5, 2), 3);
        assert_eq!(neighborhood_left(0_usize, 5, 5), 0);
        assert_eq!(neighborhood_left(0_usize, 5, 9), 0);
        assert_eq!(neighborhood_left(0_usize, 5, 0), 5);
        assert_eq!(neighborhood_left(3_usize, 5, 9), 3);
    }

    #[test]
    fn right() {
        assert_eq!(neighborhood_right(10_usize, 5, 2), 8);
        assert_eq!(neighborhood_right(10_usize, 5, 4), 10);
        assert_eq!(neighborhood_right(10_usize, 5, 9), 10);
        assert_eq!(neighborhood_right(10_usize, 5, 0), 6);
        assert_eq!(neighborhood_right(10_usize, 9, 0), 10);
    }

    #[test]
    fn both() {
        assert_eq!(neighborhood(0_usize, 5, 2, 1), (1, 4));
        assert_eq!(neighborhood(0_usize, 5, 0, 2), (0, 3));
        assert_eq!(neighborhood(0_usize, 5, 4, 2), (2, 5));
        assert_eq!(neighborhood(0_usize, 1, 0, 5), (0, 1));
    }

    #[test]
    fn no_redistribution() {
        // left side is clamped to 0 steps, the right side still gets only 3
        assert_eq!(neighborhood(0_usize, 10, 0, 3), (0, 4));
        assert_eq!(neighborhood(0_usize, 10, 9, 3), (6, 10));
    }

    #[test]
    fn bound_types() {
        assert_eq!(neighborhood(0_u32, 5, 2, 1_u8), (1, 4));
        assert_eq!(neighborhood(0_u64, 5, 2, 1_i64), (1, 4));
        assert_eq!(neighborhood(0_u16, 5, 2, i128::MAX), (0, 5));
        assert_eq!(neighborhood(0_usize, 5, 2, usize::MAX), (0, 5));
    }

    #[test]
    fn chars() {
        let text = "añbçd";
        let first = CharCursor::begin(text);
        let last = CharCursor::end(text);
        let element = CharCursor::at(text, "añ".len()).unwrap();

        let (l, r) = neighborhood(first, last, element, 1);
        assert_eq!(l.slice_to(&r), "ñbç");
        let (l, r) = neighborhood(first, last, element, 0);
        assert_eq!(l.slice_to(&r), "b");
        let (l, r) = neighborhood(first, last, element, 10);
        assert_eq!(l.slice_to(&r), text);
    }

    #[test]
    fn checked() {
        assert_eq!(try_neighborhood_left(0_usize, 3, 1), Ok(2));
        assert_eq!(try_neighborhood_right(5_usize, 3, 1), Ok(5));
        assert_eq!(try_neighborhood(0_usize, 5, 3, 1), Ok((2, 5)));

        let err = Err(Error::NegativeBound);
        assert_eq!(try_neighborhood_left(0_usize, 3, -1), err);
        assert_eq!(try_neighborhood_right(5_usize, 3, -1), err);
        assert_eq!(try_neighborhood(0_usize, 5, 3, -1), err.map(|l| (l, l)));
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn negative_left() {
        neighborhood_left(0_usize, 3, -1);
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn negative_right() {
        neighborhood_right(5_usize, 3, -2_i8);
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn negative_both() {
        neighborhood(0_usize, 5, 3, i32::MIN);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is ahead of position")]
    fn first_after_element() {
        neighborhood_left(4_usize, 2, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "element is the end of the sequence")]
    fn element_at_last() {
        neighborhood_right(5_usize, 5, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "element is the end of the sequence")]
    fn both_element_at_last() {
        neighborhood(0_usize, 5, 5, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "element is the end of the sequence")]
    fn chars_element_at_end() {
        let text = "abc";
        let end = CharCursor::end(text);
        neighborhood(CharCursor::begin(text), end, end, 1);
    }
}

use std::ops::Range;

use num_traits::PrimInt;

use crate::{
    bound::try_steps,
    error::{Error, Result},
    neighborhood::neighborhood,
    windows::Neighborhoods,
};

/// Index range of the neighborhood of `index` within `0..len`.
///
/// # Panics
///
/// Panics if `index >= len` or `n` is negative.
pub fn window_range<N>(len: usize, index: usize, n: N) -> Range<usize>
where
    N: PrimInt,
{
    match try_window_range(len, index, n) {
        Ok(range) => range,
        Err(e) => panic!("{e}"),
    }
}

pub fn try_window_range<N>(len: usize, index: usize, n: N) -> Result<Range<usize>>
where
    N: PrimInt,
{
    if index >= len {
        return Err(Error::ElementOutOfRange { index, len });
    }
    let (start, end) = neighborhood(0, len, index, try_steps(n)?);
    Ok(start..end)
}

/// Neighborhoods of the elements of a slice, borrowed from the slice.
pub trait NeighborhoodExt<T> {
    /// Index range of the neighborhood of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or `n` is negative.
    fn neighborhood_range<N: PrimInt>(&self, index: usize, n: N) -> Range<usize>;

    /// At most `n` elements on either side of `index`, together with the
    /// element itself.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or `n` is negative.
    fn neighborhood<N: PrimInt>(&self, index: usize, n: N) -> &[T];

    fn try_neighborhood<N: PrimInt>(&self, index: usize, n: N) -> Result<&[T]>;

    /// Iterates over every element paired with its neighborhood.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    fn neighborhoods<N: PrimInt>(&self, n: N) -> Neighborhoods<'_, T>;
}

impl<T> NeighborhoodExt<T> for [T] {
    fn neighborhood_range<N: PrimInt>(&self, index: usize, n: N) -> Range<usize> {
        window_range(self.len(), index, n)
    }

    fn neighborhood<N: PrimInt>(&self, index: usize, n: N) -> &[T] {
        &self[self.neighborhood_range(index, n)]
    }

    fn try_neighborhood<N: PrimInt>(&self, index: usize, n: N) -> Result<&[T]> {
        let range = try_window_range(self.len(), index, n)?;
        Ok(&self[range])
    }

    fn neighborhoods<N: PrimInt>(&self, n: N) -> Neighborhoods<'_, T> {
        Neighborhoods::new(self, n)
    }
}

use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::{bound::steps, slice::window_range};

/// Iterator over every element index of a slice paired with its neighborhood.
///
/// Created by [`NeighborhoodExt::neighborhoods`](crate::NeighborhoodExt::neighborhoods).
#[derive(Debug, Clone)]
pub struct Neighborhoods<'a, T> {
    slice: &'a [T],
    n: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Neighborhoods<'a, T> {
    /// # Panics
    ///
    /// Panics if `n` is negative.
    pub fn new<N>(slice: &'a [T], n: N) -> Self
    where
        N: PrimInt,
    {
        let n = steps(n);
        tracing::trace!(len = slice.len(), n, "neighborhoods");
        Self {
            slice,
            n,
            front: 0,
            back: slice.len(),
        }
    }

    fn window(&self, index: usize) -> (usize, &'a [T]) {
        (index, &self.slice[window_range(self.slice.len(), index, self.n)])
    }
}

impl<'a, T> Iterator for Neighborhoods<'a, T> {
    type Item = (usize, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.window(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Neighborhoods<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.window(self.back))
    }
}

impl<T> ExactSizeIterator for Neighborhoods<'_, T> {}

impl<T> FusedIterator for Neighborhoods<'_, T> {}

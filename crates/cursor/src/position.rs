/// A position that can move to its successor.
///
/// Two positions compare equal when they denote the same place in the same
/// sequence.
pub trait Forward: Clone + PartialEq {
    /// Moves to the next position. The current position must not be the end.
    fn step_forward(&mut self);

    /// Steps forward at most `n` times, stopping at `limit`.
    ///
    /// Returns the number of steps taken. `limit` must be reachable from
    /// `self` by stepping forward.
    fn advance_toward(&mut self, limit: &Self, n: usize) -> usize {
        let mut taken = 0;
        while taken < n && self != limit {
            self.step_forward();
            taken += 1;
        }
        taken
    }
}

/// A position that can also move to its predecessor.
pub trait Bidirectional: Forward {
    /// Moves to the previous position. The current position must not be the
    /// start.
    fn step_backward(&mut self);

    /// Steps backward at most `n` times, stopping at `limit`.
    ///
    /// Returns the number of steps taken. `limit` must be reachable from
    /// `self` by stepping backward.
    fn retreat_toward(&mut self, limit: &Self, n: usize) -> usize {
        let mut taken = 0;
        while taken < n && self != limit {
            self.step_backward();
            taken += 1;
        }
        taken
    }
}

macro_rules! impl_index_position {
    ($($ty:ty),*) => {$(
        impl Forward for $ty {
            fn step_forward(&mut self) {
                *self += 1;
            }

            #[allow(clippy::cast_possible_truncation)]
            fn advance_toward(&mut self, limit: &Self, n: usize) -> usize {
                debug_assert!(
                    *self <= *limit,
                    "limit {} is behind position {}",
                    limit,
                    self
                );
                let room = *limit - *self;
                match <$ty>::try_from(n) {
                    Ok(step) if step < room => {
                        *self += step;
                        n
                    }
                    // room <= n, so it fits in usize
                    _ => {
                        *self = *limit;
                        room as usize
                    }
                }
            }
        }

        impl Bidirectional for $ty {
            fn step_backward(&mut self) {
                *self -= 1;
            }

            #[allow(clippy::cast_possible_truncation)]
            fn retreat_toward(&mut self, limit: &Self, n: usize) -> usize {
                debug_assert!(
                    *limit <= *self,
                    "limit {} is ahead of position {}",
                    limit,
                    self
                );
                let room = *self - *limit;
                match <$ty>::try_from(n) {
                    Ok(step) if step < room => {
                        *self -= step;
                        n
                    }
                    _ => {
                        *self = *limit;
                        room as usize
                    }
                }
            }
        }
    )*};
}

impl_index_position!(u16, u32, u64, usize);

//! Clamped neighborhoods of an element within a sequence.
//!
//! Given the bounds of a sequence, the position of an element and a bound `n`,
//! the functions in this crate compute the sub-range made of at most `n`
//! elements on either side of the element, never reaching past the bounds of
//! the sequence.
//!
//! ```
//! use neighborhood::{neighborhood, NeighborhoodExt as _};
//!
//! assert_eq!(neighborhood(0_usize, 5, 0, 2), (0, 3));
//!
//! let seq = ['a', 'b', 'c', 'd', 'e'];
//! assert_eq!(seq.neighborhood(4, 2), ['c', 'd', 'e']);
//! ```

pub use neighborhood_cursor as cursor;

pub use self::{error::*, neighborhood::*, slice::*, text::*, windows::*};

mod bound;
mod error;
mod neighborhood;
mod slice;
mod text;
mod windows;

//! Positions within a sequence and bounded stepping between them.

pub use self::{advance::*, char_cursor::*, position::*};

mod advance;
mod char_cursor;
mod position;

use std::{fmt, ptr};

use crate::position::{Bidirectional, Forward};

/// A position between the `char`s of a string slice.
///
/// The cursor stores a byte offset that always lies on a char boundary. Moving
/// it steps over one whole `char`, so bounded stepping is linear in the number
/// of steps.
#[derive(Clone, Copy)]
pub struct CharCursor<'a> {
    text: &'a str,
    offset: usize,
}

impl fmt::Debug for CharCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharCursor")
            .field("offset", &self.offset)
            .field("char", &self.get())
            .finish()
    }
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.text, other.text) && self.offset == other.offset
    }
}

impl Eq for CharCursor<'_> {}

impl<'a> CharCursor<'a> {
    pub fn begin(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    pub fn end(text: &'a str) -> Self {
        Self {
            text,
            offset: text.len(),
        }
    }

    /// Returns a cursor at byte `offset`, or `None` if `offset` is not a char
    /// boundary of `text`.
    pub fn at(text: &'a str, offset: usize) -> Option<Self> {
        text.is_char_boundary(offset).then_some(Self { text, offset })
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_end(&self) -> bool {
        self.offset == self.text.len()
    }

    /// The `char` starting at this position.
    pub fn get(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// The text between this cursor and `end`.
    pub fn slice_to(&self, end: &Self) -> &'a str {
        debug_assert!(ptr::eq(self.text, end.text));
        &self.text[self.offset..end.offset]
    }
}

impl Forward for CharCursor<'_> {
    fn step_forward(&mut self) {
        let ch = self.get();
        debug_assert!(ch.is_some(), "stepped past the end of the text");
        self.offset += ch.map_or(0, char::len_utf8);
    }
}

impl Bidirectional for CharCursor<'_> {
    fn step_backward(&mut self) {
        let ch = self.text[..self.offset].chars().next_back();
        debug_assert!(ch.is_some(), "stepped before the start of the text");
        self.offset -= ch.map_or(0, char::len_utf8);
    }
}

use neighborhood_cursor::CharCursor;
use num_traits::PrimInt;

use crate::{
    bound::try_steps,
    error::{Error, Result},
    neighborhood::neighborhood,
};

/// Returns at most `n` chars on either side of the char starting at byte
/// `offset`, together with that char.
#[tracing::instrument(level = "trace", skip_all, fields(offset = offset))]
pub fn char_neighborhood<N>(text: &str, offset: usize, n: N) -> Result<&str>
where
    N: PrimInt,
{
    let n = try_steps(n)?;
    if offset >= text.len() {
        return Err(Error::ElementOutOfRange {
            index: offset,
            len: text.len(),
        });
    }
    let element = CharCursor::at(text, offset).ok_or(Error::NotCharBoundary { offset })?;

    let (start, end) = neighborhood(
        CharCursor::begin(text),
        CharCursor::end(text),
        element,
        n,
    );
    tracing::trace!(start = start.offset(), end = end.offset());
    Ok(start.slice_to(&end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(char_neighborhood("abcde", 2, 1), Ok("bcd"));
        assert_eq!(char_neighborhood("abcde", 0, 2), Ok("abc"));
        assert_eq!(char_neighborhood("abcde", 4, 2), Ok("cde"));
        assert_eq!(char_neighborhood("a", 0, 5), Ok("a"));
    }

    #[test]
    fn multibyte() {
        let text = "日本語のテキスト";
        let offset = "日本語".len();
        assert_eq!(char_neighborhood(text, offset, 0), Ok("の"));
        assert_eq!(char_neighborhood(text, offset, 2), Ok("本語のテキ"));
        assert_eq!(char_neighborhood(text, offset, 100), Ok(text));
    }

    #[test]
    fn errors() {
        assert_eq!(
            char_neighborhood("日本", 1, 1),
            Err(Error::NotCharBoundary { offset: 1 })
        );
        assert_eq!(
            char_neighborhood("abc", 3, 1),
            Err(Error::ElementOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(char_neighborhood("abc", 1, -1), Err(Error::NegativeBound));
    }
}

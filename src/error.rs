#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("neighborhood bound must be non-negative")]
    NegativeBound,
    #[error("element {index} is out of range for a sequence of length {len}")]
    ElementOutOfRange { index: usize, len: usize },
    #[error("byte offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

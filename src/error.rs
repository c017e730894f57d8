use thiserror::Error;

/// Reasons a sort call is rejected. All of them are reported before the sequence is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The sequence or the comparator was not supplied.
    #[error("{name} refers to null")]
    NullArgument { name: &'static str },

    /// `start..end` does not describe a subrange of a sequence with `len` elements.
    #[error("border params are out of range")]
    OutOfRange { start: isize, end: isize, len: usize },
}

pub type SortResult<T = ()> = Result<T, SortError>;

use thiserror::Error;

/// Errors returned by [`Alphabet`][crate::Alphabet] construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one symbol")]
    Empty,
    #[error("alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),
}

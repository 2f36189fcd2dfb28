use thiserror::Error;

/// Errors returned by generator construction, encoding and decoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("code length must be at least 1")]
    ZeroLength,
    #[error("{base}^{length} does not fit the u64 id space")]
    MaxSupportOverflow { base: u64, length: u8 },
    #[error("id {id} is out of range; this generator supports 0..={max}")]
    IdOutOfRange { id: u64, max: u64 },
    #[error("expected a {expected}-symbol code, got {got} symbols")]
    CodeLength { expected: usize, got: usize },
    #[error("code contains symbol '{0}' that is not in the alphabet")]
    UnknownSymbol(char),
}

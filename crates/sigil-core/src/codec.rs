use crate::code::Code;

/// A reversible mapping between numeric identifiers and short codes.
///
/// Implementations are pure: encoding and decoding touch no shared
/// mutable state, so a codec can be shared freely across threads.
pub trait Codec: Send + Sync {
    type Error;

    /// Renders an identifier as a short code.
    fn encode(&self, id: u64) -> Result<Code, Self::Error>;

    /// Recovers the identifier a code was produced from.
    fn decode(&self, code: &str) -> Result<u64, Self::Error>;
}

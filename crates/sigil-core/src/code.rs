use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A fixed-length invite code produced by a codec.
///
/// Codes are transient values: nothing maps them back to an identifier
/// except the codec that produced them. Stored inline as a [`SmolStr`]
/// since codes are short.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Code(SmolStr);

impl Code {
    /// Wraps a string produced by a trusted codec.
    ///
    /// Use this only for codec output; it performs no validation
    /// against any alphabet or length.
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Code").field(&self.0).finish()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Alphabet membership can only be checked by the codec that owns
        // the alphabet; deserialization accepts any string and leaves
        // validation to decode.
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

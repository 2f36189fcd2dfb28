//! Core types and traits for the sigil invite-code codec.
//!
//! This crate provides the value types (`Alphabet`, `Code`) and the
//! `Codec` trait shared by codec implementations.

pub mod alphabet;
pub mod code;
pub mod codec;
pub mod error;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use code::Code;
pub use codec::Codec;
pub use error::AlphabetError;

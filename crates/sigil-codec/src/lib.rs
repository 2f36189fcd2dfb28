//! The sigil invite-code generator.
//!
//! [`Generator`] maps a `u64` identifier to a fixed-length code over a
//! configurable alphabet, and back. The mapping is a diffusion step
//! (every digit is entangled with the least-significant digit) followed
//! by a coprime-driven position permutation, so consecutive identifiers
//! do not produce visibly related codes.
//!
//! This is obfuscation, not cryptography: anyone holding the alphabet
//! and code length can invert it.

mod coprime;
pub mod error;
mod generator;

pub use error::Error;
pub use generator::{Generator, GeneratorSettings};

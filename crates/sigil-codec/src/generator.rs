use crate::coprime::min_coprime;
use crate::error::Error;
use sigil_core::{Alphabet, Code, Codec};
use typed_builder::TypedBuilder;

/// Configures a [`Generator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorSettings {
    /// Symbols used to render digits. Its cardinality is the numeric
    /// base of the codec.
    #[builder(default)]
    pub alphabet: Alphabet,
    /// Number of symbols per emitted code, in the range `1..=255`.
    #[builder(default = 6)]
    pub length: u8,
}

/// A reversible id-to-code codec over a fixed alphabet and code length.
///
/// All parameters are derived once at construction and never change, so
/// a generator can serve concurrent encode/decode calls without
/// locking. Every identifier in `0..=max_support_id()` maps to a unique
/// code of exactly `length` symbols.
#[derive(Debug, Clone)]
pub struct Generator {
    alphabet: Alphabet,
    length: usize,
    base: u64,
    /// Smallest integer >= 2 coprime with `length`. Drives the position
    /// permutation: `i -> (i * coprime) % length` is a bijection on
    /// `0..length` exactly because of the coprimality.
    coprime: usize,
    /// `base * length`. A multiple of `base`, added before the decode
    /// subtraction so the operand never goes negative.
    decode_factor: u64,
    max_support: u64,
}

impl Generator {
    /// Derives the codec parameters from `settings`.
    ///
    /// Fails if the length is zero or if `base^length` exceeds the
    /// `u64` id space, so a constructed generator always covers its
    /// full advertised range.
    pub fn new(settings: GeneratorSettings) -> Result<Self, Error> {
        if settings.length == 0 {
            return Err(Error::ZeroLength);
        }

        let length = usize::from(settings.length);
        let base = settings.alphabet.len() as u64;
        let max_support = base
            .checked_pow(u32::from(settings.length))
            .ok_or(Error::MaxSupportOverflow {
                base,
                length: settings.length,
            })?
            - 1;

        Ok(Self {
            alphabet: settings.alphabet,
            length,
            base,
            coprime: min_coprime(length as u64) as usize,
            decode_factor: base * length as u64,
            max_support,
        })
    }

    /// The largest identifier this generator can encode.
    pub fn max_support_id(&self) -> u64 {
        self.max_support
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn coprime(&self) -> usize {
        self.coprime
    }

    /// Renders `id` as a `length`-symbol code.
    ///
    /// Decomposes `id` into base-`base` digits least-significant first,
    /// diffusing each digit with the least-significant one as it is
    /// extracted, then emits the digits in coprime-permuted order.
    pub fn encode(&self, id: u64) -> Result<Code, Error> {
        if id > self.max_support {
            return Err(Error::IdOutOfRange {
                id,
                max: self.max_support,
            });
        }

        let mut rest = id;
        let mut diffused = vec![0u64; self.length];
        for i in 0..self.length {
            let digit = rest % self.base;
            // diffused[0] is the raw least-significant digit: at i = 0
            // the added term is zero, and later positions only read it.
            diffused[i] = (digit + i as u64 * diffused[0]) % self.base;
            rest /= self.base;
        }

        let mut code = String::with_capacity(self.length);
        for i in 0..self.length {
            let n = i * self.coprime % self.length;
            code.push(self.alphabet.symbol(diffused[n] as usize));
        }

        Ok(Code::new_unchecked(code))
    }

    /// Recovers the identifier `code` was produced from.
    ///
    /// Rejects codes of the wrong length and codes containing symbols
    /// outside the alphabet, instead of silently decoding them to a
    /// bogus identifier.
    pub fn decode(&self, code: &str) -> Result<u64, Error> {
        let got = code.chars().count();
        if got != self.length {
            return Err(Error::CodeLength {
                expected: self.length,
                got,
            });
        }

        // Undo the permutation: the same index map that read position n
        // during encode now places position i's digit back at n.
        let mut diffused = vec![0u64; self.length];
        for (i, symbol) in code.chars().enumerate() {
            let digit = self
                .alphabet
                .position(symbol)
                .ok_or(Error::UnknownSymbol(symbol))?;
            diffused[i * self.coprime % self.length] = digit as u64;
        }

        // Undo the diffusion while reassembling, most-significant digit
        // first. decode_factor keeps the subtraction non-negative
        // without changing the residue mod base.
        let mut id = 0u64;
        for i in (0..self.length).rev() {
            id *= self.base;
            id += (diffused[i] + self.decode_factor - diffused[0] * i as u64) % self.base;
        }

        Ok(id)
    }
}

impl Codec for Generator {
    type Error = Error;

    fn encode(&self, id: u64) -> Result<Code, Self::Error> {
        Generator::encode(self, id)
    }

    fn decode(&self, code: &str) -> Result<u64, Self::Error> {
        Generator::decode(self, code)
    }
}

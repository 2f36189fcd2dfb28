use crate::error::AlphabetError;

/// The 58-symbol charset historically used for issued invite codes.
///
/// The ordering is deliberate: it is part of the codec's parameters, and
/// reordering it changes every code a generator emits.
pub const DEFAULT_ALPHABET: &str = "97FEMpQdLjq2ca3yGU5ZrHB84bDznYkWeRSgKoXmJh6itCuNvATsPxwVf";

/// An ordered set of distinct symbols used to render digits as characters.
///
/// The alphabet's cardinality is the numeric base of the codec; the
/// position of a symbol is the digit value it stands for. Duplicate
/// symbols would make decoding ambiguous, so they are rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the given symbols, in order.
    ///
    /// Fails if `symbols` is empty or contains a repeated character.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();
        Self::validate(&symbols)?;
        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the numeric base of the codec.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol standing for digit value `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Codec implementations only
    /// produce indices reduced modulo the base, so this is an internal
    /// invariant, not an input condition.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the digit value of `symbol`, or `None` if the symbol is
    /// not part of this alphabet.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    fn validate(symbols: &[char]) -> Result<(), AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
        }

        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET).expect("default alphabet symbols are distinct")
    }
}

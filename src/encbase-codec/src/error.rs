use std::string::FromUtf8Error;

use thiserror::Error;

use crate::{MAX_ALPHABET_LEN, MAX_BITS_PER_SYMBOL};

/// Reasons for rejecting a caller-supplied alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The alphabet has no symbols at all.
    #[error("alphabet must not be empty")]
    Empty,

    /// A single symbol cannot encode any information.
    #[error("alphabet needs at least 2 symbols, got {0}")]
    TooShort(usize),

    /// More symbols than an 8-bit symbol can address.
    #[error("alphabet of {0} symbols exceeds the limit of {max}", max = MAX_ALPHABET_LEN)]
    TooLong(usize),

    /// A symbol occurs more than once.
    #[error("duplicate symbol {0} in alphabet")]
    Duplicate(String),

    /// Multi-character symbols must all share one length.
    #[error("symbols must be {expected} characters long, found one with {actual}")]
    UnevenSymbols { expected: usize, actual: usize },

    /// Multi-character alphabets cannot contain empty symbols.
    #[error("symbols must not be empty")]
    EmptySymbol,
}

/// Errors that may occur while setting up or running a transcoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The alphabet failed validation.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// An explicit symbol width was out of the supported range.
    #[error("symbol width must be between 1 and {max} bits, got {0}", max = MAX_BITS_PER_SYMBOL)]
    InvalidBitWidth(u32),

    /// Encoded input contained a symbol that is neither part of the
    /// alphabet nor a declared alias.
    #[error("unknown symbol {0} in encoded input")]
    UnknownSymbol(String),

    /// An alphabet with unused code points was asked to encode one
    /// of them.
    #[error("no symbol for value {index} in an alphabet of {len} symbols")]
    UnmappedIndex { index: u32, len: usize },

    /// Encoded input ended in a group shorter than the symbol length.
    #[error("truncated trailing group: expected {expected} characters, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// An alias was declared for a symbol outside of the alphabet.
    #[error("alias target {0} is not part of the alphabet")]
    UnknownCanonical(String),

    /// An alias collides with an alphabet symbol, a separator or
    /// another alias.
    #[error("alias {0} collides with an existing symbol")]
    AliasCollision(String),

    /// A separator is also used to encode values.
    #[error("separator {0} collides with an existing symbol")]
    SeparatorCollision(String),

    /// Decoded bytes did not form valid UTF-8 text.
    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),
}

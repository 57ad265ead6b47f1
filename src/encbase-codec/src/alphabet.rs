use std::{collections::HashSet, fmt, hash::Hash, str::FromStr};

use encbase_bit_buf::utils::mask;

use crate::{AlphabetError, DecodeTable, Encoder, Error};

/// The widest symbol the bit packing engine supports, in bits.
pub const MAX_BITS_PER_SYMBOL: u32 = 16;

/// The largest supported alphabet.
///
/// Symbols of up to 8 bits never need a whole byte of padding, which
/// is what makes every encoding exactly reversible.
pub const MAX_ALPHABET_LEN: usize = 1 << u8::BITS;

/// Gets the smallest symbol width in bits that can address `len`
/// distinct values.
///
/// Widths start at 1 bit, even for degenerate lengths.
#[inline]
pub fn bits_for_len(len: usize) -> u32 {
    match len.checked_next_power_of_two() {
        Some(capacity) => capacity.trailing_zeros().max(1),
        None => usize::BITS,
    }
}

/// Validates an alphabet and derives the number of bits each of
/// its symbols encodes.
///
/// An alphabet is valid when it has at least 2 symbols which are
/// pairwise distinct. The length does not need to be a power of
/// two; a 5 symbol alphabet encodes 3 bits per symbol and leaves
/// 3 code points unused.
pub fn validate<S: Eq + Hash + fmt::Debug>(symbols: &[S]) -> Result<u32, AlphabetError> {
    match symbols.len() {
        0 => return Err(AlphabetError::Empty),
        len @ 1 => return Err(AlphabetError::TooShort(len)),
        len if len > MAX_ALPHABET_LEN => return Err(AlphabetError::TooLong(len)),
        _ => {}
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    if let Some(duplicate) = symbols.iter().find(|&s| !seen.insert(s)) {
        return Err(AlphabetError::Duplicate(format!("{duplicate:?}")));
    }

    Ok(bits_for_len(symbols.len()))
}

/// A validated, ordered set of symbols.
///
/// The position of a symbol in the alphabet is the value it
/// encodes. Alphabets are immutable once constructed and are
/// only ever borrowed by encoders and decoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet<S = char> {
    symbols: Vec<S>,
    bits: u32,
}

impl<S: Eq + Hash + fmt::Debug> Alphabet<S> {
    /// Validates `symbols` and wraps them into an [`Alphabet`].
    pub fn new(symbols: Vec<S>) -> Result<Self, Error> {
        let bits = validate(&symbols)?;
        Ok(Self { symbols, bits })
    }
}

impl<S> Alphabet<S> {
    // Callers vouch for `symbols` being a valid alphabet.
    pub(crate) fn new_unchecked(symbols: Vec<S>) -> Self {
        let bits = bits_for_len(symbols.len());
        Self { symbols, bits }
    }

    /// Gets the number of symbols in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; valid alphabets hold at least 2 symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Gets the number of bits every symbol encodes.
    #[inline]
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }

    /// Gets the mask for extracting one symbol's worth of bits.
    #[inline]
    pub fn mask(&self) -> u32 {
        mask(self.bits)
    }

    /// Gets the number of values the symbol width can express but
    /// the alphabet has no symbol for.
    #[inline]
    pub fn unused_code_points(&self) -> usize {
        (1usize << self.bits) - self.symbols.len()
    }

    /// Gets the symbols in value order.
    #[inline]
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Gets the symbol encoding `index`, if there is one.
    #[inline]
    pub fn symbol(&self, index: u32) -> Option<&S> {
        self.symbols.get(index as usize)
    }
}

impl<S: Clone> Alphabet<S> {
    /// Lazily encodes `bytes` into symbols of this alphabet.
    ///
    /// The final symbol is zero-padded when the input's bit length
    /// is not a multiple of [`Self::bits_per_symbol`]. Alphabets with
    /// unused code points yield [`Error::UnmappedIndex`] when the
    /// input produces one of those values.
    pub fn encode<I>(&self, bytes: I) -> Encoder<I::IntoIter, impl FnMut(u32) -> Result<S, Error>>
    where
        I: IntoIterator<Item = u8>,
    {
        let len = self.symbols.len();
        Encoder::new(bytes.into_iter(), self.bits, move |index| {
            self.symbol(index)
                .cloned()
                .ok_or(Error::UnmappedIndex { index, len })
        })
    }
}

impl<S: Eq + Hash + Clone + fmt::Debug> Alphabet<S> {
    /// Builds the [`DecodeTable`] for reversing this alphabet's
    /// encoding.
    ///
    /// Aliases and separators can be attached to the table before
    /// decoding.
    pub fn decoder(&self) -> DecodeTable<'_, S> {
        DecodeTable::new(self)
    }
}

impl Alphabet<char> {
    /// Encodes `bytes` and collects the symbols into a [`String`].
    pub fn encode_to_string(&self, bytes: &[u8]) -> Result<String, Error> {
        self.encode(bytes.iter().copied()).collect()
    }
}

impl FromStr for Alphabet<char> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for Alphabet<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

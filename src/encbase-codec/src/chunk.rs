//! Alphabets whose symbols are fixed-width groups of characters.
//!
//! Text encoded with such an alphabet carries no symbol boundaries,
//! so it is cut into groups of the symbol length before decoding.
//! Unlike trailing bits, a truncated trailing group cannot be told
//! apart from damaged input and is rejected.

use std::collections::HashSet;

use crate::{AliasTable, Alphabet, AlphabetError, DecodeTable, Decoder, Encoder, Error};

/// One fixed-width group of characters, or the reason it is malformed.
pub type Chunk = Result<String, Error>;

/// Groups `chars` into strings of `code_length` characters.
pub fn chunks<I>(chars: I, code_length: usize) -> Chunks<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    Chunks {
        chars: chars.into_iter(),
        code_length,
        done: false,
    }
}

/// An iterator over fixed-width character groups.
///
/// Yields [`Error::MalformedInput`] for a non-empty final group
/// shorter than the code length, and ends afterwards.
#[derive(Clone, Debug)]
pub struct Chunks<I> {
    chars: I,
    code_length: usize,
    done: bool,
}

impl<I: Iterator<Item = char>> Iterator for Chunks<I> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk: String = self.chars.by_ref().take(self.code_length).collect();
        match chunk.chars().count() {
            0 => {
                self.done = true;
                None
            }

            actual if actual < self.code_length => {
                self.done = true;
                Some(Err(Error::MalformedInput {
                    expected: self.code_length,
                    actual,
                }))
            }

            _ => Some(Ok(chunk)),
        }
    }
}

/// An [`Alphabet`] of equally long multi-character symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkedAlphabet {
    alphabet: Alphabet<String>,
    code_length: usize,
}

impl ChunkedAlphabet {
    /// Validates `symbols` as an alphabet and checks that they all
    /// share the same non-zero character count.
    pub fn new(symbols: Vec<String>) -> Result<Self, Error> {
        let code_length = symbols.first().map_or(0, |s| s.chars().count());
        if code_length == 0 && !symbols.is_empty() {
            return Err(AlphabetError::EmptySymbol.into());
        }

        if let Some(actual) = symbols
            .iter()
            .map(|s| s.chars().count())
            .find(|&n| n != code_length)
        {
            return Err(AlphabetError::UnevenSymbols {
                expected: code_length,
                actual,
            }
            .into());
        }

        Alphabet::new(symbols).map(|alphabet| Self {
            alphabet,
            code_length,
        })
    }

    pub(crate) fn new_unchecked(symbols: Vec<String>, code_length: usize) -> Self {
        Self {
            alphabet: Alphabet::new_unchecked(symbols),
            code_length,
        }
    }

    /// Gets the underlying alphabet.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet<String> {
        &self.alphabet
    }

    /// Gets the number of characters in every symbol.
    #[inline]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Lazily encodes `bytes` into multi-character symbols.
    pub fn encode<I>(
        &self,
        bytes: I,
    ) -> Encoder<I::IntoIter, impl FnMut(u32) -> Result<String, Error>>
    where
        I: IntoIterator<Item = u8>,
    {
        self.alphabet.encode(bytes)
    }

    /// Encodes `bytes` and concatenates the symbols into a [`String`].
    pub fn encode_to_string(&self, bytes: &[u8]) -> Result<String, Error> {
        let mut out = String::with_capacity(bytes.len() * self.code_length);
        for symbol in self.encode(bytes.iter().copied()) {
            out.push_str(&symbol?);
        }

        Ok(out)
    }

    /// Builds the [`ChunkedDecodeTable`] for this alphabet.
    pub fn decoder(&self) -> ChunkedDecodeTable<'_> {
        ChunkedDecodeTable {
            table: self.alphabet.decoder(),
            code_length: self.code_length,
            separators: HashSet::new(),
        }
    }
}

/// Decodes text produced by a [`ChunkedAlphabet`].
///
/// Separators are single characters here. They are stripped from
/// the text before it is cut into groups, so they may appear
/// anywhere, even in the middle of a symbol.
#[derive(Clone, Debug)]
pub struct ChunkedDecodeTable<'a> {
    table: DecodeTable<'a, String>,
    code_length: usize,
    separators: HashSet<char>,
}

impl ChunkedDecodeTable<'_> {
    /// Merges `aliases` into the table.
    ///
    /// Aliases must have the same length as the alphabet symbols and
    /// must not contain any separator characters.
    pub fn with_aliases(mut self, aliases: &AliasTable<String>) -> Result<Self, Error> {
        for (_, alias) in aliases.iter() {
            let actual = alias.chars().count();
            if actual != self.code_length {
                return Err(AlphabetError::UnevenSymbols {
                    expected: self.code_length,
                    actual,
                }
                .into());
            }
            if alias.chars().any(|c| self.separators.contains(&c)) {
                return Err(Error::AliasCollision(format!("{alias:?}")));
            }
        }

        self.table = self.table.with_aliases(aliases)?;
        Ok(self)
    }

    /// Declares separator characters which the decoder skips over.
    ///
    /// Fails when a separator occurs inside any symbol or alias.
    pub fn with_separators<I>(mut self, separators: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = char>,
    {
        for separator in separators {
            let collides = self
                .table
                .alphabet()
                .symbols()
                .iter()
                .chain(self.table.aliases())
                .any(|s| s.contains(separator));
            if collides {
                return Err(Error::SeparatorCollision(format!("{separator:?}")));
            }

            self.separators.insert(separator);
        }

        Ok(self)
    }

    /// Lazily decodes `text` into bytes.
    pub fn decode<'s>(
        &'s self,
        text: &'s str,
    ) -> Decoder<impl Iterator<Item = Chunk>, impl FnMut(Chunk) -> Result<u32, Error>> {
        let retained = text.chars().filter(move |c| !self.separators.contains(c));

        Decoder::new(
            chunks(retained, self.code_length),
            self.table.alphabet().bits_per_symbol(),
            move |chunk| {
                let chunk = chunk?;
                self.table
                    .value(&chunk)
                    .ok_or_else(|| Error::UnknownSymbol(format!("{chunk:?}")))
            },
        )
    }

    /// Decodes `text` and collects the bytes into a [`Vec`].
    pub fn decode_to_vec(&self, text: &str) -> Result<Vec<u8>, Error> {
        self.decode(text).collect()
    }
}

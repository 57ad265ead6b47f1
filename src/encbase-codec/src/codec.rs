//! The bit packing engine shared by all alphabets.
//!
//! Both directions are pull-based iterators which own their own
//! [`BitAccumulator`] and perform no work until they are advanced.
//! The mapping between symbol values and symbols is injected as a
//! function, so the engine works with any symbol type.
//!
//! # Padding
//!
//! When the bit length of the input is not a multiple of the symbol
//! width, [`Encoder`] zero-pads the final symbol at its low end. No
//! bit count travels with the encoded data; [`Decoder`] instead
//! drops whatever fewer than 8 bits remain buffered once its input
//! runs dry. For symbols of up to 8 bits the padding is always
//! shorter than a byte, so this restores the original bytes exactly.
//!
//! Wider symbols are only reachable through [`encode_with`] and
//! [`decode_with`]. Their padding may span whole bytes, which then
//! come back out of the decoder as trailing zero bytes.

use encbase_bit_buf::BitAccumulator;

use crate::{Error, MAX_BITS_PER_SYMBOL};

fn check_bits(bits: u32) -> Result<u32, Error> {
    if (1..=MAX_BITS_PER_SYMBOL).contains(&bits) {
        Ok(bits)
    } else {
        Err(Error::InvalidBitWidth(bits))
    }
}

/// Lazily encodes `bytes` into symbols of `bits_per_symbol` bits,
/// mapping each symbol value through `index_to_symbol`.
///
/// This is the generic variant behind [`crate::Alphabet::encode`]
/// for symbol types which are not backed by an [`crate::Alphabet`].
pub fn encode_with<I, F, S>(
    bytes: I,
    bits_per_symbol: u32,
    index_to_symbol: F,
) -> Result<Encoder<I::IntoIter, F>, Error>
where
    I: IntoIterator<Item = u8>,
    F: FnMut(u32) -> Result<S, Error>,
{
    let bits = check_bits(bits_per_symbol)?;
    Ok(Encoder::new(bytes.into_iter(), bits, index_to_symbol))
}

/// Lazily decodes `symbols` of `bits_per_symbol` bits each back into
/// bytes, resolving every symbol through `symbol_to_index`.
///
/// Values returned by `symbol_to_index` are truncated to the symbol
/// width. Separators must be filtered from `symbols` beforehand;
/// [`crate::DecodeTable`] takes care of that.
pub fn decode_with<I, F, T>(
    symbols: I,
    bits_per_symbol: u32,
    symbol_to_index: F,
) -> Result<Decoder<I::IntoIter, F>, Error>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<u32, Error>,
{
    let bits = check_bits(bits_per_symbol)?;
    Ok(Decoder::new(symbols.into_iter(), bits, symbol_to_index))
}

/// An iterator which packs bytes into symbols, MSB first.
///
/// Yields one `Result` per symbol. After the first error, the
/// iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Encoder<I, F> {
    bytes: I,
    map: F,
    bits: u32,
    acc: BitAccumulator,
    done: bool,
}

impl<I, F> Encoder<I, F> {
    pub(crate) fn new(bytes: I, bits: u32, map: F) -> Self {
        Self {
            bytes,
            map,
            bits,
            acc: BitAccumulator::new(),
            done: false,
        }
    }

    /// Gets the number of bits every produced symbol encodes.
    #[inline]
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }
}

impl<I, F, S> Encoder<I, F>
where
    F: FnMut(u32) -> Result<S, Error>,
{
    fn emit(&mut self, index: u32) -> Result<S, Error> {
        let symbol = (self.map)(index);
        self.done |= symbol.is_err();
        symbol
    }
}

impl<I, F, S> Iterator for Encoder<I, F>
where
    I: Iterator<Item = u8>,
    F: FnMut(u32) -> Result<S, Error>,
{
    type Item = Result<S, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(index) = self.acc.pull(self.bits) {
                return Some(self.emit(index));
            }

            match self.bytes.next() {
                Some(byte) => self.acc.push(byte as u32, u8::BITS),

                None => {
                    self.done = true;
                    return self.acc.pull_padded(self.bits).map(|index| self.emit(index));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let bits = self.bits as usize;
        let level = self.acc.level() as usize;
        let symbols = |nbytes: usize| nbytes.checked_mul(8).map(|n| (n + level).div_ceil(bits));

        // An unmapped index ends the stream early, so only the next
        // item is certain.
        let (lower, upper) = self.bytes.size_hint();
        (
            symbols(lower).unwrap_or(0).min(1),
            upper.and_then(symbols),
        )
    }
}

/// An iterator which unpacks symbols into bytes, MSB first.
///
/// Yields one `Result` per byte. A symbol that fails to resolve is
/// reported where it occurs in the stream; the iterator is exhausted
/// afterwards.
#[derive(Clone, Debug)]
pub struct Decoder<I, F> {
    symbols: I,
    map: F,
    bits: u32,
    acc: BitAccumulator,
    done: bool,
}

impl<I, F> Decoder<I, F> {
    pub(crate) fn new(symbols: I, bits: u32, map: F) -> Self {
        Self {
            symbols,
            map,
            bits,
            acc: BitAccumulator::new(),
            done: false,
        }
    }

    /// Gets the number of bits every consumed symbol encodes.
    #[inline]
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits
    }
}

impl<I, F, T> Iterator for Decoder<I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(T) -> Result<u32, Error>,
{
    type Item = Result<u8, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(byte) = self.acc.pull(u8::BITS) {
                return Some(Ok(byte as u8));
            }
            if self.done {
                return None;
            }

            let Some(symbol) = self.symbols.next() else {
                self.done = true;

                let padding = self.acc.clear();
                if padding > 0 {
                    log::trace!("Discarding {padding} trailing padding bits");
                }

                return None;
            };

            match (self.map)(symbol) {
                Ok(value) => self.acc.push(value, self.bits),
                Err(e) => {
                    self.done = true;
                    self.acc.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

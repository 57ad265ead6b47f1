//! Standard alphabets.
//!
//! These are plain data; nothing in the codec prefers one of them
//! over a caller-supplied alphabet.

use phf::phf_map;

use crate::{AliasTable, ChunkedAlphabet};

/// Binary digits.
pub const BASE2: &str = "01";

/// Quaternary digits.
pub const BASE4: &str = "0123";

/// Octal digits.
pub const BASE8: &str = "01234567";

/// Uppercase hexadecimal digits.
pub const BASE16: &str = "0123456789ABCDEF";

/// Crockford's base32 alphabet.
///
/// `I`, `L`, `O` and `U` are left out so that the alphabet survives
/// being read aloud or retyped; see [`crockford_aliases`].
pub const BASE32: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The standard base64 alphabet of RFC 4648.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

static NAMED: phf::Map<&'static str, &'static str> = phf_map! {
    "base2" => BASE2,
    "base4" => BASE4,
    "base8" => BASE8,
    "base16" => BASE16,
    "hex" => BASE16,
    "base32" => BASE32,
    "base64" => BASE64,
};

/// Looks up a standard single-character alphabet by name.
pub fn by_name(name: &str) -> Option<&'static str> {
    NAMED.get(name).copied()
}

/// Gets the names understood by [`by_name`], sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = NAMED.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Gets the alias groups for decoding [`BASE32`] tolerantly.
///
/// `O` reads as `0`, `I` and `L` read as `1`, and `U` reads as `V`.
pub fn crockford_aliases() -> AliasTable<char> {
    AliasTable::new()
        .with('0', ['O'])
        .with('1', ['I', 'L'])
        .with('V', ['U'])
}

/// Gets the alphabet of the 256 uppercase two-digit hex pairs.
///
/// Every symbol encodes exactly one byte.
pub fn hex_pairs() -> ChunkedAlphabet {
    let symbols = (0..=u8::MAX).map(|b| format!("{b:02X}")).collect();
    ChunkedAlphabet::new_unchecked(symbols, 2)
}

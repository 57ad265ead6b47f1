//! Conversions between UTF-8 text and its encoded form.

use crate::{Alphabet, DecodeTable, Error};

/// Encodes the UTF-8 bytes of `text` with `alphabet`.
pub fn encode_str(text: &str, alphabet: &Alphabet<char>) -> Result<String, Error> {
    alphabet.encode_to_string(text.as_bytes())
}

/// Decodes `encoded` with `table` and interprets the bytes as UTF-8.
pub fn decode_to_string(encoded: &str, table: &DecodeTable<'_, char>) -> Result<String, Error> {
    let bytes = table.decode_to_vec(encoded.chars())?;
    String::from_utf8(bytes).map_err(Into::into)
}

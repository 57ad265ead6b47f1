//! Generic base-N transcoding between bytes and alphabet symbols.
//!
//! An [`Alphabet`] of N symbols encodes `ceil(log2(N))` bits per
//! symbol. Bytes are packed MSB-first into symbols of that width,
//! so the width does not need to divide 8; base32 symbols carry
//! 5 bits and straddle byte boundaries freely.
//!
//! Decoding goes through a [`DecodeTable`], which may additionally
//! declare aliases (symbols that decode like another symbol) and
//! separators (symbols that are skipped entirely).
//!
//! ```
//! use encbase_codec::{alphabets, Alphabet};
//!
//! let base32: Alphabet = alphabets::BASE32.parse()?;
//! assert_eq!(base32.encode_to_string(&[255])?, "ZW");
//!
//! let table = base32
//!     .decoder()
//!     .with_aliases(&alphabets::crockford_aliases())?
//!     .with_separators(['-'])?;
//! assert_eq!(table.decode_to_vec("Z-W".chars())?, [255]);
//! # Ok::<(), encbase_codec::Error>(())
//! ```
//!
//! Encoders and decoders are lazy iterators that hold nothing but
//! their own bit accumulator, so they can be consumed incrementally
//! and dropped at any point.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod alphabet;
pub use alphabet::*;

pub mod alphabets;

mod chunk;
pub use chunk::*;

mod codec;
pub use codec::*;

mod error;
pub use error::*;

pub mod layout;

mod table;
pub use table::*;

pub mod text;

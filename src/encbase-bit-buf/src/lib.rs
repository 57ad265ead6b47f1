//! Provides bit level accumulation of data for symbol transcoding.
//!
//! Base-N encodings slice a byte stream into symbols whose width
//! is rarely a multiple of 8 bits, so symbol boundaries almost
//! never line up with byte boundaries. The [`BitAccumulator`]
//! bridges the two by buffering bits in a small register and
//! handing them out again in whatever width is asked for.
//!
//! # Implementation
//!
//! Bits are kept MSB-first: new bits enter at the low end of the
//! register and the oldest bits are pulled from the top of the
//! valid window. Bits that were already pulled are masked away
//! on every push, so the register never holds more than
//! [`BitAccumulator::level`] meaningful bits.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod accumulator;
pub use accumulator::*;

pub mod utils;

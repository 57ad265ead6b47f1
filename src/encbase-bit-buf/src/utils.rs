//! Miscellaneous utilities for working with bits.

/// Gets a mask covering the low `nbits` bits of a [`u32`].
///
/// Widths of 32 and above saturate to [`u32::MAX`].
#[inline]
pub const fn mask(nbits: u32) -> u32 {
    if nbits >= u32::BITS {
        u32::MAX
    } else {
        (1 << nbits) - 1
    }
}

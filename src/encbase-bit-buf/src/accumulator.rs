use crate::utils::mask;

// The total number of bits the register can hold at once.
const CAPACITY: u32 = u32::BITS;

/// A register which buffers bits between differently sized units.
///
/// Bits are pushed in at the LSB side and pulled out from the MSB
/// side of the valid window, so the first bit pushed is the first
/// bit pulled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    // The bit register. Only the low `level` bits are meaningful.
    work: u32,

    // How many bits in `work` are currently valid.
    level: u32,
}

impl BitAccumulator {
    /// Creates an empty [`BitAccumulator`].
    pub const fn new() -> Self {
        Self { work: 0, level: 0 }
    }

    /// Gets the number of bits currently buffered.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether no bits are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// Indicates how many more bits can be pushed before bits
    /// must be pulled again.
    #[inline]
    pub fn remaining(&self) -> u32 {
        CAPACITY - self.level
    }

    /// Appends the low `nbits` bits of `value` behind the bits
    /// that are already buffered.
    ///
    /// `nbits` must not exceed [`Self::remaining`].
    #[inline]
    pub fn push(&mut self, value: u32, nbits: u32) {
        debug_assert!(nbits <= self.remaining());

        // Drop everything that was pulled already before making room.
        let kept = self.work & mask(self.level);
        self.work = kept.checked_shl(nbits).unwrap_or(0) | (value & mask(nbits));
        self.level += nbits;
    }

    /// Takes the `nbits` oldest buffered bits, if that many are
    /// available.
    ///
    /// Pulling zero bits always yields [`None`].
    #[inline]
    pub fn pull(&mut self, nbits: u32) -> Option<u32> {
        if nbits == 0 || nbits > self.level {
            return None;
        }

        self.level -= nbits;
        let value = (self.work >> self.level) & mask(nbits);
        self.work &= mask(self.level);

        Some(value)
    }

    /// Like [`Self::pull`], but a partial unit of fewer than `nbits`
    /// bits is returned too, zero-padded at the low end.
    ///
    /// Yields [`None`] once the accumulator is empty.
    pub fn pull_padded(&mut self, nbits: u32) -> Option<u32> {
        if nbits == 0 || self.level == 0 {
            return None;
        }
        if self.level >= nbits {
            return self.pull(nbits);
        }

        let value = (self.work << (nbits - self.level)) & mask(nbits);
        self.clear();

        Some(value)
    }

    /// Discards all buffered bits and returns how many there were.
    pub fn clear(&mut self) -> u32 {
        let level = self.level;

        self.work = 0;
        self.level = 0;

        level
    }
}

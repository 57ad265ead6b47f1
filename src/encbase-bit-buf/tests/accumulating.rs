use encbase_bit_buf::BitAccumulator;

#[test]
fn pull_whole_bytes() {
    let mut acc = BitAccumulator::new();

    acc.push(0xDE, u8::BITS);
    acc.push(0xAD, u8::BITS);
    assert_eq!(acc.level(), 16);

    assert_eq!(acc.pull(u8::BITS), Some(0xDE));
    assert_eq!(acc.pull(u8::BITS), Some(0xAD));
    assert_eq!(acc.pull(u8::BITS), None);
    assert!(acc.is_empty());
}

#[test]
fn pull_across_byte_boundaries() {
    let mut acc = BitAccumulator::new();

    // 0xFF = 11111 111..
    acc.push(0xFF, u8::BITS);
    assert_eq!(acc.pull(5), Some(0b11111));
    assert_eq!(acc.level(), 3);
    assert_eq!(acc.pull(5), None);

    // ..111 00000 + 0xA5
    acc.push(0xA5, u8::BITS);
    assert_eq!(acc.level(), 11);
    assert_eq!(acc.pull(5), Some(0b11110));
    assert_eq!(acc.pull(5), Some(0b10010));
    assert_eq!(acc.level(), 1);
}

#[test]
fn pull_padded_partial_unit() {
    let mut acc = BitAccumulator::new();

    acc.push(0xFF, u8::BITS);
    assert_eq!(acc.pull(5), Some(0b11111));

    // The remaining 3 bits are padded with 2 zero bits.
    assert_eq!(acc.pull_padded(5), Some(0b11100));
    assert!(acc.is_empty());
    assert_eq!(acc.pull_padded(5), None);
}

#[test]
fn push_narrow_units() {
    let mut acc = BitAccumulator::new();

    for value in [0b011, 0b111, 0b010] {
        acc.push(value, 3);
    }
    assert_eq!(acc.remaining(), u32::BITS - 9);

    assert_eq!(acc.pull(u8::BITS), Some(0b0111_1101));
    assert_eq!(acc.clear(), 1);
    assert!(acc.is_empty());
}

#[test]
fn push_masks_excess_bits() {
    let mut acc = BitAccumulator::new();

    acc.push(0xFFFF_FFFF, 4);
    acc.push(0, 4);

    assert_eq!(acc.pull(u8::BITS), Some(0xF0));
}

#[test]
fn wide_units() {
    let mut acc = BitAccumulator::new();

    acc.push(0xBEEF, 16);
    acc.push(0x1, 1);
    assert_eq!(acc.pull(u8::BITS), Some(0xBE));
    assert_eq!(acc.pull(u8::BITS), Some(0xEF));
    assert_eq!(acc.pull_padded(u8::BITS), Some(0x80));

    acc.push(0xDEAD_BEEF, u32::BITS);
    assert_eq!(acc.remaining(), 0);
    assert_eq!(acc.pull(u32::BITS), Some(0xDEAD_BEEF));
}

#[test]
fn pull_zero_bits() {
    let mut acc = BitAccumulator::new();

    acc.push(1, 1);
    assert_eq!(acc.pull(0), None);
    assert_eq!(acc.pull_padded(0), None);
    assert_eq!(acc.level(), 1);
}

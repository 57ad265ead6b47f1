use encbase_bit_buf::utils::mask;

#[test]
fn masks_up_to_a_byte() {
    let expected = [1, 3, 7, 15, 31, 63, 127, 255];

    for (nbits, expected) in (1..=8).zip(expected) {
        assert_eq!(mask(nbits), expected, "mask({nbits})");
    }
}

#[test]
fn saturating_masks() {
    assert_eq!(mask(0), 0);
    assert_eq!(mask(16), 0xFFFF);
    assert_eq!(mask(u32::BITS), u32::MAX);
    assert_eq!(mask(40), u32::MAX);
}

use encbase_codec::{alphabets, layout, Alphabet, Error};

#[test]
fn grouping() {
    assert_eq!(layout::group("ABCDEFGHIJK", 5, "-"), "ABCDE-FGHIJ-K");
    assert_eq!(layout::group("ABCDEFGHIJ", 5, "-"), "ABCDE-FGHIJ");
    assert_eq!(layout::group("ABC", 5, " / "), "ABC");
    assert_eq!(layout::group("", 5, "-"), "");
    assert_eq!(layout::group("ABC", 0, "-"), "ABC");
}

#[test]
fn wrapping() {
    assert_eq!(layout::wrap("0123456789", 4), "0123\n4567\n89");
}

#[test]
fn grouped_output_decodes() -> Result<(), Error> {
    let alphabet: Alphabet = alphabets::BASE32.parse()?;
    let bytes: Vec<u8> = (0..100).collect();

    let encoded = alphabet.encode_to_string(&bytes)?;
    let grouped = layout::wrap(&layout::group(&encoded, 5, "-"), 24);

    let table = alphabet.decoder().with_separators(['-', '\n'])?;
    assert_eq!(table.decode_to_vec(grouped.chars())?, bytes);

    Ok(())
}

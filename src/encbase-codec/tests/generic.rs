use encbase_codec::{decode_with, encode_with, Error};

#[test]
fn injected_mappings() -> Result<(), Error> {
    // 12-bit symbols represented as plain integers offset by 1000.
    let bytes = [0xAB, 0xCD, 0xEF, 0x01];

    let symbols: Vec<u32> = encode_with(bytes, 12, |index| Ok(index + 1000))?
        .collect::<Result<_, _>>()?;
    assert_eq!(symbols, [0xABC + 1000, 0xDEF + 1000, 0x010 + 1000]);

    let decoded: Vec<u8> =
        decode_with(symbols, 12, |symbol: u32| Ok(symbol - 1000))?.collect::<Result<_, _>>()?;
    assert_eq!(decoded, bytes);

    Ok(())
}

#[test]
fn sixteen_bit_symbols() -> Result<(), Error> {
    let bytes: Vec<u8> = (0..=u8::MAX).collect();

    for len in 0..=bytes.len() {
        let symbols: Vec<u32> =
            encode_with(bytes[..len].iter().copied(), 16, Ok)?.collect::<Result<_, _>>()?;
        assert_eq!(symbols.len(), len.div_ceil(2));

        // An odd byte count leaves a whole byte of padding behind.
        let mut expected = bytes[..len].to_vec();
        if len % 2 == 1 {
            expected.push(0);
        }

        let decoded: Vec<u8> = decode_with(symbols, 16, Ok)?.collect::<Result<_, _>>()?;
        assert_eq!(decoded, expected);
    }

    Ok(())
}

#[test]
fn mapping_errors_end_the_stream() -> Result<(), Error> {
    let mut bytes = decode_with(['a', 'b', '!', 'c'], 8, |c: char| {
        if c.is_ascii_alphabetic() {
            Ok(c as u32)
        } else {
            Err(Error::UnknownSymbol(format!("{c:?}")))
        }
    })?;

    assert_eq!(bytes.next(), Some(Ok(b'a')));
    assert_eq!(bytes.next(), Some(Ok(b'b')));
    assert_eq!(bytes.next(), Some(Err(Error::UnknownSymbol("'!'".to_owned()))));
    assert_eq!(bytes.next(), None);

    Ok(())
}

#[test]
fn reject_bit_widths() {
    let encoder = encode_with([0u8], 0, |i| Ok::<u32, Error>(i));
    assert!(matches!(encoder, Err(Error::InvalidBitWidth(0))));

    let decoder = decode_with([0u32], 17, Ok);
    assert!(matches!(decoder, Err(Error::InvalidBitWidth(17))));
}

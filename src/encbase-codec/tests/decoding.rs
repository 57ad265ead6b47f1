use encbase_codec::{alphabets, text, AliasTable, Alphabet, Error};

fn base32() -> Result<Alphabet, Error> {
    alphabets::BASE32.parse()
}

#[test]
fn alias_transparency() -> Result<(), Error> {
    let alphabet = base32()?;
    let aliases = alphabets::crockford_aliases();
    let table = alphabet.decoder().with_aliases(&aliases)?;

    let canonical = table.decode_to_vec(alphabets::BASE32.chars())?;

    for (from, to) in [('0', 'O'), ('1', 'I'), ('1', 'L'), ('V', 'U')] {
        let corrupt = alphabets::BASE32.replace(from, &to.to_string());
        assert_eq!(table.decode_to_vec(corrupt.chars())?, canonical);
    }

    let corrupt: String = alphabets::BASE32
        .chars()
        .map(|c| match c {
            '0' => 'O',
            '1' => 'L',
            'V' => 'U',
            c => c,
        })
        .collect();
    assert_eq!(table.decode_to_vec(corrupt.chars())?, canonical);

    Ok(())
}

#[test]
fn separator_transparency() -> Result<(), Error> {
    let alphabet = base32()?;
    let table = alphabet.decoder().with_separators(['-', ' ', '\n'])?;

    let plain = table.decode_to_vec(alphabets::BASE32.chars())?;

    let grouped = alphabets::BASE32
        .as_bytes()
        .chunks(5)
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("-");
    assert_eq!(table.decode_to_vec(grouped.chars())?, plain);

    let noisy = format!("\n - {}--\n", alphabets::BASE32);
    assert_eq!(table.decode_to_vec(noisy.chars())?, plain);

    Ok(())
}

#[test]
fn undeclared_separator_is_unknown() -> Result<(), Error> {
    let alphabet = base32()?;
    let table = alphabet.decoder();

    let err = table.decode_to_vec("ZW-ZW".chars()).unwrap_err();
    assert_eq!(err, Error::UnknownSymbol("'-'".to_owned()));

    Ok(())
}

#[test]
fn unknown_symbol_is_lazy() -> Result<(), Error> {
    let alphabet: Alphabet = alphabets::BASE16.parse()?;
    let table = alphabet.decoder();

    let mut bytes = table.decode("DEADxF".chars());
    assert_eq!(bytes.next(), Some(Ok(0xDE)));
    assert_eq!(bytes.next(), Some(Ok(0xAD)));
    assert_eq!(bytes.next(), Some(Err(Error::UnknownSymbol("'x'".to_owned()))));
    assert_eq!(bytes.next(), None);

    Ok(())
}

#[test]
fn trailing_bits_are_discarded() -> Result<(), Error> {
    let alphabet = base32()?;
    let table = alphabet.decoder();

    // A lone symbol holds only 5 bits.
    assert!(table.decode_to_vec("Z".chars())?.is_empty());

    // "ZZ" carries 10 bits: one byte plus 2 discarded bits.
    assert_eq!(table.decode_to_vec("ZZ".chars())?, [0xFF]);

    Ok(())
}

#[test]
fn alias_collisions() -> Result<(), Error> {
    let alphabet = base32()?;

    // Alias is already an alphabet symbol.
    let aliases = AliasTable::new().with('0', ['A']);
    assert_eq!(
        alphabet.decoder().with_aliases(&aliases).unwrap_err(),
        Error::AliasCollision("'A'".to_owned())
    );

    // Alias is declared for two canonical symbols.
    let aliases = AliasTable::new().with('0', ['O']).with('Q', ['O']);
    assert_eq!(
        alphabet.decoder().with_aliases(&aliases).unwrap_err(),
        Error::AliasCollision("'O'".to_owned())
    );

    // Canonical symbol is not part of the alphabet.
    let aliases = AliasTable::new().with('U', ['u']);
    assert_eq!(
        alphabet.decoder().with_aliases(&aliases).unwrap_err(),
        Error::UnknownCanonical("'U'".to_owned())
    );

    // Alias is a separator.
    let err = alphabet
        .decoder()
        .with_separators(['-'])?
        .with_aliases(&AliasTable::new().with('0', ['-']))
        .unwrap_err();
    assert_eq!(err, Error::AliasCollision("'-'".to_owned()));

    Ok(())
}

#[test]
fn separator_collisions() -> Result<(), Error> {
    let alphabet = base32()?;

    let err = alphabet.decoder().with_separators(['-', 'Z']).unwrap_err();
    assert_eq!(err, Error::SeparatorCollision("'Z'".to_owned()));

    let err = alphabet
        .decoder()
        .with_aliases(&alphabets::crockford_aliases())?
        .with_separators(['O'])
        .unwrap_err();
    assert_eq!(err, Error::SeparatorCollision("'O'".to_owned()));

    Ok(())
}

#[test]
fn alias_table_bookkeeping() -> Result<(), Error> {
    let aliases = alphabets::crockford_aliases();
    assert_eq!(aliases.len(), 4);
    assert_eq!(
        aliases.iter().collect::<Vec<_>>(),
        [(&'0', &'O'), (&'1', &'I'), (&'1', &'L'), (&'V', &'U')]
    );

    let alphabet = base32()?;
    let table = alphabet.decoder().with_aliases(&aliases)?;
    assert_eq!(table.value(&'L'), table.value(&'1'));
    assert_eq!(table.aliases().count(), 4);

    Ok(())
}

#[test]
fn text_round_trip() -> Result<(), Error> {
    let alphabet: Alphabet = alphabets::BASE64.parse()?;
    let table = alphabet.decoder();

    let encoded = text::encode_str("grüße, 世界", &alphabet)?;
    assert_eq!(text::decode_to_string(&encoded, &table)?, "grüße, 世界");

    Ok(())
}

#[test]
fn text_rejects_invalid_utf8() -> Result<(), Error> {
    let alphabet: Alphabet = alphabets::BASE16.parse()?;
    let table = alphabet.decoder();

    let err = text::decode_to_string("FF", &table).unwrap_err();
    assert!(matches!(err, Error::Utf8(_)));

    Ok(())
}

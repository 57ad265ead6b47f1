use std::path::PathBuf;

use clap::Args;
use encbase_codec::{
    alphabets, AliasTable, Alphabet, ChunkedAlphabet, ChunkedDecodeTable, DecodeTable,
};
use indexmap::IndexMap;

use crate::profile::Profile;

const HEX_PAIRS: &str = "hex-pairs";

/// Options for selecting the alphabet to transcode with.
///
/// A profile takes precedence over custom symbols, which take
/// precedence over a named alphabet.
#[derive(Debug, Args)]
pub struct AlphabetArgs {
    /// The name of a standard alphabet.
    ///
    /// One of base2, base4, base8, base16, hex, base32, base64 or
    /// hex-pairs.
    #[clap(short, long, env = "ENCBASE_ALPHABET", default_value = "base32")]
    pub alphabet: String,

    /// Custom alphabet symbols, one per character.
    #[clap(short, long)]
    pub custom: Option<String>,

    /// Path to a JSON alphabet profile.
    #[clap(short, long, env = "ENCBASE_PROFILE")]
    pub profile: Option<PathBuf>,
}

/// A validated alphabet.
#[derive(Clone, Debug)]
pub enum SelectedAlphabet {
    /// One character per symbol.
    Symbols(Alphabet),
    /// Fixed-width multi-character symbols.
    Pairs(ChunkedAlphabet),
}

/// The alphabet chosen on the command line, along with the decoding
/// settings that came with it.
#[derive(Clone, Debug)]
pub struct Selection {
    /// A human-readable description of where the alphabet came from.
    pub label: String,
    /// The standard alphabet name, if one was used.
    pub name: Option<String>,
    pub alphabet: SelectedAlphabet,
    pub aliases: IndexMap<String, Vec<String>>,
    pub separators: String,
}

impl AlphabetArgs {
    /// Resolves the arguments into a validated alphabet.
    pub fn select(self) -> eyre::Result<Selection> {
        let profile = match self.profile {
            Some(path) => {
                log::debug!("Loading alphabet profile '{}'", path.display());
                Profile::from_path(&path)?
            }

            None => match self.custom {
                Some(symbols) => Profile {
                    symbols: Some(symbols),
                    ..Default::default()
                },
                None => Profile {
                    name: Some(self.alphabet),
                    ..Default::default()
                },
            },
        };

        let (label, alphabet) = match (&profile.name, profile.symbols) {
            (Some(name), _) => (name.clone(), by_name(name)?),
            (None, Some(symbols)) => {
                let alphabet = symbols.parse()?;
                ("custom".to_owned(), SelectedAlphabet::Symbols(alphabet))
            }
            (None, None) => eyre::bail!("no alphabet was selected"),
        };

        log::debug!(
            "Using {label} alphabet of {} symbols at {} bits each",
            alphabet.len(),
            alphabet.bits_per_symbol()
        );

        Ok(Selection {
            label,
            name: profile.name,
            alphabet,
            aliases: profile.aliases,
            separators: profile.separators,
        })
    }
}

fn by_name(name: &str) -> eyre::Result<SelectedAlphabet> {
    if name == HEX_PAIRS {
        return Ok(SelectedAlphabet::Pairs(alphabets::hex_pairs()));
    }

    match alphabets::by_name(name) {
        Some(symbols) => Ok(SelectedAlphabet::Symbols(symbols.parse()?)),
        None => {
            let mut known = alphabets::names();
            known.push(HEX_PAIRS);
            eyre::bail!(
                "unknown alphabet '{name}'; expected one of {}",
                known.join(", ")
            )
        }
    }
}

impl SelectedAlphabet {
    /// Gets the number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        match self {
            Self::Symbols(a) => a.len(),
            Self::Pairs(a) => a.alphabet().len(),
        }
    }

    /// Gets the number of bits carried by every symbol.
    pub fn bits_per_symbol(&self) -> u32 {
        match self {
            Self::Symbols(a) => a.bits_per_symbol(),
            Self::Pairs(a) => a.alphabet().bits_per_symbol(),
        }
    }

    /// Gets the mask of the bits carried by every symbol.
    pub fn mask(&self) -> u32 {
        match self {
            Self::Symbols(a) => a.mask(),
            Self::Pairs(a) => a.alphabet().mask(),
        }
    }

    /// Gets the number of characters in every symbol.
    pub fn code_length(&self) -> usize {
        match self {
            Self::Symbols(_) => 1,
            Self::Pairs(a) => a.code_length(),
        }
    }

    /// Gets the number of code points that have no symbol.
    pub fn unused_code_points(&self) -> usize {
        match self {
            Self::Symbols(a) => a.unused_code_points(),
            Self::Pairs(a) => a.alphabet().unused_code_points(),
        }
    }

    /// Gets all symbols in index order.
    pub fn symbols(&self) -> Vec<String> {
        match self {
            Self::Symbols(a) => a.symbols().iter().map(char::to_string).collect(),
            Self::Pairs(a) => a.alphabet().symbols().to_vec(),
        }
    }

    /// Encodes `bytes` into text.
    pub fn encode(&self, bytes: &[u8]) -> eyre::Result<String> {
        let encoded = match self {
            Self::Symbols(a) => a.encode_to_string(bytes)?,
            Self::Pairs(a) => a.encode_to_string(bytes)?,
        };

        Ok(encoded)
    }
}

/// A decode table for either kind of alphabet.
pub enum Decoding<'a> {
    Symbols(DecodeTable<'a, char>),
    Pairs(ChunkedDecodeTable<'a>),
}

impl Decoding<'_> {
    /// Decodes `text` into bytes.
    pub fn decode(&self, text: &str) -> eyre::Result<Vec<u8>> {
        let decoded = match self {
            Self::Symbols(table) => table.decode_to_vec(text.chars())?,
            Self::Pairs(table) => table.decode_to_vec(text)?,
        };

        Ok(decoded)
    }
}

impl Selection {
    /// Gets the aliases that apply when decoding.
    ///
    /// The standard base32 alphabet reads Crockford's aliases unless
    /// `strict` is set. `extra` is merged on top.
    pub fn decode_aliases(
        &self,
        strict: bool,
        extra: &[(String, Vec<String>)],
    ) -> IndexMap<String, Vec<String>> {
        let mut aliases = IndexMap::new();

        if !strict && self.name.as_deref() == Some("base32") {
            for (canonical, alias) in alphabets::crockford_aliases().iter() {
                push_alias(&mut aliases, canonical.to_string(), alias.to_string());
            }
        }

        let configured = self.aliases.iter().chain(extra.iter().map(|(c, a)| (c, a)));
        for (canonical, group) in configured {
            for alias in group {
                push_alias(&mut aliases, canonical.clone(), alias.clone());
            }
        }

        aliases
    }

    /// Builds the decode table.
    ///
    /// Line breaks are always skipped unless the alphabet uses them.
    pub fn decoding(
        &self,
        aliases: &IndexMap<String, Vec<String>>,
        separators: &str,
    ) -> eyre::Result<Decoding<'_>> {
        let mut skipped: Vec<char> = self.separators.chars().chain(separators.chars()).collect();
        skipped.sort_unstable();
        skipped.dedup();

        let decoding = match &self.alphabet {
            SelectedAlphabet::Symbols(alphabet) => {
                let mut table = AliasTable::new();
                for (canonical, group) in aliases {
                    let group: Vec<char> =
                        group.iter().map(|a| single_char(a)).collect::<eyre::Result<_>>()?;
                    table.extend(single_char(canonical)?, group);
                }

                let decoder = alphabet.decoder().with_aliases(&table)?;
                let line_breaks = ['\n', '\r']
                    .into_iter()
                    .filter(|c| decoder.value(c).is_none() && !skipped.contains(c));
                let skipped: Vec<char> = skipped.iter().copied().chain(line_breaks).collect();

                Decoding::Symbols(decoder.with_separators(skipped)?)
            }

            SelectedAlphabet::Pairs(alphabet) => {
                let mut table = AliasTable::new();
                for (canonical, group) in aliases {
                    table.extend(canonical.clone(), group.iter().cloned());
                }

                let decoder = alphabet.decoder().with_aliases(&table)?;
                let used = |c: &char| {
                    alphabet.alphabet().symbols().iter().any(|s| s.contains(*c))
                        || aliases.values().flatten().any(|s| s.contains(*c))
                };
                let line_breaks = ['\n', '\r']
                    .into_iter()
                    .filter(|c| !used(c) && !skipped.contains(c));
                let skipped: Vec<char> = skipped.iter().copied().chain(line_breaks).collect();

                Decoding::Pairs(decoder.with_separators(skipped)?)
            }
        };

        Ok(decoding)
    }
}

fn push_alias(aliases: &mut IndexMap<String, Vec<String>>, canonical: String, alias: String) {
    let group = aliases.entry(canonical).or_default();
    if !group.contains(&alias) {
        group.push(alias);
    }
}

fn single_char(symbol: &str) -> eyre::Result<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => eyre::bail!("'{symbol}' is not a single-character symbol"),
    }
}

/// Parses a `CANONICAL=ALIAS[,ALIAS...]` alias group.
pub fn parse_alias(arg: &str) -> Result<(String, Vec<String>), String> {
    let (canonical, aliases) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected CANONICAL=ALIAS[,ALIAS...], got '{arg}'"))?;

    let aliases: Vec<String> = aliases
        .split(',')
        .filter(|a| !a.is_empty())
        .map(str::to_owned)
        .collect();
    if canonical.is_empty() || aliases.is_empty() {
        return Err(format!("alias group '{arg}' is incomplete"));
    }

    Ok((canonical.to_owned(), aliases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::encode::format_output;

    fn select(alphabet: &str) -> Selection {
        AlphabetArgs {
            alphabet: alphabet.to_owned(),
            custom: None,
            profile: None,
        }
        .select()
        .unwrap()
    }

    #[test]
    fn custom_symbols_win_over_names() {
        let selection = AlphabetArgs {
            alphabet: "base64".to_owned(),
            custom: Some("01".to_owned()),
            profile: None,
        }
        .select()
        .unwrap();

        assert_eq!(selection.label, "custom");
        assert_eq!(selection.alphabet.bits_per_symbol(), 1);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let args = AlphabetArgs {
            alphabet: "base10".to_owned(),
            custom: None,
            profile: None,
        };
        assert!(args.select().is_err());
    }

    #[test]
    fn base32_reads_crockford_aliases() {
        let selection = select("base32");
        let aliases = selection.decode_aliases(false, &[]);
        let decoding = selection.decoding(&aliases, "-").unwrap();

        assert_eq!(decoding.decode("ZW\n").unwrap(), [255]);
        assert_eq!(
            decoding.decode("o-o").unwrap_err().to_string(),
            "unknown symbol 'o' in encoded input"
        );
        assert_eq!(
            decoding.decode("OO").unwrap(),
            decoding.decode("00").unwrap()
        );
    }

    #[test]
    fn strict_base32_rejects_aliases() {
        let selection = select("base32");
        let aliases = selection.decode_aliases(true, &[]);
        let decoding = selection.decoding(&aliases, "").unwrap();

        assert!(decoding.decode("OO").is_err());
    }

    #[test]
    fn formatted_output_decodes_back() {
        let data: Vec<u8> = (0..=u8::MAX).collect();

        for name in ["base32", "base64", "hex-pairs"] {
            let selection = select(name);
            let alphabet = &selection.alphabet;
            let encoded = alphabet.encode(&data).unwrap();

            let group = 4 * alphabet.code_length();
            let out = format_output(&encoded, group, ".", 30);
            assert!(out.lines().all(|line| line.chars().count() <= 30), "{name}");
            assert!(out.contains('.'), "{name}");

            let aliases = selection.decode_aliases(false, &[]);
            let decoding = selection.decoding(&aliases, ".").unwrap();
            assert_eq!(decoding.decode(&out).unwrap(), data, "{name}");

            // Without the separator declared, grouped text is rejected.
            let decoding = selection.decoding(&aliases, "").unwrap();
            assert!(decoding.decode(&out).is_err(), "{name}");
        }
    }

    #[test]
    fn hex_pairs_skip_line_breaks() {
        let selection = select("hex-pairs");
        assert_eq!(selection.alphabet.code_length(), 2);

        let encoded = selection.alphabet.encode(b"hi").unwrap();
        assert_eq!(encoded, "6869");

        let decoding = selection.decoding(&IndexMap::new(), " ").unwrap();
        assert_eq!(decoding.decode("68 6\r\n9").unwrap(), b"hi");
    }

    #[test]
    fn alias_arguments() {
        assert_eq!(
            parse_alias("1=I,L").unwrap(),
            ("1".to_owned(), vec!["I".to_owned(), "L".to_owned()])
        );
        assert!(parse_alias("1").is_err());
        assert!(parse_alias("=I").is_err());
        assert!(parse_alias("1=").is_err());
    }

    #[test]
    fn multi_char_aliases_need_chunked_alphabets() {
        let selection = select("base16");
        let extra = [("A".to_owned(), vec!["aa".to_owned()])];
        let aliases = selection.decode_aliases(false, &extra);

        assert!(selection.decoding(&aliases, "").is_err());
    }
}

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use indexmap::{IndexMap, IndexSet};

use crate::{Alphabet, Decoder, Error};

/// Additional symbols which decode to the same value as a canonical
/// alphabet symbol.
///
/// This allows tolerant decoding of input where visually similar
/// symbols were confused, e.g. `O` typed instead of `0`. Aliases
/// are kept in declaration order.
#[derive(Clone, Debug)]
pub struct AliasTable<S> {
    groups: IndexMap<S, IndexSet<S>>,
}

impl<S: Eq + Hash> PartialEq for AliasTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<S: Eq + Hash> Eq for AliasTable<S> {}

impl<S> Default for AliasTable<S> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<S: Eq + Hash> AliasTable<S> {
    /// Creates an empty [`AliasTable`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `aliases` for the `canonical` symbol and returns the
    /// table for further chaining.
    pub fn with<I>(mut self, canonical: S, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.extend(canonical, aliases);
        self
    }

    /// Declares `aliases` for the `canonical` symbol in place.
    pub fn extend<I>(&mut self, canonical: S, aliases: I)
    where
        I: IntoIterator<Item = S>,
    {
        self.groups.entry(canonical).or_default().extend(aliases);
    }

    /// Gets the aliases declared for `canonical`.
    pub fn get(&self, canonical: &S) -> Option<&IndexSet<S>> {
        self.groups.get(canonical)
    }

    /// Iterates over all `(canonical, alias)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &S)> {
        self.groups
            .iter()
            .flat_map(|(canonical, aliases)| aliases.iter().map(move |alias| (canonical, alias)))
    }

    /// Gets the total number of declared aliases.
    pub fn len(&self) -> usize {
        self.groups.values().map(IndexSet::len).sum()
    }

    /// Whether no aliases are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The symbol to value mapping for decoding with an [`Alphabet`].
///
/// The table starts out with every alphabet symbol mapped to its
/// position. Aliases and separators are merged in afterwards, and
/// any collision between them and existing symbols is rejected.
/// Once built, a table is read-only and can drive any number of
/// decodes.
#[derive(Clone, Debug)]
pub struct DecodeTable<'a, S> {
    alphabet: &'a Alphabet<S>,
    index: HashMap<S, u32>,
    separators: HashSet<S>,
}

impl<'a, S: Eq + Hash + Clone + fmt::Debug> DecodeTable<'a, S> {
    /// Creates the table for `alphabet`, without aliases or separators.
    pub fn new(alphabet: &'a Alphabet<S>) -> Self {
        let index = alphabet
            .symbols()
            .iter()
            .cloned()
            .zip(0..)
            .collect();

        Self {
            alphabet,
            index,
            separators: HashSet::new(),
        }
    }

    /// Merges `aliases` into the table.
    ///
    /// Fails when a canonical symbol is not part of the alphabet, or
    /// when an alias is already a symbol, separator or other alias.
    pub fn with_aliases(mut self, aliases: &AliasTable<S>) -> Result<Self, Error> {
        for (canonical, alias) in aliases.iter() {
            let value = self
                .alphabet_value(canonical)
                .ok_or_else(|| Error::UnknownCanonical(format!("{canonical:?}")))?;

            if self.index.contains_key(alias) || self.separators.contains(alias) {
                return Err(Error::AliasCollision(format!("{alias:?}")));
            }

            self.index.insert(alias.clone(), value);
        }

        log::debug!(
            "Merged {} aliases into decode table for {} symbols",
            aliases.len(),
            self.alphabet.len()
        );

        Ok(self)
    }

    /// Declares `separators` which the decoder skips over.
    ///
    /// Fails when a separator is an alphabet symbol or an alias.
    pub fn with_separators<I>(mut self, separators: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
    {
        for separator in separators {
            if self.index.contains_key(&separator) {
                return Err(Error::SeparatorCollision(format!("{separator:?}")));
            }

            self.separators.insert(separator);
        }

        Ok(self)
    }

    fn alphabet_value(&self, symbol: &S) -> Option<u32> {
        self.index
            .get(symbol)
            .copied()
            .filter(|&v| self.alphabet.symbol(v) == Some(symbol))
    }

    /// Resolves a symbol or alias to the value it encodes.
    #[inline]
    pub fn value(&self, symbol: &S) -> Option<u32> {
        self.index.get(symbol).copied()
    }

    /// Iterates over the aliases merged into the table.
    pub fn aliases(&self) -> impl Iterator<Item = &S> {
        self.index
            .iter()
            .filter(|&(symbol, &v)| self.alphabet.symbol(v) != Some(symbol))
            .map(|(symbol, _)| symbol)
    }

    /// Whether `symbol` is a declared separator.
    #[inline]
    pub fn is_separator(&self, symbol: &S) -> bool {
        self.separators.contains(symbol)
    }

    /// Gets the alphabet this table decodes.
    #[inline]
    pub fn alphabet(&self) -> &'a Alphabet<S> {
        self.alphabet
    }

    /// Lazily decodes `symbols` into bytes.
    ///
    /// Separators are dropped before they reach the bit accounting.
    /// Trailing bits which do not make up a whole byte are padding
    /// and get discarded.
    pub fn decode<I>(
        &self,
        symbols: I,
    ) -> Decoder<impl Iterator<Item = S>, impl FnMut(S) -> Result<u32, Error>>
    where
        I: IntoIterator<Item = S>,
    {
        let retained = symbols
            .into_iter()
            .filter(move |symbol| !self.is_separator(symbol));

        Decoder::new(retained, self.alphabet.bits_per_symbol(), move |symbol| {
            self.value(&symbol)
                .ok_or_else(|| Error::UnknownSymbol(format!("{symbol:?}")))
        })
    }

    /// Decodes `symbols` and collects the bytes into a [`Vec`].
    pub fn decode_to_vec<I>(&self, symbols: I) -> Result<Vec<u8>, Error>
    where
        I: IntoIterator<Item = S>,
    {
        self.decode(symbols).collect()
    }
}

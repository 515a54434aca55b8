use std::collections::BTreeMap;
use std::fmt;

/// Symbol-frequency mapping derived from input text.
///
/// Backed by a `BTreeMap` so iteration is sorted and deterministic; the order
/// entries leave this table is the order their leaves enter the build queue,
/// which fixes how equal-frequency nodes pair up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the occurrences of every character in `text`.
    /// Empty text yields an empty table.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for ch in text.chars() {
            table.tally(ch);
        }
        table
    }

    /// Adds one occurrence of `symbol`.
    pub fn tally(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_default() += 1;
    }

    /// Stores `count` for `symbol` verbatim, replacing any previous count.
    /// The tree-file loader uses this, so a repeated record wins over an
    /// earlier one.
    pub fn set(&mut self, symbol: char, count: u64) {
        self.counts.insert(symbol, count);
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FrequencyTable {
    /// One `symbol: count` line per entry, sorted by symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            writeln!(f, "{symbol}: {count}")?;
        }
        Ok(())
    }
}

//! The session facade.
//!
//! A [`Workbench`] owns at most one tree at a time, the way an interactive
//! session would: build or load a tree, then encode, decode, render, and
//! save against it until the next build replaces it.

use std::path::Path;

use crate::code::bit_string;
use crate::error::HuffmanError;
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanTree, UNDECODABLE};
use crate::treefile;

/// Holds the tree the session is currently working with.
#[derive(Debug, Default)]
pub struct Workbench {
    current: Option<HuffmanTree>,
}

impl Workbench {
    /// A workbench with no tree yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree the last build or load produced, if any.
    pub fn current_tree(&self) -> Option<&HuffmanTree> {
        self.current.as_ref()
    }

    /// Counts the symbols of `text` without touching the current tree.
    pub fn frequencies_of(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_text(text)
    }

    /// Builds a tree from `table` and makes it current.
    pub fn build_tree(&mut self, table: &FrequencyTable) -> &HuffmanTree {
        self.current.insert(HuffmanTree::build(table))
    }

    /// Builds a tree for `text`, makes it current, and encodes `text` with
    /// it. The result is a `0`/`1` string.
    pub fn encode(&mut self, text: &str) -> Result<String, HuffmanError> {
        let table = FrequencyTable::from_text(text);
        let tree = self.current.insert(HuffmanTree::build(&table));
        let bits = tree.encode(text)?;
        Ok(bit_string(&bits))
    }

    /// Decodes a `0`/`1` string against the current tree. Without a tree
    /// no step can succeed, so every input character becomes the
    /// placeholder.
    pub fn decode(&self, bits: &str) -> String {
        match &self.current {
            Some(tree) => tree.decode(bits),
            None => bits.chars().map(|_| UNDECODABLE).collect(),
        }
    }

    /// Renders the current tree, or the empty string without one.
    pub fn render(&self) -> String {
        self.current
            .as_ref()
            .map(HuffmanTree::render)
            .unwrap_or_default()
    }

    /// Saves the current tree to `path`. Without a tree the file is still
    /// written, holding zero records.
    pub fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), HuffmanError> {
        let empty = HuffmanTree::default();
        treefile::save_path(self.current.as_ref().unwrap_or(&empty), path)
    }

    /// Reads the letter frequencies stored at `path` without changing the
    /// current tree.
    pub fn load_frequencies<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<FrequencyTable, HuffmanError> {
        treefile::load_path(path)
    }

    /// Loads `path`, rebuilds a tree from its letter frequencies, and makes
    /// that tree current. A failed load leaves the current tree in place.
    pub fn load_tree<P: AsRef<Path>>(&mut self, path: P) -> Result<&HuffmanTree, HuffmanError> {
        let table = treefile::load_path(path)?;
        Ok(self.current.insert(HuffmanTree::build(&table)))
    }
}

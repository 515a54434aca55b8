//! Code generation and encoding.

use std::collections::HashMap;

use bitvec::prelude::*;

use crate::error::HuffmanError;
use crate::tree::{HuffmanTree, NodeIndex};

/// Symbol-to-bits mapping derived from a tree: `0` per left step, `1` per
/// right step, read root to leaf. Codes are prefix-free because symbols only
/// sit at leaves; the lone leaf of a single-symbol tree gets the empty code.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<char, BitBox>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        if let Some(root) = tree.root_index() {
            let mut path = BitVec::new();
            collect(tree, root, &mut path, &mut codes);
        }
        Self { codes }
    }

    pub(crate) fn from_codes(codes: HashMap<char, BitBox>) -> Self {
        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    /// The code for `symbol` as `'0'`/`'1'` text.
    pub fn code_string(&self, symbol: char) -> Option<String> {
        self.get(symbol).map(bit_string)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Concatenates the code of every character of `text`.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] on the first character
    /// without an entry instead of dropping it.
    pub fn encode(&self, text: &str) -> Result<BitVec, HuffmanError> {
        let mut out = BitVec::new();
        for ch in text.chars() {
            let code = self
                .codes
                .get(&ch)
                .ok_or(HuffmanError::UnknownSymbol(ch))?;
            out.extend_from_bitslice(code);
        }
        Ok(out)
    }
}

fn collect(
    tree: &HuffmanTree,
    index: NodeIndex,
    path: &mut BitVec,
    codes: &mut HashMap<char, BitBox>,
) {
    let node = &tree[index];

    if node.is_leaf() {
        if let Some(symbol) = node.symbol() {
            codes.insert(symbol, path.clone().into_boxed_bitslice());
        }
        return;
    }

    if let Some(left) = node.left() {
        path.push(false);
        collect(tree, left, path, codes);
        path.pop();
    }
    if let Some(right) = node.right() {
        path.push(true);
        collect(tree, right, path, codes);
        path.pop();
    }
}

/// Renders bits as `'0'`/`'1'` characters, the textual bit-string form the
/// orchestration layer hands outward.
pub fn bit_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

//! Huffman tree construction and traversal.
//!
//! Nodes live in an arena (`Vec<Node>`) and reference each other by
//! [`NodeIndex`]; the root index is kept separately. An empty table builds a
//! tree with no root, a single-entry table builds a lone leaf.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops;

use bitvec::prelude::*;
use derivative::Derivative;

use crate::code::CodeTable;
use crate::error::HuffmanError;
use crate::freq::FrequencyTable;

/// Index of a node in the tree arena.
pub type NodeIndex = usize;

/// Placeholder emitted by [`HuffmanTree::decode`] for a step that cannot be
/// taken: a non-bit input character, a missing child, or an empty tree.
pub const UNDECODABLE: char = '?';

/// A single arena record. Leaves carry a symbol and no children; combination
/// nodes carry no symbol and (normally) two children. The legacy
/// [`HuffmanTree::insert_labeled`] operation can leave a node with one child,
/// which the optional links accommodate.
#[derive(Debug, Clone)]
pub struct Node {
    symbol: Option<char>,
    weight: u64,
    label: u32,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl Node {
    fn leaf(symbol: char, weight: u64) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
            label: 0,
            left: None,
            right: None,
        }
    }

    fn join(weight: u64, left: NodeIndex, right: NodeIndex) -> Self {
        Self {
            symbol: None,
            weight,
            label: 0,
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// In-order position of this node, 1-based. Assigned after construction;
    /// identity for persistence and the legacy insert, not part of coding.
    pub fn label(&self) -> u32 {
        self.label
    }

    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Build-queue entry. Ordering looks at `(weight, seq)` only; `seq` is the
/// queue insertion number, so equal weights leave first-in, first-merged and
/// never compare by symbol.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct QueueItem {
    weight: u64,
    seq: u64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: NodeIndex,
}

/// Optimal prefix-free code tree over single characters.
#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeIndex>,
}

impl HuffmanTree {
    /// Builds the tree for `table`.
    ///
    /// One leaf per entry goes into a min-queue ordered by frequency; the two
    /// lowest are repeatedly joined (first out becomes the left child) until
    /// one node remains. Afterwards every node gets its in-order label.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut nodes: Vec<Node> = Vec::with_capacity((2 * table.len()).saturating_sub(1));
        let mut seq = 0u64;

        let mut queue: BinaryHeap<Reverse<QueueItem>> = table
            .iter()
            .map(|(symbol, count)| {
                let node = nodes.len();
                nodes.push(Node::leaf(symbol, count));
                let item = QueueItem {
                    weight: count,
                    seq,
                    node,
                };
                seq += 1;
                Reverse(item)
            })
            .collect();

        while queue.len() > 1 {
            let Reverse(first) = queue.pop().unwrap();
            let Reverse(second) = queue.pop().unwrap();

            let weight = first.weight + second.weight;
            let node = nodes.len();
            nodes.push(Node::join(weight, first.node, second.node));
            queue.push(Reverse(QueueItem { weight, seq, node }));
            seq += 1;
        }

        let root = queue.pop().map(|Reverse(item)| item.node);
        let mut tree = Self { nodes, root };
        tree.assign_labels();
        tree
    }

    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the tree has no root (built from an empty table).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Derives the symbol-to-bits table for this tree.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    /// Encodes `text` with a table freshly derived from this tree.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] on the first character that
    /// has no code, which happens whenever this tree was built from another
    /// message's frequencies.
    pub fn encode(&self, text: &str) -> Result<BitVec, HuffmanError> {
        self.code_table().encode(text)
    }

    /// Decodes a textual bit-string by walking the tree: `'0'` steps left,
    /// `'1'` steps right, and reaching a leaf emits its symbol and restarts
    /// at the root.
    ///
    /// A step that cannot be taken (non-bit character, missing child, empty
    /// tree) emits [`UNDECODABLE`] instead and also restarts at the root.
    /// Trailing bits that never complete a code are dropped. Never fails.
    pub fn decode(&self, bits: &str) -> String {
        let mut out = String::new();
        let mut cursor = self.root;

        for ch in bits.chars() {
            let next = match (cursor, ch) {
                (Some(index), '0') => self.nodes[index].left,
                (Some(index), '1') => self.nodes[index].right,
                _ => None,
            };

            match next {
                Some(index) if self.nodes[index].is_leaf() => {
                    out.push(self.nodes[index].symbol.unwrap_or(UNDECODABLE));
                    cursor = self.root;
                }
                Some(index) => cursor = Some(index),
                None => {
                    out.push(UNDECODABLE);
                    cursor = self.root;
                }
            }
        }

        out
    }

    /// Renders the tree one node per line, indented two spaces per level,
    /// with `root:`/`left: `/`right:` role labels. Symbol-bearing nodes show
    /// `<c, f>`, combination nodes `<f>`. The empty tree renders as `""`.
    pub fn render(&self) -> String {
        match self.root {
            Some(root) => self.render_subtree(root, 0, "root:"),
            None => String::new(),
        }
    }

    fn render_subtree(&self, index: NodeIndex, level: usize, role: &str) -> String {
        let node = &self.nodes[index];
        let indent = "  ".repeat(level);

        let mut out = match node.symbol {
            Some(symbol) => format!("{indent}{role} <{symbol}, {}>\n", node.weight),
            None => format!("{indent}{role} <{}>\n", node.weight),
        };

        if let Some(left) = node.left {
            out.push_str(&self.render_subtree(left, level + 1, "left: "));
        }
        if let Some(right) = node.right {
            out.push_str(&self.render_subtree(right, level + 1, "right:"));
        }
        out
    }

    /// Legacy label-ordered insertion: adds a raw node, descending left on a
    /// strictly smaller label and right otherwise, and returns its index. The
    /// first insertion into an empty tree becomes the root.
    ///
    /// This operation exists for structural compatibility only; it takes no
    /// part in building, coding, or decoding.
    pub fn insert_labeled(&mut self, label: u32, symbol: Option<char>, weight: u64) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node {
            symbol,
            weight,
            label,
            left: None,
            right: None,
        });

        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(index);
                return index;
            }
        };

        loop {
            if label < self.nodes[current].label {
                match self.nodes[current].left {
                    Some(next) => current = next,
                    None => {
                        self.nodes[current].left = Some(index);
                        return index;
                    }
                }
            } else {
                match self.nodes[current].right {
                    Some(next) => current = next,
                    None => {
                        self.nodes[current].right = Some(index);
                        return index;
                    }
                }
            }
        }
    }

    /// Nodes in pre-order (self, left, right), the tree-file record order.
    pub fn pre_order(&self) -> PreOrderIter<'_> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        PreOrderIter { tree: self, stack }
    }

    fn assign_labels(&mut self) {
        if let Some(root) = self.root {
            let mut next = 1;
            self.label_in_order(root, &mut next);
        }
    }

    fn label_in_order(&mut self, index: NodeIndex, next: &mut u32) {
        if let Some(left) = self.nodes[index].left {
            self.label_in_order(left, next);
        }
        self.nodes[index].label = *next;
        *next += 1;
        if let Some(right) = self.nodes[index].right {
            self.label_in_order(right, next);
        }
    }
}

impl ops::Index<NodeIndex> for HuffmanTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }
}

/// Stack-based pre-order traversal over the arena.
pub struct PreOrderIter<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<NodeIndex>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];

        // right first so the left subtree is visited first
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }

        Some(node)
    }
}

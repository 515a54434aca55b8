//! # huffcode
//!
//! Character-level Huffman coding: frequency counting, tree building,
//! encoding and decoding, a printable tree rendering, and a line-oriented
//! tree file format.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffcode::Workbench;
//!
//! let mut bench = Workbench::new();
//! let bits = bench.encode("abracadabra")?;
//! assert_eq!(bench.decode(&bits), "abracadabra");
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! [`Workbench`] covers the common session flow. The pieces underneath are
//! public too: [`FrequencyTable`], [`HuffmanTree`], [`CodeTable`], and the
//! [`treefile`] save and load functions.

pub mod code;
pub mod error;
pub mod freq;
pub mod serial;
pub mod tree;
pub mod treefile;
pub mod workbench;

// Re-export the main types for convenience
pub use code::{bit_string, CodeTable};
pub use error::HuffmanError;
pub use freq::FrequencyTable;
pub use serial::PortableCodeTable;
pub use tree::{HuffmanTree, Node, NodeIndex, UNDECODABLE};
pub use workbench::Workbench;

use std::io;

/// Errors surfaced by encoding and tree-file operations.
///
/// Building a tree, generating codes, rendering, and decoding are total and
/// never produce one of these; encoding fails only on [`UnknownSymbol`], and
/// the tree-file reader/writer fail with [`MalformedRecord`] or [`Io`].
///
/// [`UnknownSymbol`]: HuffmanError::UnknownSymbol
/// [`MalformedRecord`]: HuffmanError::MalformedRecord
/// [`Io`]: HuffmanError::Io
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// Encode was asked for a symbol that has no entry in the active code
    /// table, i.e. the tree was built from a different message's frequencies.
    #[error("symbol {0:?} has no code in the active table")]
    UnknownSymbol(char),
    /// A tree-file line did not parse as `label symbolName frequency`.
    #[error("malformed tree record at line {line}: {text:?}")]
    MalformedRecord { line: usize, text: String },
    /// Reading or writing the underlying storage failed.
    #[error("tree file i/o failed: {0}")]
    Io(#[from] io::Error),
}

//! Tree file reading and writing.
//!
//! One record per node, in pre-order, one per line:
//!
//! ```text
//! <label> <symbolName> <frequency>
//! ```
//!
//! `symbolName` is the token `none` for a node without a symbol, `space` for
//! the space character, and the character itself otherwise. There is no
//! header, trailer, or count; end of file ends the records.
//!
//! Loading does not restore the saved topology. It recovers a
//! [`FrequencyTable`] from the records, keeping only symbols that are
//! alphabetic letters (digits, punctuation, the space, and the `none`
//! sentinel are dropped), and the caller rebuilds a fresh tree from that
//! table. The round trip is deliberately lossy: only the (letter, frequency)
//! leaf set survives, not the shape.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::HuffmanError;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;

const NONE_TOKEN: &str = "none";
const SPACE_TOKEN: &str = "space";

/// Writes `tree` to `sink` as pre-order records. The empty tree writes
/// nothing.
pub fn save<W: Write>(tree: &HuffmanTree, mut sink: W) -> Result<(), HuffmanError> {
    for node in tree.pre_order() {
        writeln!(
            sink,
            "{} {} {}",
            node.label(),
            symbol_token(node.symbol()),
            node.weight()
        )?;
    }
    Ok(())
}

/// Writes `tree` to the file at `path`, creating or truncating it.
pub fn save_path<P: AsRef<Path>>(tree: &HuffmanTree, path: P) -> Result<(), HuffmanError> {
    let mut writer = BufWriter::new(File::create(path)?);
    save(tree, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Reads records from `source` and recovers the letter frequencies.
///
/// Blank lines are skipped; any other line must parse as
/// `label symbolName frequency` with numeric label and frequency, or the
/// whole load fails with [`HuffmanError::MalformedRecord`]. A repeated
/// symbol keeps the last record's count.
pub fn load<R: BufRead>(source: R) -> Result<FrequencyTable, HuffmanError> {
    let mut table = FrequencyTable::new();

    for (number, line) in source.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line).ok_or_else(|| HuffmanError::MalformedRecord {
            line: number + 1,
            text: line.clone(),
        })?;

        if let Some(symbol) = record.symbol {
            if symbol.is_alphabetic() {
                table.set(symbol, record.frequency);
            }
        }
    }

    Ok(table)
}

/// Reads records from the file at `path`.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<FrequencyTable, HuffmanError> {
    load(BufReader::new(File::open(path)?))
}

struct Record {
    symbol: Option<char>,
    frequency: u64,
}

fn parse_record(line: &str) -> Option<Record> {
    let mut fields = line.split_whitespace();
    let label = fields.next()?;
    let name = fields.next()?;
    let frequency = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    // the label is identity only, but a non-numeric one is still malformed
    label.parse::<u32>().ok()?;
    let frequency = frequency.parse::<u64>().ok()?;

    Some(Record {
        symbol: token_symbol(name),
        frequency,
    })
}

fn symbol_token(symbol: Option<char>) -> String {
    match symbol {
        None => NONE_TOKEN.to_string(),
        Some(' ') => SPACE_TOKEN.to_string(),
        Some(ch) => ch.to_string(),
    }
}

fn token_symbol(token: &str) -> Option<char> {
    match token {
        NONE_TOKEN => None,
        SPACE_TOKEN => Some(' '),
        other => other.chars().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(text: &str) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_text(text))
    }

    fn save_to_string(tree: &HuffmanTree) -> String {
        let mut out = Vec::new();
        save(tree, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn saves_preorder_records() {
        let tree = tree_of("aaabbc");
        assert_eq!(
            save_to_string(&tree),
            "2 none 6\n1 a 3\n4 none 3\n3 c 1\n5 b 2\n"
        );
    }

    #[test]
    fn space_symbol_uses_the_space_token() {
        let tree = tree_of("a a");
        assert_eq!(save_to_string(&tree), "2 none 3\n1 space 1\n3 a 2\n");
    }

    #[test]
    fn empty_tree_saves_nothing() {
        let tree = tree_of("");
        assert_eq!(save_to_string(&tree), "");
    }

    #[test]
    fn load_recovers_letter_frequencies() {
        let tree = tree_of("aaabbc");
        let saved = save_to_string(&tree);

        let table = load(saved.as_bytes()).unwrap();
        let expected: FrequencyTable = [('a', 3), ('b', 2), ('c', 1)].into_iter().collect();
        assert_eq!(table, expected);
    }

    #[test]
    fn load_drops_non_letter_symbols() {
        let input = "1 5 4\n2 none 9\n3 space 2\n4 a 7\n5 ! 1\n";
        let table = load(input.as_bytes()).unwrap();

        let expected: FrequencyTable = [('a', 7)].into_iter().collect();
        assert_eq!(table, expected);
    }

    #[test]
    fn load_skips_blank_lines() {
        let table = load("1 a 3\n\n2 b 1\n".as_bytes()).unwrap();
        let expected: FrequencyTable = [('a', 3), ('b', 1)].into_iter().collect();
        assert_eq!(table, expected);
    }

    #[test]
    fn repeated_symbol_keeps_the_last_count() {
        let table = load("1 a 3\n2 a 9\n".as_bytes()).unwrap();
        assert_eq!(table.get('a'), Some(9));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for input in ["1 a\n", "1 a 2 3\n"] {
            match load(input.as_bytes()) {
                Err(HuffmanError::MalformedRecord { line, .. }) => assert_eq!(line, 1),
                other => panic!("expected MalformedRecord for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_numeric_fields_are_malformed() {
        for input in ["x a 1\n", "1 a x\n", "1 a -2\n"] {
            assert!(matches!(
                load(input.as_bytes()),
                Err(HuffmanError::MalformedRecord { .. })
            ));
        }
    }

    #[test]
    fn malformed_line_number_counts_from_one() {
        match load("1 a 3\n2 b\n".as_bytes()) {
            Err(HuffmanError::MalformedRecord { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "2 b");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("huffcode-missing-dir").join("tree.txt");
        assert!(matches!(load_path(path), Err(HuffmanError::Io(_))));
    }
}

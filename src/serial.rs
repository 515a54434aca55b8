//! Portable form of a code table.
//!
//! `bitvec`'s types do not serialize compactly on their own, so the table is
//! flattened to plain data before it crosses a process boundary and
//! reinflated on the far side.

use std::collections::HashMap;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::code::CodeTable;

/// A [`CodeTable`] flattened to serde-friendly data. Convert with [`From`]
/// in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortableCodeTable {
    // a BitBox stored as a pair of usize, Box<[usize]>
    codes: HashMap<char, (usize, Box<[usize]>)>,
}

impl From<&CodeTable> for PortableCodeTable {
    fn from(table: &CodeTable) -> Self {
        Self {
            codes: table
                .iter()
                .map(|(symbol, code)| {
                    let len = code.len();
                    let slice = code.to_bitvec().into_boxed_bitslice().into_boxed_slice();
                    (symbol, (len, slice))
                })
                .collect(),
        }
    }
}

impl From<PortableCodeTable> for CodeTable {
    fn from(portable: PortableCodeTable) -> Self {
        CodeTable::from_codes(
            portable
                .codes
                .into_iter()
                .map(|(symbol, (len, slice))| {
                    let mut bits = BitBox::from_boxed_slice(slice).into_bitvec();
                    bits.resize(len, false);
                    (symbol, bits.into_boxed_bitslice())
                })
                .collect(),
        )
    }
}

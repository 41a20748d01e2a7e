//! Textual bitstrings.
//!
//! Codewords and data travel outside the codec as strings of `'0'` and `'1'`
//! characters, leftmost character first. Internally they are packed into
//! `BitVec<u8, Msb0>`, so storage index `i` holds logical position `i + 1`.

use bitvec::prelude::*;

use crate::cs::error::{Error, Result};

/// Parses a string of `'0'`/`'1'` characters into bits.
///
/// The empty string is a valid (empty) bitstring.
///
/// # Errors
///
/// Returns [`Error::InvalidBinary`] naming the first character that is not a
/// binary digit.
pub fn parse_bits(input: &str) -> Result<BitVec<u8, Msb0>> {
    input
        .chars()
        .enumerate()
        .map(|(index, found)| match found {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::InvalidBinary { index, found }),
        })
        .collect()
}

/// Renders bits as a string of `'0'`/`'1'` characters.
pub fn format_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Direction in which a bitstring is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BitOrder {
    /// The first character is position 1
    #[default]
    LeftToRight,
    /// The last character is position 1
    RightToLeft,
}

impl BitOrder {
    /// Reorders `bits` in place so that they read left to right.
    ///
    /// Reversal is its own inverse, so the same call also turns a left-to-right
    /// result back into this order.
    pub fn apply(self, bits: &mut BitSlice<u8, Msb0>) {
        if self == BitOrder::RightToLeft {
            bits.reverse();
        }
    }
}

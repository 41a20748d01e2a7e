//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Parity bits sit at every power-of-two position (1, 2, 4, 8, ...) of the codeword and data bits
//! fill the remaining positions in order. The parity bit at position `p` covers every position whose
//! binary representation shares a set bit with `p`, so the pattern of failing parity checks (the
//! syndrome) spells out the position of a single flipped bit.
//!
//! This implementation provides:
//! - Encoding of data bitstrings of any length
//! - Syndrome computation and single-bit error correction
//! - Decoding with single-bit error correction
//!
//! All positions below are 1-based logical positions. Storage index `i` of a
//! bit slice holds position `i + 1`.
//!
//! Two or more flipped bits cannot be corrected. They either go undetected or
//! are "corrected" at the wrong position; this is inherent to the code.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Digital broadcasting
//! - Data storage systems

use crate::cs::ecc::bits::{format_bits, parse_bits};
use crate::cs::ecc::ErrorCorrection;
use crate::cs::error::Result;
use bitvec::prelude::*;
use log::{debug, trace, warn};
use std::iter::successors;

/// Outcome of running the syndrome check over a codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The codeword with the located bit flipped, or the input unchanged
    pub codeword: BitVec<u8, Msb0>,
    /// 1-based position of the corrected bit, 0 if nothing was corrected
    pub error_position: usize,
    /// Raw syndrome value. Equal to `error_position` unless it pointed past the
    /// end of the codeword.
    pub syndrome: usize,
}

impl Correction {
    /// Whether a bit was flipped
    pub fn was_corrected(&self) -> bool {
        self.error_position != 0
    }

    /// Whether the syndrome was non-zero but could not name a bit in the codeword
    pub fn is_uncorrectable(&self) -> bool {
        self.syndrome != 0 && self.error_position == 0
    }
}

/// Returns true if `position` holds a parity bit, i.e. is a power of two.
///
/// Position 0 does not exist and is never a parity position.
pub fn is_parity_position(position: usize) -> bool {
    position != 0 && position & (position - 1) == 0
}

/// Iterates over the parity positions of a codeword of length `len`, ascending.
pub fn parity_positions(len: usize) -> impl Iterator<Item = usize> {
    successors(Some(1usize), |p| p.checked_mul(2)).take_while(move |&p| p <= len)
}

/// Number of parity bits needed to protect `data_len` data bits.
///
/// This is the smallest `r` with `2^r - r - 1 >= data_len`.
pub fn parity_bits_for(data_len: usize) -> usize {
    let mut parity_bits = 0;
    while (1usize << parity_bits) - parity_bits - 1 < data_len {
        parity_bits += 1;
    }
    parity_bits
}

/// Length of the codeword produced by encoding `data_len` data bits.
pub fn encoded_len(data_len: usize) -> usize {
    data_len + parity_bits_for(data_len)
}

/// Computes the parity bit for parity position `position`.
///
/// XORs every bit at a position `i != position` with `i & position != 0`.
/// Positions past the end of `bits` contribute nothing.
pub fn parity(bits: &BitSlice<u8, Msb0>, position: usize) -> bool {
    let set = bits
        .iter_ones()
        .map(|index| index + 1)
        .filter(|&i| i != position && i & position != 0)
        .count();
    set % 2 == 1
}

/// Assembles parity-check mismatches into an error position.
///
/// `checks[0]` belongs to the lowest parity position and becomes the least
/// significant bit; the last entry becomes the most significant bit.
pub fn error_position(checks: &[bool]) -> usize {
    checks
        .iter()
        .rev()
        .fold(0, |acc, &mismatch| (acc << 1) | usize::from(mismatch))
}

/// Recomputes every parity bit and compares it with the stored one.
///
/// Returns one mismatch flag per parity position, lowest position first.
pub fn parity_checks(codeword: &BitSlice<u8, Msb0>) -> Vec<bool> {
    parity_positions(codeword.len())
        .map(|position| {
            let expected = parity(codeword, position);
            let stored = codeword[position - 1];
            trace!(
                "parity {}: expected {}, stored {}",
                position,
                u8::from(expected),
                u8::from(stored)
            );
            expected ^ stored
        })
        .collect()
}

/// Locates and flips a single erroneous bit.
///
/// A syndrome of 0 leaves the codeword untouched. A syndrome that points past
/// the end of the codeword can only come from multiple errors or a malformed
/// length; the codeword is then also returned unchanged with error position 0,
/// and the raw value is kept in [`Correction::syndrome`].
pub fn correct(codeword: &BitSlice<u8, Msb0>) -> Correction {
    let syndrome = error_position(&parity_checks(codeword));
    let mut corrected = codeword.to_bitvec();

    if syndrome == 0 {
        return Correction {
            codeword: corrected,
            error_position: 0,
            syndrome,
        };
    }

    if syndrome > corrected.len() {
        warn!(
            "syndrome {} exceeds codeword length {}, leaving codeword unchanged",
            syndrome,
            corrected.len()
        );
        return Correction {
            codeword: corrected,
            error_position: 0,
            syndrome,
        };
    }

    let index = syndrome - 1;
    let flipped = !corrected[index];
    corrected.set(index, flipped);
    debug!("corrected bit at position {}", syndrome);

    Correction {
        codeword: corrected,
        error_position: syndrome,
        syndrome,
    }
}

/// Encodes data bits into a Hamming codeword.
///
/// Parity bits are inserted at every power-of-two position and data bits fill
/// the rest, in order. The empty input encodes to the empty codeword.
pub fn encode(data: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    let mut codeword = BitVec::with_capacity(encoded_len(data.len()));

    // Lay out placeholders and data; the next position is always len + 1
    for bit in data.iter().by_vals() {
        while is_parity_position(codeword.len() + 1) {
            codeword.push(false);
        }
        codeword.push(bit);
    }

    // Parity groups are disjoint from other parity positions, so the
    // placeholders never influence each other
    for position in parity_positions(codeword.len()) {
        let value = parity(&codeword, position);
        codeword.set(position - 1, value);
    }

    trace!(
        "encoded {} data bits into {} bits",
        data.len(),
        codeword.len()
    );
    codeword
}

/// Decodes a Hamming codeword, correcting a single flipped bit first.
///
/// Returns the bits at every non-power-of-two position, in order.
pub fn decode(codeword: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    let Correction { codeword, .. } = correct(codeword);
    codeword
        .iter()
        .by_vals()
        .enumerate()
        .filter(|&(index, _)| !is_parity_position(index + 1))
        .map(|(_, bit)| bit)
        .collect()
}

/// Encodes a `'0'`/`'1'` string
pub fn encode_str(data: &str) -> Result<String> {
    let data = parse_bits(data)?;
    Ok(format_bits(&encode(&data)))
}

/// Decodes a `'0'`/`'1'` codeword string
pub fn decode_str(codeword: &str) -> Result<String> {
    let codeword = parse_bits(codeword)?;
    Ok(format_bits(&decode(&codeword)))
}

/// Corrects a `'0'`/`'1'` codeword string, returning it with the 1-based
/// position of the flipped bit (0 if none).
pub fn correct_str(codeword: &str) -> Result<(String, usize)> {
    let codeword = parse_bits(codeword)?;
    let correction = correct(&codeword);
    Ok((format_bits(&correction.codeword), correction.error_position))
}

/// Hamming code as a value, for callers that are generic over [`ErrorCorrection`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingCode;

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        encode(data)
    }

    fn decode(&self, codeword: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        decode(codeword)
    }

    fn correct(&self, codeword: &BitSlice<u8, Msb0>) -> Correction {
        correct(codeword)
    }
}

//! Error correction code implementations.
//!
//! This module provides a single-error-correcting Hamming code over
//! arbitrary-length binary strings, together with the helpers needed to move
//! between `'0'`/`'1'` text and packed bits.
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Hamming codes (parity bits at every power-of-two position)
//!
//! # Examples
//!
//! ```rust
//! use hamcode::ecc::hamming::{correct_str, decode_str, encode_str};
//!
//! let codeword = encode_str("1011").unwrap();
//! assert_eq!(codeword, "0110011");
//!
//! // Flip the third bit and let the codec repair it
//! let (corrected, position) = correct_str("0100011").unwrap();
//! assert_eq!(corrected, codeword);
//! assert_eq!(position, 3);
//!
//! assert_eq!(decode_str("0100011").unwrap(), "1011");
//! ```

use bitvec::prelude::*;

pub use crate::cs::error::{Error, Result};

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data bits into a codeword
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0>;

    /// Decode a codeword back to its data bits, correcting errors if possible
    fn decode(&self, codeword: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0>;

    /// Locate and repair errors in a codeword without stripping parity
    fn correct(&self, codeword: &BitSlice<u8, Msb0>) -> Correction;
}

/// Conversion between `'0'`/`'1'` text and bit vectors
pub mod bits;
pub use bits::{format_bits, parse_bits, BitOrder};

/// Hamming single-error-correcting codes
pub mod hamming;
pub use hamming::{
    correct, decode, encode, error_position, is_parity_position, parity, Correction, HammingCode,
};

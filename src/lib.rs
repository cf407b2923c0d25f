//! qr_payload - QR code data segment decoder
//!
//! Turns the error-corrected data codewords of one QR symbol into its content:
//! concatenated text, the raw byte sequence, and the ordered list of segments
//! (numeric, alphanumeric, byte, kanji, ECI) the data was encoded with.
//!
//! Symbol detection, sampling and Reed-Solomon correction happen upstream;
//! this crate starts from the corrected codeword buffer and the symbol version.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Payload decoding (bit reader, segment loop, data modes)
pub mod decoder;
/// Decode errors
pub mod error;
/// Core data structures (DecodedResult, Chunk, Mode, SizeClass)
pub mod models;
/// Helpers for the command line tool (hex input, result rendering)
pub mod tools;

pub use decoder::batch::{BatchInput, decode_batch};
pub use error::DecodeError;
pub use models::{CORRUPTED_ECI, Chunk, DecodedResult, Mode, SizeClass};

/// Decode the data codewords of one QR symbol
///
/// # Arguments
/// * `data` - Error-corrected data codewords
/// * `version` - Symbol version (1-40), selects the character count widths
///
/// # Returns
/// The decoded text, bytes and segments, or the first fatal error
pub fn decode(data: &[u8], version: u8) -> Result<DecodedResult, DecodeError> {
    decoder::segments::decode_segments(data, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_repeatable() {
        let data = [0x40, 0x24, 0x84, 0x90];
        assert_eq!(decode(&data, 1), decode(&data, 1));
    }

    #[test]
    fn test_decode_rejects_version_zero() {
        assert_eq!(decode(&[], 0), Err(DecodeError::InvalidVersion(0)));
    }
}

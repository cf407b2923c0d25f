//! QR code payload decoding
//!
//! This module turns error-corrected data codewords into decoded content:
//! - Bit-level reading of the codeword buffer
//! - Segment loop (mode indicator dispatch and stream termination)
//! - Data mode decoding (numeric, alphanumeric, byte, kanji, ECI)
//! - Parallel batch decoding of independent buffers

/// Parallel decoding of independent buffers
pub mod batch;
/// MSB-first bit reader over codeword bytes
pub mod bit_cursor;
/// Environment driven settings
pub mod config;
/// Data mode decoders (numeric, alphanumeric, byte, kanji, ECI)
pub mod modes;
/// Mode indicator loop that drives the mode decoders
pub mod segments;
mod shift_jis;
/// Character tables (alphanumeric alphabet, Shift-JIS)
pub mod tables;

//! Segment loop: reads mode indicators and dispatches to the per-mode decoders.

use crate::debug::debug_enabled;
use crate::decoder::bit_cursor::BitCursor;
use crate::decoder::modes::{
    alphanumeric::AlphanumericDecoder, byte::ByteDecoder, eci::EciDecoder, kanji::KanjiDecoder,
    numeric::NumericDecoder,
};
use crate::error::DecodeError;
use crate::models::{Chunk, DecodedResult, Mode, SizeClass};

const TERMINATOR: u32 = 0x0;
const MODE_INDICATOR_BITS: usize = 4;

/// Decode the data codewords of one symbol.
///
/// The stream ends at a `0000` terminator, or when fewer than four bits are
/// left and all of them are zero. Nonzero trailing bits are reported as
/// [`DecodeError::UnterminatedStream`].
pub fn decode_segments(data: &[u8], version: u8) -> Result<DecodedResult, DecodeError> {
    let size = SizeClass::from_version(version)?;
    let mut cursor = BitCursor::new(data);
    let mut result = DecodedResult::new(version);

    while cursor.available() >= MODE_INDICATOR_BITS {
        let indicator = cursor.read_bits(MODE_INDICATOR_BITS);
        if indicator == TERMINATOR {
            if debug_enabled() {
                eprintln!(
                    "DEBUG: terminator at bit {}, {} chunks",
                    cursor.offset() - MODE_INDICATOR_BITS,
                    result.chunks.len()
                );
            }
            return Ok(result);
        }

        let Some(mode) = Mode::from_indicator(indicator as u8) else {
            if debug_enabled() {
                eprintln!(
                    "DEBUG: skipping reserved mode indicator {:#06b} at bit {}",
                    indicator,
                    cursor.offset() - MODE_INDICATOR_BITS
                );
            }
            continue;
        };

        let chunk = decode_segment(&mut cursor, mode, size)?;
        if debug_enabled() {
            eprintln!(
                "DEBUG: {:?} segment decoded, {} bits left",
                mode,
                cursor.available()
            );
        }
        result.push(chunk);
    }

    let remaining = cursor.available();
    let trailing = cursor.read_bits(remaining);
    if trailing != 0 {
        if debug_enabled() {
            eprintln!("DEBUG: {remaining} nonzero trailing bits, stream unterminated");
        }
        return Err(DecodeError::UnterminatedStream {
            remaining,
            bits: trailing,
        });
    }

    Ok(result)
}

fn decode_segment(
    cursor: &mut BitCursor<'_>,
    mode: Mode,
    size: SizeClass,
) -> Result<Chunk, DecodeError> {
    match mode {
        Mode::Numeric => NumericDecoder::decode(cursor, size),
        Mode::Alphanumeric => AlphanumericDecoder::decode(cursor, size),
        Mode::Byte => Ok(ByteDecoder::decode(cursor, size)),
        Mode::Kanji => KanjiDecoder::decode(cursor, size),
        Mode::Eci => Ok(EciDecoder::decode(cursor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_only() {
        for version in [1, 9, 10, 26, 27, 40] {
            let result = decode_segments(&[0x00], version).unwrap();
            assert_eq!(result, DecodedResult::new(version));
        }
    }

    #[test]
    fn test_empty_buffer() {
        let result = decode_segments(&[], 1).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.version, 1);
    }

    #[test]
    fn test_numeric_then_terminator() {
        // 0001 0000000011 0001111011 0000 = "123"
        let data = [0b0001_0000, 0b0000_1100, 0b0111_1011, 0b0000_0000];
        let result = decode_segments(&data, 1).unwrap();
        assert_eq!(result.text, "123");
        assert_eq!(result.bytes, vec![0x31, 0x32, 0x33]);
        assert_eq!(
            result.chunks,
            vec![Chunk::Numeric {
                text: "123".to_string()
            }]
        );
    }

    #[test]
    fn test_zero_padding_terminates() {
        // 0001 0000000010 0101010 + 3 zero bits = "42"
        let data = [0x10, 0x09, 0x50];
        let result = decode_segments(&data, 1).unwrap();
        assert_eq!(result.text, "42");
        assert_eq!(result.chunks.len(), 1);
    }

    #[test]
    fn test_nonzero_trailing_bits() {
        // 0001 0000000010 0101010 + trailing 101
        let data = [0x10, 0x09, 0x55];
        assert_eq!(
            decode_segments(&data, 1),
            Err(DecodeError::UnterminatedStream {
                remaining: 3,
                bits: 0b101
            })
        );
    }

    #[test]
    fn test_reserved_mode_is_skipped() {
        // 0011 (structured append, not dispatched) then 0000
        let result = decode_segments(&[0b0011_0000], 1).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(
            decode_segments(&[0x00], 0),
            Err(DecodeError::InvalidVersion(0))
        );
        assert_eq!(
            decode_segments(&[0x00], 41),
            Err(DecodeError::InvalidVersion(41))
        );
    }
}

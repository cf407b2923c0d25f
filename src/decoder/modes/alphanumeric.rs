/// Alphanumeric mode decoder (Mode 0010)
use crate::decoder::bit_cursor::BitCursor;
use crate::decoder::tables::alphanumeric_char;
use crate::error::DecodeError;
use crate::models::{Chunk, Mode, SizeClass};

/// Decode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode one alphanumeric segment, starting at its character count
    pub fn decode(cursor: &mut BitCursor<'_>, size: SizeClass) -> Result<Chunk, DecodeError> {
        let count = cursor.read_bits(Mode::Alphanumeric.char_count_bits(size)) as usize;
        let mut text = String::with_capacity(count);
        let mut chars_remaining = count;

        while chars_remaining >= 2 {
            let value = cursor.read_bits(11);
            let invalid = DecodeError::InvalidAlphanumeric { value, bits: 11 };
            let first = alphanumeric_char(value / 45).ok_or(invalid.clone())?;
            let second = alphanumeric_char(value % 45).ok_or(invalid)?;
            text.push(first);
            text.push(second);
            chars_remaining -= 2;
        }

        if chars_remaining == 1 {
            let value = cursor.read_bits(6);
            let c = alphanumeric_char(value)
                .ok_or(DecodeError::InvalidAlphanumeric { value, bits: 6 })?;
            text.push(c);
        }

        Ok(Chunk::Alphanumeric { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_decode() {
        // count=2 (9 bits) then "A1" = (10 * 45 + 1) = 451 = 0b00111000011 (11 bits)
        // 000000010 00111000011 + 4 pad bits
        let data = [0b0000_0001, 0b0001_1100, 0b0011_0000];
        let chunk = AlphanumericDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Ok(Chunk::Alphanumeric {
                text: "A1".to_string()
            })
        );
    }

    #[test]
    fn test_alphanumeric_single_character() {
        // count=1 (9 bits) then ':' = 44 = 0b101100 (6 bits)
        // 000000001 101100 + 1 pad bit
        let data = [0b0000_0000, 0b1101_1000];
        let chunk = AlphanumericDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Ok(Chunk::Alphanumeric {
                text: ":".to_string()
            })
        );
    }

    #[test]
    fn test_alphanumeric_rejects_index_past_table() {
        // count=1 then 45 = 0b101101
        let data = [0b0000_0000, 0b1101_1010];
        let chunk = AlphanumericDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Err(DecodeError::InvalidAlphanumeric { value: 45, bits: 6 })
        );
    }

    #[test]
    fn test_alphanumeric_rejects_pair_above_2024() {
        // count=2 then 2025 = 0b11111101001
        // 000000010 11111101001 + pad
        let data = [0b0000_0001, 0b0111_1110, 0b1001_0000];
        let chunk = AlphanumericDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Err(DecodeError::InvalidAlphanumeric {
                value: 2025,
                bits: 11
            })
        );
    }
}

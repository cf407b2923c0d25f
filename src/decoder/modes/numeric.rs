/// Numeric mode decoder (Mode 0001)
use crate::decoder::bit_cursor::BitCursor;
use crate::error::DecodeError;
use crate::models::{Chunk, Mode, SizeClass};

/// Decode numeric mode data
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode one numeric segment, starting at its character count
    pub fn decode(cursor: &mut BitCursor<'_>, size: SizeClass) -> Result<Chunk, DecodeError> {
        let count = cursor.read_bits(Mode::Numeric.char_count_bits(size)) as usize;
        let mut text = String::with_capacity(count);
        let mut chars_remaining = count;

        while chars_remaining >= 3 {
            Self::push_group(cursor, &mut text, 3)?;
            chars_remaining -= 3;
        }
        if chars_remaining > 0 {
            Self::push_group(cursor, &mut text, chars_remaining)?;
        }

        Ok(Chunk::Numeric { text })
    }

    fn push_group(
        cursor: &mut BitCursor<'_>,
        text: &mut String,
        group_size: usize,
    ) -> Result<(), DecodeError> {
        let (bits, limit) = match group_size {
            3 => (10, 1000),
            2 => (7, 100),
            _ => (4, 10),
        };
        let value = cursor.read_bits(bits);
        if value >= limit {
            return Err(DecodeError::InvalidNumeric { value, bits });
        }

        let mut divisor = limit / 10;
        while divisor > 0 {
            let digit = (value / divisor) % 10;
            text.push(char::from(b'0' + digit as u8));
            divisor /= 10;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_bits(bits: &[(u32, usize)], size: SizeClass) -> Result<Chunk, DecodeError> {
        let mut out = Vec::new();
        let mut acc = 0u64;
        let mut used = 0usize;
        for &(value, width) in bits {
            acc = (acc << width) | value as u64;
            used += width;
            while used >= 8 {
                out.push((acc >> (used - 8)) as u8);
                used -= 8;
            }
        }
        if used > 0 {
            out.push((acc << (8 - used)) as u8);
        }
        NumericDecoder::decode(&mut BitCursor::new(&out), size)
    }

    #[test]
    fn test_numeric_decode() {
        // "01234567" = 012 345 67
        let chunk = decode_bits(&[(8, 10), (12, 10), (345, 10), (67, 7)], SizeClass::Small);
        assert_eq!(
            chunk,
            Ok(Chunk::Numeric {
                text: "01234567".to_string()
            })
        );
    }

    #[test]
    fn test_numeric_single_digit_remainder() {
        let chunk = decode_bits(&[(4, 12), (999, 10), (7, 4)], SizeClass::Medium);
        assert_eq!(
            chunk,
            Ok(Chunk::Numeric {
                text: "9997".to_string()
            })
        );
    }

    #[test]
    fn test_numeric_rejects_out_of_range_groups() {
        assert_eq!(
            decode_bits(&[(3, 10), (1017, 10)], SizeClass::Small),
            Err(DecodeError::InvalidNumeric {
                value: 1017,
                bits: 10
            })
        );
        assert_eq!(
            decode_bits(&[(2, 10), (100, 7)], SizeClass::Small),
            Err(DecodeError::InvalidNumeric { value: 100, bits: 7 })
        );
        assert_eq!(
            decode_bits(&[(1, 10), (10, 4)], SizeClass::Small),
            Err(DecodeError::InvalidNumeric { value: 10, bits: 4 })
        );
    }

    #[test]
    fn test_numeric_empty_segment() {
        let chunk = decode_bits(&[(0, 14)], SizeClass::Large);
        assert_eq!(
            chunk,
            Ok(Chunk::Numeric {
                text: String::new()
            })
        );
    }
}

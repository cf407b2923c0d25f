/// Kanji mode decoder (Mode 1000)
use crate::decoder::bit_cursor::BitCursor;
use crate::decoder::tables::shift_jis_char;
use crate::error::DecodeError;
use crate::models::{Chunk, Mode, SizeClass};

/// Decode Kanji mode data: 13 bits per double-byte Shift-JIS character
pub struct KanjiDecoder;

impl KanjiDecoder {
    /// Decode one Kanji segment, starting at its character count
    pub fn decode(cursor: &mut BitCursor<'_>, size: SizeClass) -> Result<Chunk, DecodeError> {
        let count = cursor.read_bits(Mode::Kanji.char_count_bits(size)) as usize;
        let mut bytes = Vec::with_capacity(count * 2);
        let mut text = String::with_capacity(count * 3);

        for _ in 0..count {
            let code = Self::shift_jis_code(cursor.read_bits(13) as u16);
            let c = shift_jis_char(code).ok_or(DecodeError::UnknownKanji { code })?;
            bytes.push((code >> 8) as u8);
            bytes.push((code & 0xFF) as u8);
            text.push(c);
        }

        Ok(Chunk::Kanji { bytes, text })
    }

    /// Expand a 13-bit Kanji value to its Shift-JIS code
    pub fn shift_jis_code(value: u16) -> u16 {
        let intermediate = ((value / 0xC0) << 8) | (value % 0xC0);
        if intermediate < 0x1F00 {
            intermediate + 0x8140
        } else {
            intermediate + 0xC140
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_jis_code() {
        assert_eq!(KanjiDecoder::shift_jis_code(0), 0x8140);
        assert_eq!(KanjiDecoder::shift_jis_code(3642), 0x93FA);
        assert_eq!(KanjiDecoder::shift_jis_code(5952), 0xE040);
    }

    #[test]
    fn test_kanji_decode() {
        // count=2 (8 bits), 3642 and 4091 (13 bits each) = "日本"
        // 00000010 0111000111010 0111111111011 + 6 pad bits
        let data = [0b0000_0010, 0b0111_0001, 0b1101_0011, 0b1111_1110, 0b1100_0000];
        let chunk = KanjiDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Ok(Chunk::Kanji {
                bytes: vec![0x93, 0xFA, 0x96, 0x7B],
                text: "日本".to_string()
            })
        );
    }

    #[test]
    fn test_kanji_unknown_code() {
        // count=1, value 63 -> 0x817F, which has no character
        // 00000001 0000000111111 + 3 pad bits
        let data = [0b0000_0001, 0b0000_0001, 0b1111_1000];
        let chunk = KanjiDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(chunk, Err(DecodeError::UnknownKanji { code: 0x817F }));
    }
}

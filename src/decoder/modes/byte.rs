/// Byte mode decoder (Mode 0100) for 8-bit data
use crate::decoder::bit_cursor::BitCursor;
use crate::models::{Chunk, Mode, SizeClass};

/// Decode byte mode data (8 bits per character)
pub struct ByteDecoder;

impl ByteDecoder {
    /// Decode one byte segment, starting at its character count.
    ///
    /// Bytes that are not valid UTF-8 keep their raw value but yield empty text.
    pub fn decode(cursor: &mut BitCursor<'_>, size: SizeClass) -> Chunk {
        let count = cursor.read_bits(Mode::Byte.char_count_bits(size)) as usize;
        let bytes: Vec<u8> = (0..count).map(|_| cursor.read_bits(8) as u8).collect();

        let text = match std::str::from_utf8(&bytes) {
            Ok(s) => s.to_owned(),
            Err(_) => String::new(),
        };

        Chunk::Byte { bytes, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_decode() {
        // count=2, "HI" in ASCII = 72, 73
        let data = [2, b'H', b'I'];
        let chunk = ByteDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Chunk::Byte {
                bytes: b"HI".to_vec(),
                text: "HI".to_string()
            }
        );
    }

    #[test]
    fn test_byte_decode_utf8() {
        let text = "héllo";
        let mut data = vec![0, text.len() as u8];
        data.extend_from_slice(text.as_bytes());
        let chunk = ByteDecoder::decode(&mut BitCursor::new(&data), SizeClass::Medium);
        assert_eq!(chunk.text(), text);
    }

    #[test]
    fn test_invalid_utf8_keeps_bytes() {
        let data = [3, 0xFF, b'a', 0xC3];
        let chunk = ByteDecoder::decode(&mut BitCursor::new(&data), SizeClass::Small);
        assert_eq!(
            chunk,
            Chunk::Byte {
                bytes: vec![0xFF, b'a', 0xC3],
                text: String::new()
            }
        );
    }
}

/// ECI designator decoder (Mode 0111)
use crate::decoder::bit_cursor::BitCursor;
use crate::models::{CORRUPTED_ECI, Chunk};

/// Decode the assignment number of an Extended Channel Interpretation
pub struct EciDecoder;

impl EciDecoder {
    /// Read the designator: `0` + 7 bits, `10` + 14 bits or `110` + 21 bits.
    /// A `111` prefix is reported as [`CORRUPTED_ECI`] and consumes nothing further.
    pub fn decode(cursor: &mut BitCursor<'_>) -> Chunk {
        let assignment_number = if !cursor.read_bit() {
            cursor.read_bits(7) as i32
        } else if !cursor.read_bit() {
            cursor.read_bits(14) as i32
        } else if !cursor.read_bit() {
            cursor.read_bits(21) as i32
        } else {
            CORRUPTED_ECI
        };

        Chunk::Eci { assignment_number }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(data: &[u8]) -> (i32, usize) {
        let mut cursor = BitCursor::new(data);
        match EciDecoder::decode(&mut cursor) {
            Chunk::Eci { assignment_number } => (assignment_number, cursor.offset()),
            other => panic!("expected ECI chunk, got {other:?}"),
        }
    }

    #[test]
    fn test_one_byte_designator() {
        // 0 0000101
        assert_eq!(assignment(&[0b0000_0101]), (5, 8));
    }

    #[test]
    fn test_two_byte_designator() {
        // 10 00000011111111 = 255
        assert_eq!(assignment(&[0b1000_0000, 0b1111_1111]), (255, 16));
    }

    #[test]
    fn test_three_byte_designator() {
        // 110 000000100000000000000 = 16384
        assert_eq!(assignment(&[0b1100_0000, 0b0100_0000, 0b0000_0000]), (16384, 24));
    }

    #[test]
    fn test_corrupted_designator() {
        assert_eq!(assignment(&[0b1110_0000]), (CORRUPTED_ECI, 3));
    }
}

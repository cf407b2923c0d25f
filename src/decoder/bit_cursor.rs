/// MSB-first bit reader over a codeword buffer.
///
/// Reads past the end of the buffer are zero-filled: the offset still
/// advances by the requested width and `available` saturates at 0.
pub struct BitCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BitCursor<'a> {
    /// Start reading at the first bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bits consumed so far, including zero-filled ones
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unread bits backed by real data
    pub fn available(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.offset)
    }

    /// Read the next `n` bits (at most 32) as an unsigned integer.
    pub fn read_bits(&mut self, n: usize) -> u32 {
        debug_assert!(n <= 32, "read_bits supports at most 32 bits, got {n}");
        let n = n.min(32);
        let mut value = 0u32;
        let mut remaining = n;

        while remaining > 0 {
            let byte_idx = self.offset / 8;
            let bit_in_byte = self.offset % 8;
            let take = remaining.min(8 - bit_in_byte);
            let byte = self.bytes.get(byte_idx).copied().unwrap_or(0) as u32;
            let chunk = (byte >> (8 - bit_in_byte - take)) & ((1 << take) - 1);

            value = (value << take) | chunk;
            self.offset += take;
            remaining -= take;
        }

        value
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> bool {
        self.read_bits(1) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_msb_first() {
        let data = [0b1010_0011, 0b1100_0000];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_bits(4), 0b1010);
        assert_eq!(cursor.read_bits(6), 0b0011_11);
        assert_eq!(cursor.available(), 6);
        assert_eq!(cursor.offset(), 10);
    }

    #[test]
    fn test_read_zero_bits() {
        let mut cursor = BitCursor::new(&[0xFF]);
        assert_eq!(cursor.read_bits(0), 0);
        assert_eq!(cursor.available(), 8);
    }

    #[test]
    fn test_read_full_32_bits() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_bits(32), 0xDEAD_BEEF);
        assert_eq!(cursor.available(), 0);
    }

    #[test]
    fn test_read_past_end_is_zero_filled() {
        let mut cursor = BitCursor::new(&[0b1111_1111]);
        assert_eq!(cursor.read_bits(4), 0b1111);
        // 4 real bits followed by 4 padding zeros
        assert_eq!(cursor.read_bits(8), 0b1111_0000);
        assert_eq!(cursor.offset(), 12);
        assert_eq!(cursor.available(), 0);
        assert_eq!(cursor.read_bits(16), 0);
        assert_eq!(cursor.offset(), 28);
        assert_eq!(cursor.available(), 0);
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = BitCursor::new(&[]);
        assert_eq!(cursor.available(), 0);
        assert!(!cursor.read_bit());
        assert_eq!(cursor.offset(), 1);
    }
}

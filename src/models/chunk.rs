use super::Mode;

/// Assignment number reported for an ECI designator with three leading 1-bits.
pub const CORRUPTED_ECI: i32 = -1;

/// One decoded segment, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Digits 0-9
    Numeric {
        /// Decoded digit string
        text: String,
    },
    /// Characters from the 45-symbol alphanumeric alphabet
    Alphanumeric {
        /// Decoded string
        text: String,
    },
    /// 8-bit data
    Byte {
        /// Raw bytes as read from the stream
        bytes: Vec<u8>,
        /// UTF-8 view of `bytes`, empty when the bytes are not valid UTF-8
        text: String,
    },
    /// Shift-JIS double-byte characters
    Kanji {
        /// Shift-JIS byte pairs, high byte first
        bytes: Vec<u8>,
        /// Decoded characters
        text: String,
    },
    /// Extended Channel Interpretation switch
    Eci {
        /// Assignment number, or [`CORRUPTED_ECI`] for an unreadable designator
        assignment_number: i32,
    },
}

impl Chunk {
    /// Mode of the segment this chunk came from
    pub fn mode(&self) -> Mode {
        match self {
            Chunk::Numeric { .. } => Mode::Numeric,
            Chunk::Alphanumeric { .. } => Mode::Alphanumeric,
            Chunk::Byte { .. } => Mode::Byte,
            Chunk::Kanji { .. } => Mode::Kanji,
            Chunk::Eci { .. } => Mode::Eci,
        }
    }

    /// Text contributed to the overall result
    pub fn text(&self) -> &str {
        match self {
            Chunk::Numeric { text }
            | Chunk::Alphanumeric { text }
            | Chunk::Byte { text, .. }
            | Chunk::Kanji { text, .. } => text.as_str(),
            Chunk::Eci { .. } => "",
        }
    }

    /// Bytes contributed to the overall result.
    ///
    /// Numeric and alphanumeric chunks contribute the ASCII encoding of their text.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Chunk::Numeric { text } | Chunk::Alphanumeric { text } => text.as_bytes(),
            Chunk::Byte { bytes, .. } | Chunk::Kanji { bytes, .. } => bytes.as_slice(),
            Chunk::Eci { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_contributions() {
        let numeric = Chunk::Numeric {
            text: "123".to_string(),
        };
        assert_eq!(numeric.mode(), Mode::Numeric);
        assert_eq!(numeric.bytes(), b"123");

        let eci = Chunk::Eci {
            assignment_number: 26,
        };
        assert_eq!(eci.text(), "");
        assert!(eci.bytes().is_empty());

        let byte = Chunk::Byte {
            bytes: vec![0xFF],
            text: String::new(),
        };
        assert_eq!(byte.bytes(), &[0xFF]);
        assert_eq!(byte.text(), "");
    }
}

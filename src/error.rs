use thiserror::Error;

/// Errors raised while decoding a codeword buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Version outside the Model 2 range 1-40
    #[error("invalid QR version {0} (expected 1-40)")]
    InvalidVersion(u8),
    /// A numeric group decoded to a value its digit count cannot hold
    #[error("invalid numeric value {value} in {bits}-bit group")]
    InvalidNumeric {
        /// Raw group value
        value: u32,
        /// Width of the group in bits (10, 7 or 4)
        bits: usize,
    },
    /// An alphanumeric group pointed outside the 45-symbol alphabet
    #[error("invalid alphanumeric value {value} in {bits}-bit group")]
    InvalidAlphanumeric {
        /// Raw group value
        value: u32,
        /// Width of the group in bits (11 or 6)
        bits: usize,
    },
    /// Kanji code with no Shift-JIS character assigned
    #[error("no character for Shift-JIS code {code:#06X}")]
    UnknownKanji {
        /// Double-byte Shift-JIS code
        code: u16,
    },
    /// Fewer than four bits left after the last segment and they are not all zero
    #[error("unterminated stream: {remaining} trailing bits {bits:#b}")]
    UnterminatedStream {
        /// Number of trailing bits (1-3)
        remaining: usize,
        /// The trailing bits as an integer
        bits: u32,
    },
}

impl DecodeError {
    /// True for errors where the bitstream breaks the packing rules of a mode.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidNumeric { .. }
                | DecodeError::InvalidAlphanumeric { .. }
                | DecodeError::UnknownKanji { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_classification() {
        assert!(DecodeError::InvalidNumeric { value: 1000, bits: 10 }.is_format_error());
        assert!(DecodeError::UnknownKanji { code: 0x817F }.is_format_error());
        assert!(!DecodeError::InvalidVersion(41).is_format_error());
        assert!(!DecodeError::UnterminatedStream { remaining: 2, bits: 1 }.is_format_error());
    }

    #[test]
    fn test_error_messages() {
        let err = DecodeError::UnknownKanji { code: 0x817F };
        assert_eq!(err.to_string(), "no character for Shift-JIS code 0x817F");
        let err = DecodeError::InvalidVersion(0);
        assert_eq!(err.to_string(), "invalid QR version 0 (expected 1-40)");
    }
}

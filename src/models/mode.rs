use crate::error::DecodeError;

/// Field-width regime selected by the symbol version.
///
/// Versions 1-9 are small, 10-26 medium and 27-40 large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Versions 1-9
    Small = 0,
    /// Versions 10-26
    Medium = 1,
    /// Versions 27-40
    Large = 2,
}

impl SizeClass {
    /// Derive the size class from a Model 2 version number
    pub fn from_version(version: u8) -> Result<Self, DecodeError> {
        match version {
            1..=9 => Ok(SizeClass::Small),
            10..=26 => Ok(SizeClass::Medium),
            27..=40 => Ok(SizeClass::Large),
            _ => Err(DecodeError::InvalidVersion(version)),
        }
    }

    /// Index into per-class tables (0, 1 or 2)
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Segment modes that carry a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
    /// Mode 1000
    Kanji,
    /// Mode 0111
    Eci,
}

impl Mode {
    /// The 4-bit mode indicator that introduces this segment
    pub fn indicator(self) -> u8 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Kanji => 0x8,
            Mode::Eci => 0x7,
        }
    }

    /// Map a mode indicator to a mode. Terminator and reserved indicators give `None`.
    pub fn from_indicator(indicator: u8) -> Option<Self> {
        match indicator {
            0x1 => Some(Mode::Numeric),
            0x2 => Some(Mode::Alphanumeric),
            0x4 => Some(Mode::Byte),
            0x8 => Some(Mode::Kanji),
            0x7 => Some(Mode::Eci),
            _ => None,
        }
    }

    /// Width of the character count prefix. ECI segments have none.
    pub fn char_count_bits(self, size: SizeClass) -> usize {
        let widths: [usize; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
            Mode::Eci => [0, 0, 0],
        };
        widths[size.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_boundaries() {
        assert_eq!(SizeClass::from_version(1), Ok(SizeClass::Small));
        assert_eq!(SizeClass::from_version(9), Ok(SizeClass::Small));
        assert_eq!(SizeClass::from_version(10), Ok(SizeClass::Medium));
        assert_eq!(SizeClass::from_version(26), Ok(SizeClass::Medium));
        assert_eq!(SizeClass::from_version(27), Ok(SizeClass::Large));
        assert_eq!(SizeClass::from_version(40), Ok(SizeClass::Large));
        assert_eq!(
            SizeClass::from_version(0),
            Err(DecodeError::InvalidVersion(0))
        );
        assert_eq!(
            SizeClass::from_version(41),
            Err(DecodeError::InvalidVersion(41))
        );
    }

    #[test]
    fn test_indicator_mapping() {
        for mode in [
            Mode::Numeric,
            Mode::Alphanumeric,
            Mode::Byte,
            Mode::Kanji,
            Mode::Eci,
        ] {
            assert_eq!(Mode::from_indicator(mode.indicator()), Some(mode));
        }
        // Terminator, structured append, FNC1
        assert_eq!(Mode::from_indicator(0x0), None);
        assert_eq!(Mode::from_indicator(0x3), None);
        assert_eq!(Mode::from_indicator(0x5), None);
        assert_eq!(Mode::from_indicator(0x9), None);
    }

    #[test]
    fn test_char_count_bits() {
        assert_eq!(Mode::Numeric.char_count_bits(SizeClass::Small), 10);
        assert_eq!(Mode::Numeric.char_count_bits(SizeClass::Large), 14);
        assert_eq!(Mode::Alphanumeric.char_count_bits(SizeClass::Medium), 11);
        assert_eq!(Mode::Byte.char_count_bits(SizeClass::Small), 8);
        assert_eq!(Mode::Byte.char_count_bits(SizeClass::Medium), 16);
        assert_eq!(Mode::Byte.char_count_bits(SizeClass::Large), 16);
        assert_eq!(Mode::Kanji.char_count_bits(SizeClass::Large), 12);
    }
}

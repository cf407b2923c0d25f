use super::shift_jis::{SHIFT_JIS_TABLE, TRAIL_COUNT};

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Look up an alphanumeric character by index
pub fn alphanumeric_char(index: u32) -> Option<char> {
    ALPHANUMERIC_TABLE.get(index as usize).copied()
}

/// Map a double-byte Shift-JIS code to its character.
///
/// Only the lead bytes Kanji mode can produce (`0x81-0x9F`, `0xE0-0xEB`) are covered.
pub fn shift_jis_char(code: u16) -> Option<char> {
    let lead = (code >> 8) as usize;
    let trail = (code & 0xFF) as usize;
    let row = match lead {
        0x81..=0x9F => lead - 0x81,
        0xE0..=0xEB => lead - 0xE0 + (0x9F - 0x81 + 1),
        _ => return None,
    };
    if !(0x40..0x40 + TRAIL_COUNT).contains(&trail) {
        return None;
    }
    match SHIFT_JIS_TABLE[row][trail - 0x40] {
        0 => None,
        unit => char::from_u32(unit as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_table_order() {
        assert_eq!(alphanumeric_char(0), Some('0'));
        assert_eq!(alphanumeric_char(10), Some('A'));
        assert_eq!(alphanumeric_char(36), Some(' '));
        assert_eq!(alphanumeric_char(44), Some(':'));
        assert_eq!(alphanumeric_char(45), None);
    }

    #[test]
    fn test_shift_jis_lookup() {
        assert_eq!(shift_jis_char(0x8140), Some('\u{3000}'));
        assert_eq!(shift_jis_char(0x93FA), Some('日'));
        assert_eq!(shift_jis_char(0x967B), Some('本'));
        assert_eq!(shift_jis_char(0xE040), Some('漾'));
        assert_eq!(shift_jis_char(0xE4AA), Some('茗'));
    }

    #[test]
    fn test_shift_jis_unassigned() {
        // 0x7F is never a valid trail byte
        assert_eq!(shift_jis_char(0x817F), None);
        assert_eq!(shift_jis_char(0x81FF), None);
        assert_eq!(shift_jis_char(0xA040), None);
        assert_eq!(shift_jis_char(0x0041), None);
    }
}

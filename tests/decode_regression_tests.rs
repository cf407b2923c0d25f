//! Integration tests for payload decoding
//!
//! Streams are built with a small test-only bit writer and decoded through the
//! public `decode` entry point, covering every mode, mixed streams, the
//! termination rules and the fatal format errors.

mod common;

use common::{
    ALPHANUMERIC_COUNT_BITS, BYTE_COUNT_BITS, BitWriter, KANJI_COUNT_BITS, NUMERIC_COUNT_BITS,
    VERSIONS,
};
use qr_payload::{CORRUPTED_ECI, Chunk, DecodeError, DecodedResult, decode};

#[test]
fn test_terminator_only_for_every_version() {
    for version in 1..=40u8 {
        let result = decode(&[0x00], version).unwrap();
        assert_eq!(result.text, "");
        assert!(result.bytes.is_empty());
        assert!(result.chunks.is_empty());
        assert_eq!(result.version, version);
    }
}

#[test]
fn test_numeric_123() {
    let data = BitWriter::new().numeric("123", 10).terminator().finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(
        result.chunks,
        vec![Chunk::Numeric {
            text: "123".to_string()
        }]
    );
    assert_eq!(result.bytes, vec![0x31, 0x32, 0x33]);
    assert_eq!(result.text, "123");
}

#[test]
fn test_numeric_999_group_accepted() {
    let data = BitWriter::new().numeric("999", 10).terminator().finish();
    assert_eq!(decode(&data, 1).unwrap().text, "999");
}

#[test]
fn test_numeric_group_of_1000_rejected() {
    let data = BitWriter::new()
        .push(0b0001, 4)
        .push(3, 10)
        .push(1000, 10)
        .terminator()
        .finish();
    assert_eq!(
        decode(&data, 1),
        Err(DecodeError::InvalidNumeric {
            value: 1000,
            bits: 10
        })
    );
}

#[test]
fn test_numeric_error_aborts_after_earlier_segments() {
    // A valid byte segment followed by a corrupt numeric one yields no partial result
    let mut writer = BitWriter::new();
    writer.byte(b"ok", 8).push(0b0001, 4).push(2, 10).push(127, 7);
    let err = decode(&writer.finish(), 1).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_alphanumeric_segment() {
    let data = BitWriter::new()
        .alphanumeric("HELLO WORLD", 9)
        .terminator()
        .finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(result.text, "HELLO WORLD");
    assert_eq!(result.bytes, b"HELLO WORLD");
    assert_eq!(
        result.chunks,
        vec![Chunk::Alphanumeric {
            text: "HELLO WORLD".to_string()
        }]
    );
}

#[test]
fn test_byte_segment_medium_version() {
    let data = BitWriter::new()
        .byte("grüße".as_bytes(), 16)
        .terminator()
        .finish();
    let result = decode(&data, 15).unwrap();
    assert_eq!(result.text, "grüße");
    assert_eq!(result.bytes, "grüße".as_bytes());
}

#[test]
fn test_invalid_utf8_does_not_abort() {
    let data = BitWriter::new()
        .byte(&[0xFE, 0xFF], 8)
        .numeric("7", 10)
        .terminator()
        .finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(result.text, "7");
    assert_eq!(result.bytes, vec![0xFE, 0xFF, b'7']);
    assert_eq!(
        result.chunks[0],
        Chunk::Byte {
            bytes: vec![0xFE, 0xFF],
            text: String::new()
        }
    );
}

#[test]
fn test_kanji_zero_value() {
    let data = BitWriter::new().kanji(&[0], 8).terminator().finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(result.bytes, vec![0x81, 0x40]);
    assert_eq!(result.text, "\u{3000}");
}

#[test]
fn test_kanji_both_code_ranges() {
    // 日 (0x93FA) and 漾 (0xE040)
    let data = BitWriter::new()
        .kanji(&[3642, 5952], 12)
        .terminator()
        .finish();
    let result = decode(&data, 40).unwrap();
    assert_eq!(result.text, "日漾");
    assert_eq!(result.bytes, vec![0x93, 0xFA, 0xE0, 0x40]);
}

#[test]
fn test_kanji_unknown_code_rejected() {
    // 8191 -> 0xEBBF, past the last assigned row
    let data = BitWriter::new().kanji(&[8191], 8).terminator().finish();
    assert_eq!(
        decode(&data, 1),
        Err(DecodeError::UnknownKanji { code: 0xEBBF })
    );
}

#[test]
fn test_eci_contributes_no_content() {
    let data = BitWriter::new().eci(5).terminator().finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(
        result.chunks,
        vec![Chunk::Eci {
            assignment_number: 5
        }]
    );
    assert_eq!(result.text, "");
    assert!(result.bytes.is_empty());
}

#[test]
fn test_eci_multi_byte_designators() {
    let data = BitWriter::new()
        .eci(900)
        .eci(100_000)
        .terminator()
        .finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(result.eci_assignments().collect::<Vec<_>>(), vec![900, 100_000]);
}

#[test]
fn test_corrupted_eci_sentinel() {
    // 0111 111, then the stream continues with a terminator
    let data = BitWriter::new()
        .push(0b0111, 4)
        .push(0b111, 3)
        .terminator()
        .finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(
        result.chunks,
        vec![Chunk::Eci {
            assignment_number: CORRUPTED_ECI
        }]
    );
}

#[test]
fn test_mixed_stream_keeps_order() {
    let data = BitWriter::new()
        .eci(26)
        .numeric("2024", 10)
        .alphanumeric("-QR", 9)
        .byte("✓".as_bytes(), 8)
        .kanji(&[4091], 8)
        .terminator()
        .finish();
    let result = decode(&data, 5).unwrap();

    assert_eq!(result.text, "2024-QR✓本");
    let mut expected_bytes = b"2024-QR".to_vec();
    expected_bytes.extend_from_slice("✓".as_bytes());
    expected_bytes.extend_from_slice(&[0x96, 0x7B]);
    assert_eq!(result.bytes, expected_bytes);

    let modes: Vec<_> = result.chunks.iter().map(Chunk::mode).collect();
    assert_eq!(
        modes,
        vec![
            qr_payload::Mode::Eci,
            qr_payload::Mode::Numeric,
            qr_payload::Mode::Alphanumeric,
            qr_payload::Mode::Byte,
            qr_payload::Mode::Kanji,
        ]
    );
}

#[test]
fn test_count_widths_follow_size_class() {
    for (class, &version) in VERSIONS.iter().enumerate() {
        let data = BitWriter::new()
            .numeric("31415", NUMERIC_COUNT_BITS[class])
            .alphanumeric("PI", ALPHANUMERIC_COUNT_BITS[class])
            .byte(b"=", BYTE_COUNT_BITS[class])
            .kanji(&[3487], KANJI_COUNT_BITS[class])
            .terminator()
            .finish();
        let result = decode(&data, version).unwrap();
        assert_eq!(result.text, "31415PI=点", "version {version}");
    }
}

#[test]
fn test_padding_codewords_after_terminator_are_ignored() {
    let mut data = BitWriter::new().numeric("42", 10).terminator().finish();
    data.extend_from_slice(&[0xEC, 0x11, 0xEC, 0x11]);
    assert_eq!(decode(&data, 1).unwrap().text, "42");
}

#[test]
fn test_zero_trailing_bits_terminate() {
    // 4 + 10 + 7 = 21 bits, three zero bits left over
    let mut writer = BitWriter::new();
    writer.numeric("42", 10);
    assert_eq!(writer.bit_len(), 21);
    let result = decode(&writer.finish(), 1).unwrap();
    assert_eq!(result.text, "42");
}

#[test]
fn test_nonzero_trailing_bits_are_unterminated() {
    let mut writer = BitWriter::new();
    writer.numeric("42", 10).push(0b011, 3);
    assert_eq!(
        decode(&writer.finish(), 1),
        Err(DecodeError::UnterminatedStream {
            remaining: 3,
            bits: 0b011
        })
    );
}

#[test]
fn test_truncated_segment_reads_zero_padding() {
    // Byte count says 3 but only one byte follows; missing bytes read as zero
    let data = BitWriter::new().push(0b0100, 4).push(3, 8).push(b'A' as u32, 8).finish();
    let result = decode(&data, 1).unwrap();
    assert_eq!(
        result.chunks,
        vec![Chunk::Byte {
            bytes: vec![b'A', 0, 0],
            text: "A\0\0".to_string()
        }]
    );
}

#[test]
fn test_decode_twice_is_identical() {
    let data = BitWriter::new()
        .eci(3)
        .alphanumeric("AC-42", 9)
        .terminator()
        .finish();
    let first: DecodedResult = decode(&data, 2).unwrap();
    let second = decode(&data, 2).unwrap();
    assert_eq!(first, second);
}

//! Property tests: streams written by the test bit writer decode back to their input.

mod common;

use common::{
    ALPHANUMERIC_COUNT_BITS, BYTE_COUNT_BITS, BitWriter, NUMERIC_COUNT_BITS, VERSIONS,
};
use proptest::prelude::*;
use qr_payload::{Chunk, decode};

proptest! {
    #[test]
    fn prop_numeric_round_trip(digits in "[0-9]{0,60}", class in 0usize..3) {
        let data = BitWriter::new()
            .numeric(&digits, NUMERIC_COUNT_BITS[class])
            .terminator()
            .finish();
        let result = decode(&data, VERSIONS[class]).unwrap();
        prop_assert_eq!(&result.text, &digits);
        prop_assert_eq!(result.bytes.as_slice(), digits.as_bytes());
    }

    #[test]
    fn prop_alphanumeric_round_trip(
        text in "[0-9A-Z $%*+\\-./:]{0,40}",
        class in 0usize..3,
    ) {
        let data = BitWriter::new()
            .alphanumeric(&text, ALPHANUMERIC_COUNT_BITS[class])
            .terminator()
            .finish();
        let result = decode(&data, VERSIONS[class]).unwrap();
        prop_assert_eq!(&result.text, &text);
    }

    #[test]
    fn prop_byte_mode_preserves_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        class in 0usize..3,
    ) {
        let data = BitWriter::new()
            .byte(&bytes, BYTE_COUNT_BITS[class])
            .terminator()
            .finish();
        let result = decode(&data, VERSIONS[class]).unwrap();
        prop_assert_eq!(&result.bytes, &bytes);
        let expected_text = std::str::from_utf8(&bytes).unwrap_or("");
        prop_assert_eq!(result.text.as_str(), expected_text);
        let is_byte_chunk = matches!(result.chunks.as_slice(), [Chunk::Byte { .. }]);
        prop_assert!(is_byte_chunk);
    }

    #[test]
    fn prop_decode_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..48), version in 1u8..=40) {
        prop_assert_eq!(decode(&data, version), decode(&data, version));
    }
}

use super::Chunk;

/// Everything decoded from one symbol's data codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResult {
    /// Concatenated chunk text
    pub text: String,
    /// Concatenated chunk bytes (ECI chunks contribute none)
    pub bytes: Vec<u8>,
    /// Decoded segments in stream order
    pub chunks: Vec<Chunk>,
    /// Symbol version the buffer was decoded with
    pub version: u8,
}

impl DecodedResult {
    /// Create an empty result for the given version
    pub fn new(version: u8) -> Self {
        Self {
            text: String::new(),
            bytes: Vec::new(),
            chunks: Vec::new(),
            version,
        }
    }

    pub(crate) fn push(&mut self, chunk: Chunk) {
        self.text.push_str(chunk.text());
        self.bytes.extend_from_slice(chunk.bytes());
        self.chunks.push(chunk);
    }

    /// True when no segment was decoded
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// ECI assignment numbers in stream order
    pub fn eci_assignments(&self) -> impl Iterator<Item = i32> + '_ {
        self.chunks.iter().filter_map(|chunk| match chunk {
            Chunk::Eci { assignment_number } => Some(*assignment_number),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates_in_order() {
        let mut result = DecodedResult::new(1);
        assert!(result.is_empty());
        result.push(Chunk::Eci {
            assignment_number: 26,
        });
        result.push(Chunk::Alphanumeric {
            text: "AB".to_string(),
        });
        result.push(Chunk::Byte {
            bytes: b"cd".to_vec(),
            text: "cd".to_string(),
        });

        assert_eq!(result.text, "ABcd");
        assert_eq!(result.bytes, b"ABcd");
        assert_eq!(result.chunks.len(), 3);
        assert_eq!(result.eci_assignments().collect::<Vec<_>>(), vec![26]);
    }
}

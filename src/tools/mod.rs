use crate::{Chunk, DecodedResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading codeword input for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Hex text had an odd number of digits
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    /// A character that is not a hex digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    /// A batch line without `<version> <hex>`
    #[error("line {line}: expected `<version> <hex>`")]
    MalformedLine {
        /// 1-based line number
        line: usize,
    },
    /// The batch file could not be read
    #[error("failed to read {path}: {message}")]
    Read {
        /// Path as given
        path: String,
        /// Underlying I/O error text
        message: String,
    },
}

/// Parse codewords written as hex. Whitespace between digits is ignored.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InputError> {
    let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(InputError::OddLength(digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0].to_digit(16).ok_or(InputError::InvalidDigit(pair[0]))?;
            let lo = pair[1].to_digit(16).ok_or(InputError::InvalidDigit(pair[1]))?;
            Ok(((hi << 4) | lo) as u8)
        })
        .collect()
}

/// Format bytes as lowercase hex, space separated.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// One line of a batch file: `<version> <hex codewords>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    /// 1-based line number in the file
    pub line: usize,
    /// Symbol version
    pub version: u8,
    /// Codeword bytes
    pub data: Vec<u8>,
}

/// Parse batch input. Blank lines and `#` comments are skipped.
pub fn parse_batch(content: &str) -> Result<Vec<BatchLine>, InputError> {
    let mut lines = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (version, hex) = trimmed
            .split_once(char::is_whitespace)
            .ok_or(InputError::MalformedLine { line })?;
        let version = version
            .parse::<u8>()
            .map_err(|_| InputError::MalformedLine { line })?;
        let data = parse_hex(hex)?;
        lines.push(BatchLine {
            line,
            version,
            data,
        });
    }
    Ok(lines)
}

/// Read and parse a batch file.
pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<Vec<BatchLine>, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| InputError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    parse_batch(&content)
}

/// Short description of a chunk for display.
pub fn describe_chunk(chunk: &Chunk) -> String {
    match chunk {
        Chunk::Numeric { text } => format!("numeric {text:?}"),
        Chunk::Alphanumeric { text } => format!("alphanumeric {text:?}"),
        Chunk::Byte { bytes, text } => {
            format!("byte [{}] {:?}", to_hex(bytes), text)
        }
        Chunk::Kanji { bytes, text } => {
            format!("kanji [{}] {:?}", to_hex(bytes), text)
        }
        Chunk::Eci { assignment_number } => format!("eci {assignment_number}"),
    }
}

/// Multi-line report for a decoded result.
pub fn render_result(result: &DecodedResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "version: {}", result.version);
    let _ = writeln!(out, "text: {:?}", result.text);
    let _ = writeln!(out, "bytes: {}", to_hex(&result.bytes));
    let _ = writeln!(out, "chunks: {}", result.chunks.len());
    for (i, chunk) in result.chunks.iter().enumerate() {
        let _ = writeln!(out, "  {i}: {}", describe_chunk(chunk));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_temp_file(contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("qr_payload_batch_{nanos}_{sequence}.txt"));
        fs::write(&path, contents).expect("failed to write temp batch file");
        path
    }

    #[test]
    fn parse_hex_accepts_whitespace_and_case() {
        assert_eq!(parse_hex("40 24\n84 9F"), Ok(vec![0x40, 0x24, 0x84, 0x9F]));
        assert_eq!(parse_hex(""), Ok(vec![]));
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex("abc"), Err(InputError::OddLength(3)));
        assert_eq!(parse_hex("zz"), Err(InputError::InvalidDigit('z')));
    }

    #[test]
    fn to_hex_formats_bytes() {
        assert_eq!(to_hex(&[0x00, 0xAB, 0x10]), "00 ab 10");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn load_batch_skips_comments_and_blank_lines() {
        let path = write_temp_file("# codewords\n\n1 40248490\n20  00\n");
        let lines = load_batch(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 3);
        assert_eq!(lines[0].data, vec![0x40, 0x24, 0x84, 0x90]);
        assert_eq!(lines[1].version, 20);
        assert_eq!(lines[1].data, vec![0x00]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn parse_batch_reports_malformed_line() {
        assert_eq!(
            parse_batch("1 00\nnot-a-line\n"),
            Err(InputError::MalformedLine { line: 2 })
        );
        assert_eq!(
            parse_batch("x 00\n"),
            Err(InputError::MalformedLine { line: 1 })
        );
    }

    #[test]
    fn render_result_lists_chunks() {
        let result = crate::decode(&[0x40, 0x24, 0x84, 0x90], 1).unwrap();
        let report = render_result(&result);
        assert!(report.contains("text: \"HI\""));
        assert!(report.contains("bytes: 48 49"));
        assert!(report.contains("0: byte [48 49] \"HI\""));
    }
}

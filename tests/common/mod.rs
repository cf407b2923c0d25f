//! Test-only segment writer used to build codeword buffers.

#![allow(dead_code)]

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// MSB-first bit writer
#[derive(Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bits: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u32, width: usize) -> &mut Self {
        for i in (0..width).rev() {
            if self.bits % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.bits % 8);
            }
            self.bits += 1;
        }
        self
    }

    pub fn bit_len(&self) -> usize {
        self.bits
    }

    pub fn numeric(&mut self, digits: &str, count_bits: usize) -> &mut Self {
        self.push(0b0001, 4).push(digits.len() as u32, count_bits);
        for group in digits.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32);
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            self.push(value, width);
        }
        self
    }

    pub fn alphanumeric(&mut self, text: &str, count_bits: usize) -> &mut Self {
        self.push(0b0010, 4).push(text.len() as u32, count_bits);
        let indices: Vec<u32> = text
            .chars()
            .map(|c| ALPHANUMERIC.find(c).expect("not an alphanumeric character") as u32)
            .collect();
        for pair in indices.chunks(2) {
            match pair {
                [a, b] => self.push(a * 45 + b, 11),
                [a] => self.push(*a, 6),
                _ => unreachable!(),
            };
        }
        self
    }

    pub fn byte(&mut self, bytes: &[u8], count_bits: usize) -> &mut Self {
        self.push(0b0100, 4).push(bytes.len() as u32, count_bits);
        for &b in bytes {
            self.push(b as u32, 8);
        }
        self
    }

    pub fn kanji(&mut self, values: &[u32], count_bits: usize) -> &mut Self {
        self.push(0b1000, 4).push(values.len() as u32, count_bits);
        for &v in values {
            self.push(v, 13);
        }
        self
    }

    pub fn eci(&mut self, assignment: u32) -> &mut Self {
        self.push(0b0111, 4);
        if assignment < 1 << 7 {
            self.push(0, 1).push(assignment, 7)
        } else if assignment < 1 << 14 {
            self.push(0b10, 2).push(assignment, 14)
        } else {
            self.push(0b110, 3).push(assignment, 21)
        }
    }

    pub fn terminator(&mut self) -> &mut Self {
        self.push(0, 4)
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Character count widths per size class, indexed like `SizeClass::index`.
pub const NUMERIC_COUNT_BITS: [usize; 3] = [10, 12, 14];
pub const ALPHANUMERIC_COUNT_BITS: [usize; 3] = [9, 11, 13];
pub const BYTE_COUNT_BITS: [usize; 3] = [8, 16, 16];
pub const KANJI_COUNT_BITS: [usize; 3] = [8, 10, 12];

/// A representative version for each size class.
pub const VERSIONS: [u8; 3] = [1, 10, 27];

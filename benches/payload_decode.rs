use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_payload::{BatchInput, decode, decode_batch};

/// Byte segment of `len` bytes for a version 10-26 symbol, then a terminator.
fn byte_stream(len: usize) -> Vec<u8> {
    let mut data = vec![0x40 | (len >> 12) as u8, (len >> 4) as u8, ((len & 0xF) << 4) as u8];
    let last = data.len() - 1;
    for i in 0..len {
        let b = b'a' + (i % 26) as u8;
        data[last] |= b >> 4;
        data.push(b << 4);
    }
    data
}

/// Numeric segment of `len` digits for a version 1-9 symbol.
fn numeric_stream(len: usize) -> Vec<u8> {
    let mut bits: Vec<bool> = Vec::new();
    let mut push = |value: u32, width: usize| {
        for i in (0..width).rev() {
            bits.push((value >> i) & 1 == 1);
        }
    };
    push(0b0001, 4);
    push(len as u32, 10);
    let mut remaining = len;
    while remaining >= 3 {
        push(123, 10);
        remaining -= 3;
    }
    match remaining {
        2 => push(45, 7),
        1 => push(6, 4),
        _ => {}
    }
    push(0, 4);
    bits.chunks(8)
        .map(|c| c.iter().enumerate().fold(0u8, |acc, (i, &b)| acc | ((b as u8) << (7 - i))))
        .collect()
}

fn bench_decode_byte(c: &mut Criterion) {
    let data = byte_stream(1024);
    c.bench_function("decode_byte_1k", |b| {
        b.iter(|| decode(black_box(&data), black_box(20)))
    });
}

fn bench_decode_numeric(c: &mut Criterion) {
    let data = numeric_stream(600);
    c.bench_function("decode_numeric_600", |b| {
        b.iter(|| decode(black_box(&data), black_box(5)))
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let buffers: Vec<Vec<u8>> = (0..256).map(|i| byte_stream(64 + i)).collect();
    let inputs: Vec<BatchInput<'_>> = buffers.iter().map(|b| (b.as_slice(), 20)).collect();
    c.bench_function("decode_batch_256", |b| {
        b.iter(|| decode_batch(black_box(&inputs)))
    });
}

criterion_group!(
    benches,
    bench_decode_byte,
    bench_decode_numeric,
    bench_decode_batch
);
criterion_main!(benches);

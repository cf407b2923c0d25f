use rayon::prelude::*;

use crate::decoder::config::{batch_min_len, batch_threads};
use crate::decoder::segments::decode_segments;
use crate::error::DecodeError;
use crate::models::DecodedResult;

/// Codeword buffer paired with the version of the symbol it came from
pub type BatchInput<'a> = (&'a [u8], u8);

/// Decode many independent buffers in parallel.
///
/// Output order matches input order; each entry equals what
/// [`decode_segments`] returns for that buffer alone.
pub fn decode_batch(inputs: &[BatchInput<'_>]) -> Vec<Result<DecodedResult, DecodeError>> {
    let run = || -> Vec<Result<DecodedResult, DecodeError>> {
        inputs
            .par_iter()
            .with_min_len(batch_min_len())
            .map(|&(data, version)| decode_segments(data, version))
            .collect()
    };

    match batch_threads() {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(_) => run(),
        },
        None => run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        // "HI" in byte mode, then an empty stream, then a bad version
        let hi = [0x40, 0x24, 0x84, 0x90];
        let empty = [0x00];
        let inputs: Vec<BatchInput<'_>> = vec![(&hi[..], 1), (&empty[..], 20), (&empty[..], 0)];
        let results = decode_batch(&inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(|r| r.text.as_str()), Ok("HI"));
        assert_eq!(results[1], Ok(DecodedResult::new(20)));
        assert_eq!(results[2], Err(DecodeError::InvalidVersion(0)));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let buffers: Vec<Vec<u8>> = (0..64u8)
            .map(|n| vec![0x40, 0x10 | (n >> 4), n << 4, 0x00])
            .collect();
        let inputs: Vec<BatchInput<'_>> = buffers.iter().map(|b| (b.as_slice(), 1)).collect();

        let parallel = decode_batch(&inputs);
        let sequential: Vec<_> = inputs
            .iter()
            .map(|&(data, version)| decode_segments(data, version))
            .collect();
        assert_eq!(parallel, sequential);
    }
}

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static BATCH_THREADS: OnceLock<Option<usize>> = OnceLock::new();

/// Worker count for batch decoding; `None` leaves the choice to rayon.
pub(crate) fn batch_threads() -> Option<usize> {
    *BATCH_THREADS.get_or_init(|| match parse_env_usize("QR_BATCH_THREADS", 0) {
        0 => None,
        n => Some(n.clamp(1, 256)),
    })
}

static BATCH_MIN_LEN: OnceLock<usize> = OnceLock::new();

/// Minimum number of buffers handed to one rayon job.
pub(crate) fn batch_min_len() -> usize {
    *BATCH_MIN_LEN.get_or_init(|| parse_env_usize("QR_BATCH_MIN_LEN", 4).clamp(1, 1024))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_usize_default() {
        assert_eq!(parse_env_usize("QR_PAYLOAD_TEST_UNSET_VARIABLE", 7), 7);
    }

    #[test]
    fn test_batch_min_len_in_range() {
        let min_len = batch_min_len();
        assert!((1..=1024).contains(&min_len));
    }
}

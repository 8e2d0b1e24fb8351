//! Tests for the stable string hash

#[cfg(test)]
mod tests {
    use convviz::color::hash::{MAX_HASH, cyrb53, filter_channel_key};

    // Tests agreement with published cyrb53 reference values
    // Verified by using arithmetic instead of wrapping multiplication
    #[test]
    fn test_reference_values() {
        assert_eq!(cyrb53("a", 0), 7_929_297_801_672_961);
        assert_eq!(cyrb53("b", 0), 8_684_336_938_537_663);
    }

    // Tests identical input hashes identically
    // Verified by mixing in a per-process random seed
    #[test]
    fn test_deterministic() {
        let key = filter_channel_key(3, 2);
        assert_eq!(cyrb53(&key, 0), cyrb53(&key, 0));
        assert_ne!(cyrb53(&key, 0), cyrb53(&key, 1));
    }

    // Tests the result fits in 53 bits
    // Verified by keeping all 32 bits of h2
    #[test]
    fn test_fits_53_bits() {
        for filter in 0..4 {
            for channel in 0..3 {
                assert!(cyrb53(&filter_channel_key(filter, channel), 0) <= MAX_HASH);
            }
        }
    }

    // Tests the canonical key layout
    // Verified by swapping field order
    #[test]
    fn test_filter_channel_key() {
        assert_eq!(filter_channel_key(1, 2), r#"{"filter":1,"channel":2}"#);
        assert_eq!(cyrb53(&filter_channel_key(0, 0), 0), 5_664_935_457_138_999);
    }
}

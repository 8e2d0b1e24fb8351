//! Stable 53-bit string hash (cyrb53)
//!
//! Output depends only on the UTF-16 code units of the input and the seed, so
//! the same key hashes identically across runs and platforms. Mixing follows
//! 32-bit wrapping multiplication as in the reference cyrb53.

/// Largest value the hash can produce
pub const MAX_HASH: u64 = (1 << 53) - 1;

/// Hash `input` into a 53-bit value
pub fn cyrb53(input: &str, seed: u32) -> u64 {
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in input.encode_utf16() {
        let unit = u32::from(unit);
        h1 = (h1 ^ unit).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ unit).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x001f_ffff) << 32) | u64::from(h1)
}

/// Canonical key string for a filter/channel pair
pub fn filter_channel_key(filter: usize, channel: usize) -> String {
    format!("{{\"filter\":{filter},\"channel\":{channel}}}")
}

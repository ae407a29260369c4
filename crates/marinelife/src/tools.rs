use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uses the configured seed or draws a fresh one from the thread rng
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| rand::rng().random())
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(splitmix64(seed))
}

pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

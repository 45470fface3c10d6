use crate::random::Seed;
use serde::{Deserialize, Serialize};

/// the parameters of a single generator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapParams {
    /// side length of the map (N), always a power of two
    pub size: u64,

    /// number of mines (K)
    pub mines: u64,

    pub seed: Seed,
}

/// K = floor(N² / divisor)
pub fn mine_count(size: u64, divisor: u64) -> u64 {
    size * size / divisor
}

/// powers of two from 2^min_exponent up to and including 2^max_exponent
pub fn sweep_sizes(min_exponent: u32, max_exponent: u32) -> Vec<u64> {
    (min_exponent..=max_exponent).map(|exp| 1u64 << exp).collect()
}

impl MapParams {
    pub fn new(size: u64, divisor: u64, seed: Seed) -> MapParams {
        MapParams {
            size,
            mines: mine_count(size, divisor),
            seed,
        }
    }

    /// `{N}_{K}_{seed}.{extension}`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{}_{}.{}", self.size, self.mines, self.seed, extension)
    }

    /// positional arguments in the order the generator expects them
    pub fn args(&self) -> [String; 3] {
        [
            self.size.to_string(),
            self.mines.to_string(),
            self.seed.to_string(),
        ]
    }
}

use rand::prelude::*;
use rand::rngs::SmallRng;
use seahash::hash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// seed forwarded verbatim to the map generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_u64(seed: u64) -> Seed {
        Seed(seed)
    }

    pub fn from_str(seed: &str) -> Seed {
        Seed(hash(seed.as_bytes()))
    }

    /// decimal input is used as is, anything else is hashed
    pub fn parse(seed: &str) -> Seed {
        let trimmed = seed.trim();
        match trimmed.parse::<u64>() {
            Ok(value) => Seed::from_u64(value),
            Err(_) => Seed::from_str(trimmed),
        }
    }

    pub fn random() -> Seed {
        Seed::from_u64(get_random_u64())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// derive a u64 seed from entropy
pub fn get_random_u64() -> u64 {
    let mut tmp_rng = SmallRng::from_entropy();
    tmp_rng.next_u64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seeds_are_taken_literally() {
        assert_eq!(Seed::parse("0"), Seed(0));
        assert_eq!(Seed::parse(" 1234 "), Seed(1234));
        assert_eq!(Seed::parse("18446744073709551615"), Seed(u64::MAX));
    }

    #[test]
    fn text_seeds_are_hashed_stably() {
        let a = Seed::parse("minesweeper");
        let b = Seed::parse("minesweeper");
        assert_eq!(a, b);
        assert_eq!(a, Seed(hash(b"minesweeper")));
        assert_ne!(a, Seed::parse("minesweeper2"));
    }

    #[test]
    fn negative_and_overflowing_input_falls_back_to_hash() {
        assert_eq!(Seed::parse("-1"), Seed::from_str("-1"));
        assert_eq!(
            Seed::parse("18446744073709551616"),
            Seed::from_str("18446744073709551616")
        );
    }

    #[test]
    fn seed_displays_as_decimal() {
        assert_eq!(Seed(42).to_string(), "42");
    }
}

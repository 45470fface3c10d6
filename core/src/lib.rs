pub mod config;
pub mod error;
pub mod generator;
pub mod map;
pub mod random;
pub mod sweep;

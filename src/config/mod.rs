#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;

pub use seed::SeedConfig;

//! Shared primitives: seeded randomness, sampling, balance configuration and
//! the synthetic clock.

pub mod balance;
pub mod clock;
pub mod numeric;
pub mod rng;
pub mod sampler;
pub mod stage;

pub use balance::{BalanceConfig, ConfigError};
pub use rng::{derive_seed, hash_seed, SeedRng};
pub use stage::{CareerStage, StageWeights};

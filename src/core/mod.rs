//! Core deterministic primitives.
//!
//! Seeded tile placement and snapshot fingerprinting.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::DeterministicRng;
pub use hash::{StateHash, StateHasher};

//! Traits describing read-only rule data and randomness.
//!
//! Oracles expose the trait tables and the random stream. The rules take them
//! as parameters so they never depend on a concrete content source.
mod rng;
mod tables;

pub use rng::{PcgRng, RngOracle};
pub use tables::{PrimaryStats, TablesOracle};

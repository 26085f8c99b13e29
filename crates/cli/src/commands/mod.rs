//! Subcommand implementations.
mod fight;
mod hatch;
pub mod rest;
mod roster;
mod seed;
mod simulate;

pub use fight::Fight;
pub use hatch::Hatch;
pub use roster::Roster;
pub use seed::Seed;
pub use simulate::Simulate;

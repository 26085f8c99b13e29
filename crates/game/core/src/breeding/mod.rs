//! Breeding: compatibility, offspring and non-retry tags.
//!
//! ```text
//! arena collision (a, b) → BreedingLedger::check → can_breed → breed → Egg
//!                                  └─ incompatible → pair tagged, never retried
//! ```

mod compat;
mod ledger;
mod offspring;

pub use compat::{can_breed, trait_set};
pub use ledger::{BreedingLedger, PairCheck, PairKey};
pub use offspring::{BreedError, breed};

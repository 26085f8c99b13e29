//! Repository layer for save data.
//!
//! Repositories handle data that CHANGES during play (hit points, eggs,
//! elixirs, the collection). Static content (trait tables, nurture pools,
//! balance constants) is handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod seed;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use seed::seed_save;
pub use traits::SaveRepository;
pub use types::SaveData;

//! Content loaders for reading game data from files.
//!
//! Every loader has a `parse` (text → value) and a `load` (path → value)
//! entry point. [`Bundled`] parses the copies embedded in the binary.

pub mod bundled;
pub mod config;
pub mod factory;
pub mod inventory;
pub mod nurture;
pub mod roster;
pub mod tables;

pub use bundled::Bundled;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use inventory::{InventoryLoader, StartingInventory, StockedElixir};
pub use nurture::NurtureLoader;
pub use roster::RosterLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

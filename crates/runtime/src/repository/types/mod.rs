//! Data types shared by the repository backends.

mod save;

pub use save::SaveData;

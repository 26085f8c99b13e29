//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or persistence.

pub mod errors;
pub mod tick;

pub use errors::{Result, RuntimeError};
pub use tick::{TickInput, TickReport};

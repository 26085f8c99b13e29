//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories and the rules so clients can bubble them
//! up with consistent context.

use game_core::{
    BreedError, CombatError, ConfigError, CreatureId, EggId, EggSlot, ErrorSeverity, GameError,
    HatchError, InventorySlot,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires a save repository before building")]
    MissingRepository,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("bundled content failed to load: {0}")]
    Content(String),

    #[error("creature {0} is not in the roster")]
    UnknownCreature(CreatureId),

    #[error("creature {0} is not a boss")]
    UnknownBoss(CreatureId),

    #[error("no boss named {0:?}")]
    UnknownBossName(String),

    #[error("{0} not found")]
    EggNotFound(EggId),

    #[error("{0} is not waiting in the arena")]
    EggNotInArena(EggId),

    #[error("{slot} is out of range (incubator has {capacity} slots)")]
    SlotOutOfRange { slot: EggSlot, capacity: u8 },

    #[error("{0} is already occupied")]
    SlotOccupied(EggSlot),

    #[error("{0} is empty")]
    SlotEmpty(EggSlot),

    #[error("{slot} is {state}, expected {expected}")]
    SlotState {
        slot: EggSlot,
        state: &'static str,
        expected: &'static str,
    },

    #[error("no elixir at {0}")]
    NoElixirAtSlot(InventorySlot),

    #[error("no owned creature can fight")]
    NoPlayers,

    #[error(transparent)]
    Breed(#[from] BreedError),

    #[error(transparent)]
    Hatch(#[from] HatchError),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Internal,
            Self::Repository(_) | Self::MissingRepository => ErrorSeverity::Recoverable,
            Self::Breed(error) => error.severity(),
            Self::Hatch(error) => error.severity(),
            Self::Combat(error) => error.severity(),
            Self::InvalidConfig(error) => error.severity(),
            Self::Content(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::MissingRepository => "RUNTIME_MISSING_REPOSITORY",
            Self::InvalidConfig(error) => error.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
            Self::UnknownCreature(_) => "RUNTIME_UNKNOWN_CREATURE",
            Self::UnknownBoss(_) | Self::UnknownBossName(_) => "RUNTIME_UNKNOWN_BOSS",
            Self::EggNotFound(_) => "RUNTIME_EGG_NOT_FOUND",
            Self::EggNotInArena(_) => "RUNTIME_EGG_NOT_IN_ARENA",
            Self::SlotOutOfRange { .. } => "RUNTIME_SLOT_OUT_OF_RANGE",
            Self::SlotOccupied(_) => "RUNTIME_SLOT_OCCUPIED",
            Self::SlotEmpty(_) => "RUNTIME_SLOT_EMPTY",
            Self::SlotState { .. } => "RUNTIME_SLOT_STATE",
            Self::NoElixirAtSlot(_) => "RUNTIME_NO_ELIXIR",
            Self::NoPlayers => "RUNTIME_NO_PLAYERS",
            Self::Breed(error) => error.error_code(),
            Self::Hatch(error) => error.error_code(),
            Self::Combat(error) => error.error_code(),
        }
    }
}

//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `HatchError`, `CombatError`) are defined in
//! their respective modules. This module holds the shared classification used
//! by the runtime to decide how to report them.
//!
//! Note that several "failures" of the rules are not errors at all: unknown
//! trait names contribute zero, an empty hatch pool yields `None`, and a
//! candidate with malformed range data is skipped by the filter.

use crate::state::CreatureId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: incubator slot still counting down.
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: unknown creature, duplicate secondary trait.
    Validation,

    /// Unexpected state inconsistency that indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Creature involved in the failure (if applicable).
    pub creature: Option<CreatureId>,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            creature: None,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_creature(mut self, creature: CreatureId) -> Self {
        self.creature = Some(creature);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl GameError for crate::traits::TraitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "TRAIT_DUPLICATE_SECONDARY"
    }
}

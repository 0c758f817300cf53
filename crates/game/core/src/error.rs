//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `SpawnError`, `CombatError`) are defined in their
//! respective modules alongside the operations they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error type with specific variants
//! - **Rich Context**: Engine errors carry the acting entity and round number
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The player cancelled or lacked a resource; re-present the menu
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: A caller broke a precondition (acting on a fainted actor, etc.)
/// - **Fatal**: Nothing can run (no heroes could be loaded)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - no turn is spent, the menu is shown again.
    ///
    /// Examples: not enough mana, not enough gold, nothing to sell
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: party already full, equipping a potion
    Validation,

    /// Internal error - a programming-contract violation.
    ///
    /// Examples: empty monster catalog at spawn time, fainted hero asked to act
    Internal,

    /// Fatal error - the session cannot start or continue.
    ///
    /// Examples: no heroes loadable from any class
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to engine errors for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Name of the hero or monster that triggered the error (if applicable).
    pub actor: Option<String>,

    /// Encounter round at the time of error (0 during setup).
    pub round: u32,
}

impl ErrorContext {
    /// Creates a new error context for the given round.
    #[must_use]
    pub const fn new(round: u32) -> Self {
        Self {
            actor: None,
            round,
        }
    }

    /// Attaches an actor name to this context (builder pattern).
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round {}", self.round)?;
        if let Some(actor) = &self.actor {
            write!(f, ", actor {actor}")?;
        }
        Ok(())
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification and context
/// retrieval across all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include `ErrorContext` in variants that need debugging info
/// - Classify severity based on recoverability, not impact
pub trait GameError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

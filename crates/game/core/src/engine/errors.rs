//! Error types for the encounter state machine.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::spawn::SpawnError;

/// Errors surfaced while running an encounter.
///
/// Every variant is a broken caller contract; recoverable conditions such as
/// insufficient mana or an empty spellbook never leave the action menu.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("encounter needs at least one hero")]
    EmptyParty,

    #[error("encounter needs at least one enemy")]
    EmptyRoster,

    #[error("fainted actor cannot act ({context})")]
    FaintedActor { context: ErrorContext },

    #[error("no living target ({context})")]
    NoLivingTarget { context: ErrorContext },

    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),
}

impl CombatError {
    pub(crate) fn fainted_actor(name: &str, round: u32) -> Self {
        Self::FaintedActor {
            context: ErrorContext::new(round).with_actor(name),
        }
    }

    pub(crate) fn no_living_target(name: &str, round: u32) -> Self {
        Self::NoLivingTarget {
            context: ErrorContext::new(round).with_actor(name),
        }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Spawn(err) => err.severity(),
            _ => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::FaintedActor { context } | Self::NoLivingTarget { context } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParty => "COMBAT_EMPTY_PARTY",
            Self::EmptyRoster => "COMBAT_EMPTY_ROSTER",
            Self::FaintedActor { .. } => "COMBAT_FAINTED_ACTOR",
            Self::NoLivingTarget { .. } => "COMBAT_NO_LIVING_TARGET",
            Self::Spawn(_) => "COMBAT_SPAWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_violations_are_internal() {
        let err = CombatError::fainted_actor("Gaerdal_Ironhand", 3);
        assert!(err.severity().is_internal());
        assert_eq!(err.context().map(|c| c.round), Some(3));
        assert_eq!(err.to_string(), "fainted actor cannot act (round 3, actor Gaerdal_Ironhand)");
    }

    #[test]
    fn spawn_errors_convert() {
        let err: CombatError = SpawnError::EmptyCatalog.into();
        assert_eq!(err.error_code(), "COMBAT_SPAWN");
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }
}

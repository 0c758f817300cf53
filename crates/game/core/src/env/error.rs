//! Catalog errors.
//!
//! A catalog that cannot seat a party or field a monster stops the session
//! before any encounter begins.

use crate::error::{ErrorSeverity, GameError};
use crate::state::HeroClass;

/// Errors raised while validating or drawing from a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// No hero of any class could be loaded.
    #[error("no heroes could be loaded from any class")]
    NoHeroes,

    /// No monster template could be loaded.
    #[error("monster catalog is empty")]
    NoMonsters,

    /// The requested hero is not (or no longer) available.
    #[error("no {class} available at index {index}")]
    HeroUnavailable { class: HeroClass, index: usize },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoHeroes | Self::NoMonsters => ErrorSeverity::Fatal,
            Self::HeroUnavailable { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoHeroes => "CATALOG_NO_HEROES",
            Self::NoMonsters => "CATALOG_NO_MONSTERS",
            Self::HeroUnavailable { .. } => "CATALOG_HERO_UNAVAILABLE",
        }
    }
}

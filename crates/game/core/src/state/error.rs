//! State management errors.
//!
//! Errors related to party capacity and equipment slots.

use crate::error::{ErrorSeverity, GameError};
use crate::state::types::ItemCategory;

/// Errors raised while assembling a party.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartyError {
    /// Party is full (max capacity reached).
    #[error("Party is full (max: {max})")]
    Full {
        /// Maximum capacity.
        max: usize,
    },

    /// A party needs at least one hero.
    #[error("Party has no heroes")]
    Empty,
}

impl GameError for PartyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "PARTY_FULL",
            Self::Empty => "PARTY_EMPTY",
        }
    }
}

/// Errors raised when equipping gear.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// Only weapons and armor go into equipment slots.
    #[error("{name} is a {category} and cannot be equipped")]
    NotEquippable {
        name: String,
        category: ItemCategory,
    },

    /// No owned item at the requested position.
    #[error("no {category} at slot {index}")]
    MissingItem {
        category: ItemCategory,
        index: usize,
    },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquippable { .. } => "EQUIP_NOT_EQUIPPABLE",
            Self::MissingItem { .. } => "EQUIP_MISSING_ITEM",
        }
    }
}

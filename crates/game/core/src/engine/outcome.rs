//! Encounter phases and terminal outcomes.

/// Where the state machine currently is.
///
/// ```text
/// Setup -> HeroesTurn -> EnemiesTurn -> Regeneration -> HeroesTurn ...
///                |              |
///             Victory         Defeat
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EncounterPhase {
    #[default]
    Setup,
    HeroesTurn,
    EnemiesTurn,
    Regeneration,
    Victory,
    Defeat,
}

impl EncounterPhase {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// Result of a finished encounter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// All enemies fainted. Every hero left standing received `gold` and `xp`
    /// in full.
    Victory { gold: f64, xp: u32, rounds: u32 },
    /// All heroes fainted. No rewards.
    Defeat { rounds: u32 },
}

impl Outcome {
    pub const fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }

    pub const fn rounds(&self) -> u32 {
        match self {
            Self::Victory { rounds, .. } | Self::Defeat { rounds } => *rounds,
        }
    }
}

/// Menu entries offered to a hero on their turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u32)]
pub enum HeroAction {
    #[strum(to_string = "Attack")]
    Attack = 1,
    #[strum(to_string = "Cast Spell")]
    CastSpell = 2,
    #[strum(to_string = "Use Potion")]
    UsePotion = 3,
    #[strum(to_string = "Equip")]
    Equip = 4,
    #[strum(to_string = "Info")]
    Info = 5,
}

impl HeroAction {
    pub const FIRST: u32 = Self::Attack as u32;
    pub const LAST: u32 = Self::Info as u32;
}

/// Whether a resolved action ended the hero's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    Consumed,
    /// Back to the menu: cancelled, failed a resource check, or free action.
    Menu,
}

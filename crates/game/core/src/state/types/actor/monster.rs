//! Encounter monsters and their catalog templates.

use std::fmt;

use crate::state::types::StatBlock;

/// Monster family.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MonsterKind {
    Dragon,
    Exoskeleton,
    Spirit,
}

/// Catalog prototype for a monster.
///
/// `dodge_percent` is stored on the 0-100 scale used by the data files; the
/// spawner converts it to a probability once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub base_damage: f64,
    pub defense: f64,
    pub dodge_percent: f64,
}

/// A live monster, owned by one encounter's roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    pub stats: StatBlock,
    pub base_damage: f64,
    pub defense: f64,
    /// Probability in `[0, 1]` of evading a physical attack.
    pub dodge_chance: f64,
}

impl Monster {
    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn reduce_defense(&mut self, amount: f64) {
        self.defense -= amount;
    }

    pub fn reduce_damage(&mut self, amount: f64) {
        self.base_damage -= amount;
    }

    pub fn reduce_dodge_chance(&mut self, amount: f64) {
        self.dodge_chance -= amount;
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} Lv{}) HP {:.0} DMG {:.0} DEF {:.0} Dodge {:.0}%",
            self.name,
            self.kind,
            self.stats.level,
            self.stats.effective_hp(),
            self.base_damage,
            self.defense,
            self.dodge_chance * 100.0
        )?;
        if self.is_fainted() {
            write!(f, " [DEFEATED]")?;
        }
        Ok(())
    }
}

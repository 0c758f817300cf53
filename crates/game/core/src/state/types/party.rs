//! The adventuring party.

use std::fmt;

use super::{Hero, Position};
use crate::config::GameConfig;
use crate::state::error::PartyError;

/// Ordered group of up to [`GameConfig::MAX_PARTY_SIZE`] heroes.
///
/// Insertion order is turn order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    heroes: Vec<Hero>,
    pub position: Position,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a party from heroes in turn order.
    pub fn with_heroes(heroes: impl IntoIterator<Item = Hero>) -> Result<Self, PartyError> {
        let mut party = Self::new();
        for hero in heroes {
            party.add_hero(hero)?;
        }
        if party.heroes.is_empty() {
            return Err(PartyError::Empty);
        }
        Ok(party)
    }

    pub fn add_hero(&mut self, hero: Hero) -> Result<(), PartyError> {
        if self.heroes.len() >= GameConfig::MAX_PARTY_SIZE {
            return Err(PartyError::Full {
                max: GameConfig::MAX_PARTY_SIZE,
            });
        }
        self.heroes.push(hero);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn heroes_mut(&mut self) -> &mut [Hero] {
        &mut self.heroes
    }

    pub fn hero(&self, index: usize) -> Option<&Hero> {
        self.heroes.get(index)
    }

    pub fn hero_mut(&mut self, index: usize) -> Option<&mut Hero> {
        self.heroes.get_mut(index)
    }

    /// True iff every hero has fainted.
    pub fn is_wiped_out(&self) -> bool {
        self.heroes.iter().all(Hero::is_fainted)
    }

    /// Indices of heroes still standing, in turn order.
    pub fn living_indices(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| !hero.is_fainted())
            .map(|(index, _)| index)
            .collect()
    }

    /// Highest hero level, or 1 for an empty party.
    pub fn max_level(&self) -> u32 {
        self.heroes.iter().map(Hero::level).max().unwrap_or(1)
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Party at {}:", self.position)?;
        for hero in &self.heroes {
            writeln!(f, "  {hero}")?;
        }
        Ok(())
    }
}

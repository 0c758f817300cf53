//! Heroes' phase: the action menu and its resolution.

use strum::IntoEnumIterator;

use super::{CombatEngine, CombatError, HeroAction, TurnStatus};
use crate::combat::{self, AttackOutcome};
use crate::env::{ChoiceProvider, OutputSink, RngOracle};
use crate::state::{Hero, ItemCategory, Monster, Party};

impl<R, I, O> CombatEngine<'_, R, I, O>
where
    R: RngOracle,
    I: ChoiceProvider,
    O: OutputSink,
{
    /// Gives every standing hero one turn, in party order.
    ///
    /// Stops early once the roster is down; the remaining heroes get no
    /// action this round.
    pub(super) fn heroes_turn(
        &mut self,
        party: &mut Party,
        enemies: &mut [Monster],
    ) -> Result<(), CombatError> {
        for index in 0..party.size() {
            if enemies.iter().all(Monster::is_fainted) {
                break;
            }
            if party.heroes()[index].is_fainted() {
                continue;
            }
            self.hero_turn(party, index, enemies)?;
        }
        Ok(())
    }

    /// Re-presents the menu until the hero performs a turn-consuming action.
    fn hero_turn(
        &mut self,
        party: &mut Party,
        index: usize,
        enemies: &mut [Monster],
    ) -> Result<(), CombatError> {
        let menu = HeroAction::iter()
            .map(|action| format!("{}) {action}", action as u32))
            .collect::<Vec<_>>()
            .join("  ");

        loop {
            let name = &party.heroes()[index].name;
            self.output.emit(&format!("{name}'s turn: {menu}"));
            let choice = self
                .input
                .choose_int("Choose an action", HeroAction::FIRST, HeroAction::LAST);
            let Some(action) = HeroAction::from_repr(choice) else {
                continue;
            };
            tracing::debug!(round = self.round, hero = %name, %action, "hero action");

            let status = match action {
                HeroAction::Attack => self.attack(&mut party.heroes_mut()[index], enemies)?,
                HeroAction::CastSpell => self.cast_spell(&mut party.heroes_mut()[index], enemies)?,
                HeroAction::UsePotion => self.use_potion(&mut party.heroes_mut()[index])?,
                HeroAction::Equip => self.equip(&mut party.heroes_mut()[index]),
                HeroAction::Info => {
                    self.show_info(party, enemies);
                    TurnStatus::Menu
                }
            };
            if status == TurnStatus::Consumed {
                return Ok(());
            }
        }
    }

    fn ensure_standing(&self, hero: &Hero) -> Result<(), CombatError> {
        if hero.is_fainted() {
            tracing::warn!(hero = %hero.name, round = self.round, "fainted hero asked to act");
            return Err(CombatError::fainted_actor(&hero.name, self.round));
        }
        Ok(())
    }

    /// Asks for one of the standing enemies. Returns its roster index, or
    /// `None` when the hero backs out.
    fn choose_target(
        &mut self,
        hero: &Hero,
        enemies: &[Monster],
    ) -> Result<Option<usize>, CombatError> {
        let living: Vec<usize> = enemies
            .iter()
            .enumerate()
            .filter(|(_, monster)| !monster.is_fainted())
            .map(|(index, _)| index)
            .collect();
        if living.is_empty() {
            tracing::warn!(hero = %hero.name, round = self.round, "target requested with no living enemy");
            return Err(CombatError::no_living_target(&hero.name, self.round));
        }

        for (position, &index) in living.iter().enumerate() {
            self.output
                .emit(&format!("  {}) {}", position + 1, enemies[index]));
        }
        // Back sits after the targets so the lowest answer is always a target.
        let back = u32::try_from(living.len() + 1).unwrap_or(u32::MAX);
        self.output.emit(&format!("  {back}) Back"));
        let choice = self.input.choose_int("Choose a target", 1, back);
        if choice == back {
            return Ok(None);
        }
        let position = (choice.max(1) - 1) as usize;
        Ok(Some(living[position.min(living.len() - 1)]))
    }

    fn attack(&mut self, hero: &mut Hero, enemies: &mut [Monster]) -> Result<TurnStatus, CombatError> {
        self.ensure_standing(hero)?;
        let Some(target) = self.choose_target(hero, enemies)? else {
            return Ok(TurnStatus::Menu);
        };
        let monster = &mut enemies[target];

        let roll = self.rng.next_f64();
        tracing::debug!(roll, dodge_chance = monster.dodge_chance, "attack roll");
        match combat::resolve_hero_attack(hero, monster, roll, &self.config.combat) {
            AttackOutcome::Dodged => {
                self.output
                    .emit(&format!("{} dodged {}'s attack!", monster.name, hero.name));
            }
            AttackOutcome::Hit { damage, fainted } => {
                self.output.emit(&format!(
                    "{} dealt {damage:.0} damage to {}.",
                    hero.name, monster.name
                ));
                if fainted {
                    self.output
                        .emit(&format!("{} has been defeated!", monster.name));
                }
            }
        }
        Ok(TurnStatus::Consumed)
    }

    fn cast_spell(
        &mut self,
        hero: &mut Hero,
        enemies: &mut [Monster],
    ) -> Result<TurnStatus, CombatError> {
        self.ensure_standing(hero)?;
        let Some(slot) = self.choose_owned(hero, ItemCategory::Spell) else {
            return Ok(TurnStatus::Menu);
        };
        let Some(spell) = hero.inventory.spells()[slot].as_spell().copied() else {
            return Ok(TurnStatus::Menu);
        };
        if hero.stats.mana < spell.mana_cost {
            self.output.emit(&format!(
                "{} does not have enough mana ({:.0}/{:.0}).",
                hero.name, hero.stats.mana, spell.mana_cost
            ));
            return Ok(TurnStatus::Menu);
        }

        let Some(target) = self.choose_target(hero, enemies)? else {
            return Ok(TurnStatus::Menu);
        };
        let spent = hero.stats.spend_mana(spell.mana_cost);
        debug_assert!(spent, "mana checked before casting");
        let spell_name = hero
            .inventory
            .take(ItemCategory::Spell, slot)
            .map(|item| item.name)
            .unwrap_or_default();

        let monster = &mut enemies[target];
        let outcome =
            combat::resolve_spell(hero.stats.dexterity, &spell, monster, &self.config.combat);
        tracing::debug!(spell = %spell_name, damage = outcome.damage, "spell resolved");

        self.output.emit(&format!(
            "{} cast {spell_name} on {} for {:.0} damage.",
            hero.name, monster.name, outcome.damage
        ));
        if outcome.fainted {
            self.output
                .emit(&format!("{} has been defeated!", monster.name));
        }
        if let Some((element, amount)) = outcome.debuff {
            self.output.emit(&format!(
                "{}'s {} ({amount:.2}).",
                monster.name,
                combat::debuff_message(element)
            ));
        }
        Ok(TurnStatus::Consumed)
    }

    fn use_potion(&mut self, hero: &mut Hero) -> Result<TurnStatus, CombatError> {
        self.ensure_standing(hero)?;
        let Some(slot) = self.choose_owned(hero, ItemCategory::Potion) else {
            return Ok(TurnStatus::Menu);
        };
        let Some(item) = hero.inventory.take(ItemCategory::Potion, slot) else {
            return Ok(TurnStatus::Menu);
        };
        if let Some(potion) = item.as_potion() {
            hero.apply_potion(potion);
        }
        self.output
            .emit(&format!("{} used {}.", hero.name, item.name));
        Ok(TurnStatus::Consumed)
    }

    /// Swaps gear from the inventory. Never consumes the turn.
    fn equip(&mut self, hero: &mut Hero) -> TurnStatus {
        let choice = self
            .input
            .choose_int("Equip 1) Weapon  2) Armor  0) Back", 0, 2);
        let category = match choice {
            1 => ItemCategory::Weapon,
            2 => ItemCategory::Armor,
            _ => return TurnStatus::Menu,
        };
        let Some(slot) = self.choose_owned(hero, category) else {
            return TurnStatus::Menu;
        };

        match hero.equip_from_inventory(category, slot) {
            Ok(_) => {
                let name = hero.inventory.of(category)[slot].name.clone();
                self.output.emit(&format!("{} equipped {name}.", hero.name));
            }
            Err(err) => self.output.emit(&err.to_string()),
        }
        TurnStatus::Menu
    }

    /// Lists owned items of `category` and asks for one; `None` means back.
    fn choose_owned(
        &mut self,
        hero: &Hero,
        category: ItemCategory,
    ) -> Option<usize> {
        let owned = hero.inventory.of(category);
        if owned.is_empty() {
            self.output
                .emit(&format!("{} has no {category} items.", hero.name));
            return None;
        }

        for (position, item) in owned.iter().enumerate() {
            self.output.emit(&format!("  {}) {item}", position + 1));
        }
        let max = u32::try_from(owned.len()).unwrap_or(u32::MAX);
        let choice = self
            .input
            .choose_int(&format!("Choose a {category} (0 to go back)"), 0, max);
        if choice == 0 {
            return None;
        }
        Some((choice as usize - 1).min(owned.len() - 1))
    }

    fn show_info(&mut self, party: &Party, enemies: &[Monster]) {
        self.output.emit("Heroes:");
        for hero in party.heroes() {
            self.output.emit(&format!("  {hero}"));
            if let Some(weapon) = hero.equipment.weapon() {
                self.output.emit(&format!("    weapon: {weapon}"));
            }
            if let Some(armor) = hero.equipment.armor() {
                self.output.emit(&format!("    armor: {armor}"));
            }
        }
        self.output.emit("Enemies:");
        for monster in enemies {
            self.output.emit(&format!("  {monster}"));
        }
    }
}

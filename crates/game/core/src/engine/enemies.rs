//! Enemies' phase: each standing monster strikes a random standing hero.

use super::CombatEngine;
use crate::combat::{self, AttackOutcome};
use crate::env::{ChoiceProvider, OutputSink, RngOracle};
use crate::state::{Monster, Party};

impl<R, I, O> CombatEngine<'_, R, I, O>
where
    R: RngOracle,
    I: ChoiceProvider,
    O: OutputSink,
{
    pub(super) fn enemies_turn(&mut self, party: &mut Party, enemies: &[Monster]) {
        for monster in enemies.iter().filter(|monster| !monster.is_fainted()) {
            let living = party.living_indices();
            if living.is_empty() {
                break;
            }
            let target = living[self.rng.next_index(living.len())];
            let hero = &mut party.heroes_mut()[target];

            let roll = self.rng.next_f64();
            tracing::debug!(
                monster = %monster.name,
                hero = %hero.name,
                roll,
                "enemy attack roll"
            );
            match combat::resolve_monster_attack(monster, hero, roll, &self.config.combat) {
                AttackOutcome::Dodged => {
                    self.output
                        .emit(&format!("{} dodged {}'s attack!", hero.name, monster.name));
                }
                AttackOutcome::Hit { damage, fainted } => {
                    self.output.emit(&format!(
                        "{} dealt {damage:.0} damage to {}.",
                        monster.name, hero.name
                    ));
                    if fainted {
                        self.output.emit(&format!("{} has fainted!", hero.name));
                    }
                }
            }
        }
    }
}

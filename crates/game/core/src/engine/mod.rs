//! Encounter state machine.
//!
//! The [`CombatEngine`] owns no game data. It borrows the party for one
//! encounter, spawns a fresh enemy roster, and drives rounds until one side
//! is wiped out. Menu selections come from the injected [`ChoiceProvider`],
//! the event log goes to the injected [`OutputSink`], and every roll comes
//! from the injected [`RngOracle`].

mod enemies;
mod errors;
mod heroes;
mod outcome;

pub use errors::CombatError;
pub use outcome::{EncounterPhase, HeroAction, Outcome, TurnStatus};

use crate::config::GameConfig;
use crate::env::{ChoiceProvider, OutputSink, RngOracle};
use crate::spawn;
use crate::state::{Monster, MonsterTemplate, Party};

/// Runs encounters between a party and a spawned roster.
///
/// Pass collaborators by `&mut` to keep ownership with the caller; the
/// blanket impls on `&mut T` make that work for every collaborator trait.
pub struct CombatEngine<'a, R, I, O> {
    config: &'a GameConfig,
    rng: R,
    input: I,
    output: O,
    phase: EncounterPhase,
    round: u32,
}

impl<'a, R, I, O> CombatEngine<'a, R, I, O>
where
    R: RngOracle,
    I: ChoiceProvider,
    O: OutputSink,
{
    pub fn new(config: &'a GameConfig, rng: R, input: I, output: O) -> Self {
        Self {
            config,
            rng,
            input,
            output,
            phase: EncounterPhase::Setup,
            round: 0,
        }
    }

    /// Current state machine phase.
    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// Current round, starting at 1 once the first heroes' turn begins.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Spawns a roster sized to the party and runs the encounter.
    ///
    /// Monsters are scaled to the party's highest level. Fails before any
    /// state is touched if the party or the catalog is empty.
    pub fn start(
        &mut self,
        party: &mut Party,
        catalog: &[MonsterTemplate],
    ) -> Result<Outcome, CombatError> {
        if party.is_empty() {
            return Err(CombatError::EmptyParty);
        }
        let enemies = spawn::spawn(
            party.size(),
            party.max_level(),
            catalog,
            &self.config.spawn,
            &mut self.rng,
        )?;
        self.run(party, enemies)
    }

    /// Runs an encounter against an explicit roster.
    pub fn run(
        &mut self,
        party: &mut Party,
        mut enemies: Vec<Monster>,
    ) -> Result<Outcome, CombatError> {
        if party.is_empty() {
            return Err(CombatError::EmptyParty);
        }
        if enemies.is_empty() {
            return Err(CombatError::EmptyRoster);
        }

        self.phase = EncounterPhase::Setup;
        self.round = 0;
        tracing::info!(
            heroes = party.size(),
            enemies = enemies.len(),
            "encounter started"
        );
        self.output.emit("Battle Started!");
        self.output.emit("Enemies:");
        for monster in &enemies {
            self.output.emit(&format!("  {monster}"));
        }

        loop {
            self.round += 1;

            self.enter(EncounterPhase::HeroesTurn);
            self.heroes_turn(party, &mut enemies)?;
            if enemies.iter().all(Monster::is_fainted) {
                return Ok(self.victory(party, &enemies));
            }

            self.enter(EncounterPhase::EnemiesTurn);
            self.enemies_turn(party, &enemies);
            if party.is_wiped_out() {
                return Ok(self.defeat());
            }

            self.enter(EncounterPhase::Regeneration);
            self.regenerate(party);
        }
    }

    fn enter(&mut self, phase: EncounterPhase) {
        tracing::debug!(round = self.round, from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }

    fn regenerate(&mut self, party: &mut Party) {
        let factor = self.config.combat.regeneration_factor;
        for hero in party.heroes_mut() {
            hero.regenerate(factor);
        }
    }

    fn victory(&mut self, party: &mut Party, enemies: &[Monster]) -> Outcome {
        self.enter(EncounterPhase::Victory);
        let tables = &self.config.combat;
        let level_sum: u32 = enemies.iter().map(Monster::level).sum();
        let gold = f64::from(level_sum) * tables.gold_per_monster_level;
        let enemy_count = u32::try_from(enemies.len()).unwrap_or(u32::MAX);
        let xp = enemy_count.saturating_mul(tables.xp_per_monster);

        self.output.emit("Victory!");
        for hero in party.heroes_mut() {
            if hero.is_fainted() {
                hero.revive();
                self.output.emit(&format!("{} has been revived.", hero.name));
                continue;
            }
            hero.add_money(gold);
            let levels = hero.gain_experience(xp);
            self.output
                .emit(&format!("{} gained {gold:.0} gold and {xp} experience.", hero.name));
            if levels > 0 {
                self.output
                    .emit(&format!("{} reached level {}!", hero.name, hero.level()));
            }
        }

        tracing::info!(rounds = self.round, gold, xp, "encounter won");
        Outcome::Victory {
            gold,
            xp,
            rounds: self.round,
        }
    }

    fn defeat(&mut self) -> Outcome {
        self.enter(EncounterPhase::Defeat);
        self.output.emit("Defeat! Your party has fallen.");
        tracing::info!(rounds = self.round, "encounter lost");
        Outcome::Defeat { rounds: self.round }
    }
}

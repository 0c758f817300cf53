//! The exploration loop: board movement, ambushes and market visits.

use anyhow::Result;
use game_core::{
    Catalog, ChoiceProvider, CombatEngine, GameConfig, MarketStock, OutputSink, Party, RngOracle,
};

use crate::board::{Board, CellKind, Direction};
use crate::market::MarketVisit;

const CONTROLS: &str = "Controls: [W]Up [A]Left [S]Down [D]Right [M]Market [I]Info [Q]Quit";
const KEYS: [&str; 7] = ["w", "a", "s", "d", "m", "i", "q"];

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum SessionEnd {
    Quit,
    WipedOut,
}

/// A running game: the world, the party and the content it draws from.
pub struct Session {
    config: GameConfig,
    catalog: Catalog,
    board: Board,
    party: Party,
}

impl Session {
    pub fn new(config: GameConfig, catalog: Catalog, board: Board, party: Party) -> Self {
        Self {
            config,
            catalog,
            board,
            party,
        }
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Plays until the player quits or the party is wiped out.
    pub fn run(
        &mut self,
        rng: &mut impl RngOracle,
        input: &mut impl ChoiceProvider,
        output: &mut impl OutputSink,
    ) -> Result<SessionEnd> {
        tracing::info!(heroes = self.party.size(), "session started");

        let end = loop {
            output.emit(&self.board.render(self.party.position));
            output.emit(&self.party.to_string());
            output.emit(CONTROLS);

            let key = input.choose_option("Enter move", &KEYS);
            match key.as_str() {
                "q" => break SessionEnd::Quit,
                "i" => self.show_details(output),
                "m" => self.visit_market(rng, input, output),
                other => {
                    let Some(direction) = Direction::from_key(other) else {
                        continue;
                    };
                    self.travel(direction, rng, input, output)?;
                    if self.party.is_wiped_out() {
                        break SessionEnd::WipedOut;
                    }
                }
            }
        };

        tracing::info!(%end, "session finished");
        output.emit("Game Over...");
        output.emit("Final party status:");
        output.emit(&self.party.to_string());
        Ok(end)
    }

    fn travel(
        &mut self,
        direction: Direction,
        rng: &mut impl RngOracle,
        input: &mut impl ChoiceProvider,
        output: &mut impl OutputSink,
    ) -> Result<()> {
        let target = match self.board.step(self.party.position, direction) {
            Ok(target) => target,
            Err(err) => {
                output.emit(&err.to_string());
                return Ok(());
            }
        };
        self.party.set_position(target);
        tracing::debug!(row = target.row, col = target.col, "party moved");

        match self.board.cell(target) {
            Some(CellKind::Market) => {
                output.emit("You found a market. Press M to enter.");
            }
            Some(CellKind::Common) if rng.roll(self.config.world.encounter_chance) => {
                output.emit("*** AMBUSH! Monsters appear! ***");
                let outcome = CombatEngine::new(&self.config, &mut *rng, &mut *input, &mut *output)
                    .start(&mut self.party, &self.catalog.monsters)?;
                tracing::info!(?outcome, "encounter resolved");
            }
            _ => {}
        }
        Ok(())
    }

    fn visit_market(
        &mut self,
        rng: &mut impl RngOracle,
        input: &mut impl ChoiceProvider,
        output: &mut impl OutputSink,
    ) {
        if self.board.cell(self.party.position) != Some(CellKind::Market) {
            output.emit("There is no market here.");
            return;
        }
        let stock = MarketStock::generate(
            &self.catalog.items,
            self.config.economy.market_stock_size,
            &mut *rng,
        );
        MarketVisit::new(&stock, &self.config.economy, &mut *input, &mut *output)
            .run(&mut self.party);
    }

    fn show_details(&self, output: &mut impl OutputSink) {
        output.emit("--- Party Details ---");
        for hero in self.party.heroes() {
            output.emit(&hero.to_string());
            let weapon = hero
                .equipment
                .weapon()
                .map_or("none".to_string(), |item| item.name.clone());
            let armor = hero
                .equipment
                .armor()
                .map_or("none".to_string(), |item| item.name.clone());
            output.emit(&format!("  Equipped: weapon {weapon}, armor {armor}"));
            if hero.inventory.is_empty() {
                output.emit("  Inventory: (empty)");
                continue;
            }
            output.emit("  Inventory:");
            for item in hero.inventory.items() {
                output.emit(&format!("    {item}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{
        Hero, HeroClass, HeroTemplate, Item, MemorySink, MonsterKind, MonsterTemplate,
        ScriptedChoices, SequenceRng,
    };

    use super::*;

    fn hero() -> Hero {
        Hero::from_template(&HeroTemplate {
            name: "Gaerdal_Ironhand".to_string(),
            class: HeroClass::Warrior,
            level: 1,
            mana: 100.0,
            strength: 700.0,
            agility: 500.0,
            dexterity: 600.0,
            money: 1354.0,
            experience: 0,
        })
    }

    fn catalog() -> Catalog {
        Catalog {
            heroes: Vec::new(),
            monsters: vec![MonsterTemplate {
                name: "Casper".to_string(),
                kind: MonsterKind::Spirit,
                level: 1,
                base_damage: 100.0,
                defense: 100.0,
                dodge_percent: 50.0,
            }],
            items: vec![Item::weapon("Sword", 500, 1, 800.0)],
        }
    }

    fn session(rows: Vec<Vec<CellKind>>) -> Session {
        let party = Party::with_heroes([hero()]).unwrap();
        Session::new(GameConfig::default(), catalog(), Board::from_rows(rows), party)
    }

    #[test]
    fn quit_prints_final_status() {
        let mut session = session(vec![vec![CellKind::Common]]);
        let mut sink = MemorySink::new();

        let end = session
            .run(
                &mut SequenceRng::new(vec![0.9]),
                &mut ScriptedChoices::new(["q"]),
                &mut sink,
            )
            .unwrap();

        assert_eq!(end, SessionEnd::Quit);
        assert!(sink.contains(CONTROLS));
        assert!(sink.contains("Game Over..."));
        assert!(sink.contains("Gaerdal_Ironhand"));
    }

    #[test]
    fn blocked_moves_are_reported_and_position_kept() {
        let mut session = session(vec![vec![CellKind::Common, CellKind::Inaccessible]]);
        let mut sink = MemorySink::new();

        session
            .run(
                &mut SequenceRng::new(vec![0.9]),
                &mut ScriptedChoices::new(["w", "d", "q"]),
                &mut sink,
            )
            .unwrap();

        assert!(sink.contains("You cannot move off the edge of the world!"));
        assert!(sink.contains("That path is blocked"));
        assert_eq!(session.party().position.col, 0);
    }

    #[test]
    fn market_requires_a_market_cell() {
        let mut session = session(vec![vec![CellKind::Common, CellKind::Market]]);
        let mut sink = MemorySink::new();

        // Try the market at the origin, move right, enter and leave.
        session
            .run(
                &mut SequenceRng::new(vec![0.9, 0.0]),
                &mut ScriptedChoices::new(["m", "d", "m", "0", "q"]),
                &mut sink,
            )
            .unwrap();

        assert!(sink.contains("There is no market here."));
        assert!(sink.contains("You enter a bustling marketplace..."));
        assert_eq!(session.party().position.col, 1);
    }

    #[test]
    fn ambush_on_common_cell_runs_an_encounter() {
        let mut session = session(vec![vec![CellKind::Common, CellKind::Common]]);
        let mut sink = MemorySink::new();

        // Encounter roll, spawn pick, then rolls the monster cannot dodge
        // and the hero always dodges. Spare "1"s after the fight fall back
        // to harmless off-board moves.
        let rng = vec![0.1, 0.0, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9];
        let mut script = vec!["d"];
        script.extend(["1"; 12]);
        script.push("q");
        let end = session
            .run(
                &mut SequenceRng::new(rng),
                &mut ScriptedChoices::new(script),
                &mut sink,
            )
            .unwrap();

        assert!(sink.contains("*** AMBUSH!"));
        assert!(sink.contains("Battle Started!"));
        assert!(sink.contains("Victory!"));
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn info_lists_inventory() {
        let mut session = session(vec![vec![CellKind::Common]]);
        session.party.heroes_mut()[0]
            .inventory
            .add(Item::weapon("Sword", 500, 1, 800.0));
        let mut sink = MemorySink::new();

        session
            .run(
                &mut SequenceRng::new(vec![0.9]),
                &mut ScriptedChoices::new(["i", "q"]),
                &mut sink,
            )
            .unwrap();

        assert!(sink.contains("--- Party Details ---"));
        assert!(sink.contains("    Sword ["));
        assert!(sink.contains("Equipped: weapon none, armor none"));
    }
}

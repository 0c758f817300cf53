//! Turn-based party-versus-monster combat rules shared by every front end.
//!
//! `game-core` defines the entity model, the monster spawner, the encounter
//! state machine and the market transaction rules. It performs no I/O:
//! randomness, menu input and the event log are injected through the
//! collaborator traits in [`env`], and encounters run through
//! [`engine::CombatEngine`].
pub mod combat;
pub mod config;
pub mod economy;
pub mod engine;
pub mod env;
pub mod error;
pub mod spawn;
pub mod state;

pub use combat::{AttackOutcome, SpellOutcome};
pub use config::{CombatTables, EconomyTables, GameConfig, SpawnTables, WorldTables};
pub use economy::{
    MarketStock, TransactionError, can_purchase, check_purchase, purchase, resale_value, sell,
};
pub use engine::{CombatEngine, CombatError, EncounterPhase, HeroAction, Outcome};
pub use env::{
    Catalog, CatalogError, Choice, ChoiceProvider, HeroPool, MemorySink, OutputSink, PcgRng,
    RngOracle, ScriptedChoices, SequenceRng,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use spawn::{SpawnError, spawn};
pub use state::{
    ArmorData, Attributes, Element, EquipError, Equipment, Hero, HeroClass,
    HeroTemplate, Inventory, Item, ItemCategory, ItemKind, Monster, MonsterKind, MonsterTemplate,
    Party, PartyError, Position, PotionData, SpellData, StatBlock, WeaponData,
};

//! Game configuration constants and tunable balance tables.
//!
//! Every coefficient used by the combat, spawn, economy and world rules lives
//! here so a `config.toml` can rebalance the game without touching code.
//! Missing keys fall back to the defaults below.

/// Game configuration: compile-time limits plus runtime-tunable tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub combat: CombatTables,
    pub spawn: SpawnTables,
    pub economy: EconomyTables,
    pub world: WorldTables,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Maximum number of heroes in a party.
    pub const MAX_PARTY_SIZE: usize = 3;
    /// Experience needed per level to level up (`level * XP_PER_LEVEL`).
    pub const XP_PER_LEVEL: u32 = 10;
    /// Hit points granted per hero level.
    pub const HP_PER_LEVEL: f64 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }
}

/// Combat balance parameters.
///
/// ```text
/// hero hit      = max(0, (strength + weapon) * attack_scale - defense * defense_scale)
/// monster hit   = max(0, base_damage - armor * armor_scale)
/// spell hit     = damage + (dexterity / spell_dexterity_divisor) * damage
/// hero dodge    = agility * hero_dodge_per_agility
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub attack_scale: f64,
    pub defense_scale: f64,
    pub hero_dodge_per_agility: f64,
    pub armor_scale: f64,
    pub spell_dexterity_divisor: f64,
    /// Fraction of the current stat removed by an elemental debuff.
    pub debuff_ratio: f64,
    /// Multiplier applied to hp and mana of standing heroes after each round.
    pub regeneration_factor: f64,
    pub gold_per_monster_level: f64,
    pub xp_per_monster: u32,
}

impl Default for CombatTables {
    fn default() -> Self {
        Self {
            attack_scale: 0.05,
            defense_scale: 0.05,
            hero_dodge_per_agility: 0.002,
            armor_scale: 0.2,
            spell_dexterity_divisor: 10_000.0,
            debuff_ratio: 0.1,
            regeneration_factor: 1.1,
            gold_per_monster_level: 100.0,
            xp_per_monster: 2,
        }
    }
}

/// Monster spawn parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnTables {
    pub monster_hp_per_level: f64,
}

impl Default for SpawnTables {
    fn default() -> Self {
        Self {
            monster_hp_per_level: 100.0,
        }
    }
}

/// Market parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EconomyTables {
    /// Fraction of the purchase price paid back on resale.
    pub resale_ratio: f64,
    /// Number of catalog draws offered per market visit.
    pub market_stock_size: usize,
}

impl Default for EconomyTables {
    fn default() -> Self {
        Self {
            resale_ratio: 0.5,
            market_stock_size: 10,
        }
    }
}

/// Board generation and traversal parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldTables {
    pub rows: usize,
    pub cols: usize,
    /// Chance that entering a common cell starts an encounter.
    pub encounter_chance: f64,
    pub inaccessible_ratio: f64,
    pub market_ratio: f64,
}

impl Default for WorldTables {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            encounter_chance: 0.5,
            inaccessible_ratio: 0.2,
            market_ratio: 0.3,
        }
    }
}

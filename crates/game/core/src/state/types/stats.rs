//! Stat block shared by heroes and monsters.

/// Numeric stats common to every combatant.
///
/// `hp` may drop below zero while damage is applied; liveness is always
/// judged by [`StatBlock::is_fainted`] (`hp <= 0`). Nothing clamps `hp`
/// upward: regeneration and potions may push it past `max_hp_basis`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub hp: f64,
    /// Nominal maximum used for level-ups and revival, not a hard cap.
    pub max_hp_basis: f64,
    pub mana: f64,
    pub strength: f64,
    pub dexterity: f64,
    pub agility: f64,
    pub level: u32,
}

impl StatBlock {
    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }

    /// HP for display and liveness purposes, floored at zero.
    #[inline]
    pub fn effective_hp(&self) -> f64 {
        self.hp.max(0.0)
    }

    /// Subtracts `amount` from hp and returns the amount actually applied.
    ///
    /// Negative amounts are treated as zero; damage never heals.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let amount = amount.max(0.0);
        self.hp -= amount;
        amount
    }

    /// Spends `cost` mana if available. Returns whether the mana was spent.
    pub fn spend_mana(&mut self, cost: f64) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }
}

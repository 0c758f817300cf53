//! Hero selection.

use anyhow::{Result, bail};
use game_core::{ChoiceProvider, GameConfig, HeroClass, HeroPool, OutputSink, Party};

/// Builds the party by asking for a size and then a class and hero per
/// slot. Chosen heroes leave the pool.
pub fn select_party(
    pool: &mut HeroPool,
    input: &mut impl ChoiceProvider,
    output: &mut impl OutputSink,
) -> Result<Party> {
    if pool.is_empty() {
        bail!("no heroes available to form a party");
    }

    output.emit("--- Hero Selection ---");
    let max_size = GameConfig::MAX_PARTY_SIZE.min(pool.len());
    let max = u32::try_from(max_size).unwrap_or(1);
    let size = input.choose_int(&format!("Enter party size (1-{max})"), 1, max);

    let mut party = Party::new();
    for slot in 1..=size {
        output.emit(&format!("Select Hero #{slot}:"));
        let classes = pool.classes();
        for (position, class) in classes.iter().enumerate() {
            output.emit(&format!(
                "  {}) {class} (Favors {})",
                position + 1,
                favored_label(*class)
            ));
        }
        let class_max = u32::try_from(classes.len()).unwrap_or(1);
        let choice = input.choose_int("Choose class", 1, class_max);
        let class = classes[(choice as usize - 1).min(classes.len() - 1)];

        output.emit(&format!(
            "  {:<4} {:<20} {:<5} {:<5} {:<5} {:<5} {:<5}",
            "ID", "Name", "Lvl", "MP", "Str", "Dex", "Agi"
        ));
        let available = pool.available(class);
        for (position, t) in available.iter().enumerate() {
            output.emit(&format!(
                "  {:<4} {:<20} {:<5} {:<5.0} {:<5.0} {:<5.0} {:<5.0}",
                position + 1,
                t.name,
                t.level.max(1),
                t.mana,
                t.strength,
                t.dexterity,
                t.agility
            ));
        }
        let hero_max = u32::try_from(available.len()).unwrap_or(1);
        let index = input.choose_int("Select hero ID", 1, hero_max) as usize - 1;

        let hero = pool.take(class, index)?;
        tracing::info!(hero = %hero.name, %class, "hero joined the party");
        output.emit(&format!("{} joins the party!", hero.name));
        party.add_hero(hero)?;
    }
    Ok(party)
}

fn favored_label(class: HeroClass) -> &'static str {
    match class {
        HeroClass::Warrior => "Strength/Agility",
        HeroClass::Sorcerer => "Dexterity/Agility",
        HeroClass::Paladin => "Strength/Dexterity",
    }
}

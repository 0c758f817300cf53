//! Monster template loader.

use std::path::Path;

use game_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Monster catalog structure for RON files.
///
/// Dodge is written as a percentage (`dodge_percent: 35.0`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for monster templates from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;
        Ok(catalog.monsters)
    }
}

#[cfg(test)]
mod tests {
    use game_core::MonsterKind;

    use super::*;

    #[test]
    fn parses_monster_templates() {
        let monsters = MonsterLoader::parse(
            r#"(
                monsters: [
                    (name: "Desghidorrah", kind: Dragon, level: 3, base_damage: 300.0,
                     defense: 400.0, dodge_percent: 35.0),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(monsters[0].kind, MonsterKind::Dragon);
        assert_eq!(monsters[0].dodge_percent, 35.0);
    }
}

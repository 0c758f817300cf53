//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Every table and field is optional; omitted values keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [combat]
            regeneration_factor = 1.2

            [world]
            rows = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.combat.regeneration_factor, 1.2);
        assert_eq!(config.combat.attack_scale, 0.05);
        assert_eq!(config.world.rows, 4);
        assert_eq!(config.world.cols, 8);
        assert_eq!(config.economy.market_stock_size, 10);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = ConfigLoader::parse("[combat]\nattack_scale = \"high\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}

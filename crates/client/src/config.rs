//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Session-level settings that are not game balance.
///
/// Balance lives in `config.toml` inside the data directory.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `heroes.ron`, `monsters.ron`, `items.ron` and
    /// `config.toml`.
    pub data_dir: PathBuf,
    /// Fixed seed for a reproducible session.
    pub seed: Option<u64>,
    /// When set, diagnostics are also written to `legends.log` here.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LEGENDS_DATA_DIR` - Content directory (default: `data`)
    /// - `LEGENDS_SEED` - u64 seed for deterministic sessions
    /// - `LEGENDS_LOG_DIR` - Directory for a log file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LEGENDS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("LEGENDS_SEED");
        config.log_dir = env::var("LEGENDS_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

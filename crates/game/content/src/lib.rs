//! Data-driven catalogs and configuration.
//!
//! This crate loads the static game content from RON/TOML data files:
//! - Hero templates per class (RON)
//! - Monster templates per family (RON)
//! - Item catalog for every market (RON)
//! - Game configuration tables (TOML)
//!
//! Content is handed to the core as an immutable [`game_core::Catalog`] and
//! never changes during play.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, HeroLoader, ItemLoader, MonsterLoader};

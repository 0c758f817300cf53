//! Collaborators injected into the core.
//!
//! The core never reads files, the clock or the terminal. Catalog data,
//! randomness, menu input and event output all arrive through the types in
//! this module so that every encounter is reproducible from its inputs.
mod catalog;
mod error;
mod io;
mod rng;

pub use catalog::{Catalog, HeroPool};
pub use error::CatalogError;
pub use io::{Choice, ChoiceProvider, MemorySink, OutputSink, ScriptedChoices};
pub use rng::{PcgRng, RngOracle, SequenceRng};

//! Terminal shell for Legends: Monsters & Heroes.
//!
//! The game rules live in `game-core`; this crate supplies the pieces the
//! core deliberately leaves out:
//!
//! - [`terminal`]: stdin choice provider and stdout event sink
//! - [`roster`]: hero selection from the catalog pool
//! - [`board`]: the world grid and movement rules
//! - [`market`]: buy and sell menus over the core's transaction rules
//! - [`session`]: the exploration loop tying it all together

pub mod board;
pub mod config;
pub mod logging;
pub mod market;
pub mod roster;
pub mod session;
pub mod terminal;

pub use board::{Board, CellKind, Direction, MoveError};
pub use config::ClientConfig;
pub use market::MarketVisit;
pub use roster::select_party;
pub use session::{Session, SessionEnd};
pub use terminal::{ConsoleSink, TerminalInput};

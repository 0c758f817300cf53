//! The world board the party walks across.

use std::fmt::Write as _;

use crossterm::style::Stylize;
use game_core::{Position, RngOracle, WorldTables};

/// Terrain of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum CellKind {
    /// Walkable; entering may trigger an encounter.
    Common,
    /// Walkable and safe; the party can trade here.
    Market,
    /// Blocked.
    Inaccessible,
}

impl CellKind {
    pub fn is_accessible(self) -> bool {
        self != Self::Inaccessible
    }
}

/// Movement keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Parses a `w`/`a`/`s`/`d` key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Self::Up),
            "a" => Some(Self::Left),
            "s" => Some(Self::Down),
            "d" => Some(Self::Right),
            _ => None,
        }
    }

    const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
        }
    }
}

/// Why a move was refused. The party stays where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("You cannot move off the edge of the world!")]
    OffBoard,
    #[error("That path is blocked (Inaccessible).")]
    Blocked,
}

/// A rectangular grid of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Board {
    /// Rolls every cell from the world tables. The origin is always common
    /// so the party never starts boxed in.
    pub fn generate(tables: &WorldTables, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let rows = tables.rows.max(1);
        let cols = tables.cols.max(1);
        let cells = (0..rows * cols)
            .map(|index| {
                if index == 0 {
                    return CellKind::Common;
                }
                let roll = rng.next_f64();
                if roll < tables.inaccessible_ratio {
                    CellKind::Inaccessible
                } else if roll < tables.inaccessible_ratio + tables.market_ratio {
                    CellKind::Market
                } else {
                    CellKind::Common
                }
            })
            .collect();
        tracing::debug!(rows, cols, "board generated");
        Self { rows, cols, cells }
    }

    /// Builds a board from explicit rows of cells.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Self {
            rows: row_count,
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, position: Position) -> Option<CellKind> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        self.cells.get(position.row * self.cols + position.col).copied()
    }

    /// Target of a one-step move, if the board allows it.
    pub fn step(&self, from: Position, direction: Direction) -> Result<Position, MoveError> {
        let (d_row, d_col) = direction.delta();
        let target = from.offset(d_row, d_col).ok_or(MoveError::OffBoard)?;
        match self.cell(target) {
            None => Err(MoveError::OffBoard),
            Some(CellKind::Inaccessible) => Err(MoveError::Blocked),
            Some(_) => Ok(target),
        }
    }

    /// Draws the board with the party marked `P`.
    pub fn render(&self, party: Position) -> String {
        let border = format!("{}+", "+---".repeat(self.cols));
        let mut out = String::new();
        let _ = writeln!(out, "{border}");
        for row in 0..self.rows {
            out.push('|');
            for col in 0..self.cols {
                let position = Position::new(row, col);
                if position == party {
                    out.push_str(" P ");
                } else {
                    match self.cell(position) {
                        Some(CellKind::Market) => {
                            let _ = write!(out, "{}", " M ".yellow());
                        }
                        Some(CellKind::Inaccessible) => {
                            let _ = write!(out, "{}", " X ".red());
                        }
                        _ => out.push_str("   "),
                    }
                }
                out.push('|');
            }
            out.push('\n');
            let _ = writeln!(out, "{border}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use game_core::{PcgRng, SequenceRng};

    use super::*;

    #[test]
    fn origin_is_always_common() {
        let tables = WorldTables::default();
        let mut rng = SequenceRng::new(vec![0.0]);
        let board = Board::generate(&tables, &mut rng);

        assert_eq!(board.cell(Position::ORIGIN), Some(CellKind::Common));
        assert_eq!(board.cell(Position::new(0, 1)), Some(CellKind::Inaccessible));
        assert_eq!(board.rows(), 8);
        assert_eq!(board.cols(), 8);
    }

    #[test]
    fn rolls_map_to_terrain_bands() {
        let tables = WorldTables {
            rows: 1,
            cols: 4,
            ..WorldTables::default()
        };
        let mut rng = SequenceRng::new(vec![0.1, 0.3, 0.7]);
        let board = Board::generate(&tables, &mut rng);

        assert_eq!(board.cell(Position::new(0, 1)), Some(CellKind::Inaccessible));
        assert_eq!(board.cell(Position::new(0, 2)), Some(CellKind::Market));
        assert_eq!(board.cell(Position::new(0, 3)), Some(CellKind::Common));
    }

    #[test]
    fn generated_board_has_every_cell() {
        let mut rng = PcgRng::seeded(9);
        let board = Board::generate(&WorldTables::default(), &mut rng);
        let cells = (0..8)
            .flat_map(|row| (0..8).map(move |col| Position::new(row, col)))
            .filter(|&position| board.cell(position).is_some())
            .count();
        assert_eq!(cells, 64);
    }

    #[test]
    fn moves_respect_edges_and_walls() {
        use CellKind::*;
        let board = Board::from_rows(vec![vec![Common, Inaccessible], vec![Market, Common]]);

        assert_eq!(board.step(Position::ORIGIN, Direction::Up), Err(MoveError::OffBoard));
        assert_eq!(board.step(Position::ORIGIN, Direction::Left), Err(MoveError::OffBoard));
        assert_eq!(board.step(Position::ORIGIN, Direction::Right), Err(MoveError::Blocked));
        assert_eq!(
            board.step(Position::ORIGIN, Direction::Down),
            Ok(Position::new(1, 0))
        );
        assert_eq!(
            board.step(Position::new(1, 1), Direction::Right),
            Err(MoveError::OffBoard)
        );
    }

    #[test]
    fn render_marks_the_party() {
        use CellKind::*;
        let board = Board::from_rows(vec![vec![Common, Market]]);
        let drawn = board.render(Position::ORIGIN);
        assert!(drawn.starts_with("+---+---+\n| P |"));
        assert!(drawn.contains(" M "));
    }

    #[test]
    fn direction_keys() {
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("m"), None);
    }
}

use rand::Rng;

use crate::config::Grid;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Moves the food to a uniformly random in-bounds cell.
    ///
    /// The draw does not avoid cells occupied by the snake body; food
    /// occasionally spawning under the snake is accepted behavior, and
    /// the consumption check only ever compares against the head.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid) {
        self.position = Position {
            x: rng.gen_range(0..i32::from(grid.columns())),
            y: rng.gen_range(0..i32::from(grid.rows())),
        };
    }
}

//! Stateless collision predicates over coordinate sets.
//!
//! Pure functions of their inputs; the simulation decides what a hit
//! means (food, wall, or self) and applies the state transition.

use crate::config::Grid;
use crate::snake::Position;

/// Returns true when the two coordinate sets share at least one cell.
#[must_use]
pub fn have_collided(a: &[Position], b: &[Position]) -> bool {
    a.iter().any(|pa| b.iter().any(|pb| pa == pb))
}

/// Returns true when any coordinate in the set lies outside the grid.
#[must_use]
pub fn has_hit_wall(set: &[Position], grid: Grid) -> bool {
    set.iter().any(|p| {
        p.x < 0
            || p.x > i32::from(grid.columns()) - 1
            || p.y < 0
            || p.y > i32::from(grid.rows()) - 1
    })
}

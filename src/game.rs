use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision;
use crate::config::Grid;
use crate::food::Food;
use crate::input::Direction;
use crate::score::HighScoreStore;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// What ended a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Outcome notification of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// The snake moved without hitting anything.
    Advanced,
    /// The head landed on food; the snake grew and scored.
    FoodEaten { score: u32 },
    /// The head hit a wall or the body; `score` is final.
    GameOver { score: u32, reason: DeathReason },
    /// A fresh session was set up after a finished game.
    Restarted,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, the score, and the random source. Everything
/// else reads this through `&GameState`; the only mutation entry points
/// are [`tick`](Self::tick) and [`queue_direction`](Self::queue_direction).
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    grid: Grid,
    high_score: u32,
    pending_direction: Option<Direction>,
    rng: StdRng,
    store: Box<dyn HighScoreStore>,
}

impl GameState {
    /// Creates a game on `grid` with an entropy-seeded random source.
    ///
    /// `high_score` is the value the caller loaded at startup; the store
    /// is only written to, and only when a finished game beats it.
    #[must_use]
    pub fn new(grid: Grid, high_score: u32, store: Box<dyn HighScoreStore>) -> Self {
        Self::from_rng(grid, StdRng::from_entropy(), high_score, store)
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(
        grid: Grid,
        seed: u64,
        high_score: u32,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        Self::from_rng(grid, StdRng::seed_from_u64(seed), high_score, store)
    }

    fn from_rng(grid: Grid, rng: StdRng, high_score: u32, store: Box<dyn HighScoreStore>) -> Self {
        let start = Position {
            x: i32::from(grid.columns() / 2),
            y: i32::from(grid.rows() / 2),
        };

        // Food starts on the snake's cell. The consumption check only
        // looks at the post-move head, so the first tick simply walks off
        // it; the overlap is accepted rather than special-cased.
        Self {
            snake: Snake::new(start),
            food: Food::new(start),
            score: 0,
            status: GameStatus::Running,
            grid,
            high_score,
            pending_direction: None,
            rng,
            store,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// The tick that detects game over only reports it; the following
    /// tick performs the restart. Food consumption ends the tick early,
    /// so a tick can score or die, never both.
    pub fn tick(&mut self) -> TickEvent {
        if self.status == GameStatus::Over {
            self.restart();
            return TickEvent::Restarted;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.snake.set_direction(direction);
        }

        self.snake.shift_parts();
        self.snake.advance_head();

        let head = [self.snake.head()];
        if collision::have_collided(&head, &[self.food.position]) {
            self.food.relocate(&mut self.rng, self.grid);
            self.score += 1;
            self.snake.grow();
            return TickEvent::FoodEaten { score: self.score };
        }

        if collision::has_hit_wall(self.snake.segments(), self.grid) {
            self.status = GameStatus::Over;
            return TickEvent::GameOver {
                score: self.score,
                reason: DeathReason::WallCollision,
            };
        }

        if collision::have_collided(&head, self.snake.trailing_segments()) {
            self.status = GameStatus::Over;
            return TickEvent::GameOver {
                score: self.score,
                reason: DeathReason::SelfCollision,
            };
        }

        TickEvent::Advanced
    }

    /// Stores a direction command for the next tick.
    ///
    /// At most one command is pending; the last one queued between two
    /// ticks wins. The reversal rule is enforced when the command is
    /// applied, not here, so it is checked against the heading the snake
    /// actually has at that moment.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Returns the grid the game runs on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the best score seen so far, including the running session's
    /// finished predecessors.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    fn restart(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(error) = self.store.save(self.high_score) {
                eprintln!("failed to persist high score: {error}");
            }
        }

        self.snake.reset();
        self.food.relocate(&mut self.rng, self.grid);
        self.score = 0;
        self.pending_direction = None;
        self.status = GameStatus::Running;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Grid;
    use crate::food::Food;
    use crate::input::Direction;
    use crate::score::MemoryStore;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus, TickEvent};

    fn test_game(rows: u16, columns: u16) -> GameState {
        let grid = Grid::new(rows, columns).expect("test grid should be valid");
        GameState::with_seed(grid, 42, 0, Box::new(MemoryStore::new(0)))
    }

    #[test]
    fn plain_movement_keeps_running_and_score() {
        let mut state = test_game(10, 10);
        state.snake = Snake::new(Position { x: 2, y: 2 });
        state.food = Food::new(Position { x: 9, y: 9 });

        let event = state.tick();

        assert_eq!(event, TickEvent::Advanced);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position { x: 3, y: 2 });
    }

    #[test]
    fn eating_food_grows_scores_and_relocates() {
        let mut state = test_game(10, 10);
        state.snake = Snake::new(Position { x: 2, y: 2 });
        state.food = Food::new(Position { x: 3, y: 2 });

        let event = state.tick();

        assert_eq!(event, TickEvent::FoodEaten { score: 1 });
        assert_eq!(state.snake.head(), Position { x: 3, y: 2 });
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        assert_eq!(state.status, GameStatus::Running);
        assert!((0..10).contains(&state.food.position.x));
        assert!((0..10).contains(&state.food.position.y));
    }

    #[test]
    fn food_on_the_boundary_cell_is_not_a_wall_hit() {
        // Food check runs first and ends the tick, so scoring on the last
        // in-bounds cell never reports a collision.
        let mut state = test_game(5, 5);
        state.snake = Snake::new(Position { x: 3, y: 2 });
        state.food = Food::new(Position { x: 4, y: 2 });

        let event = state.tick();

        assert_eq!(event, TickEvent::FoodEaten { score: 1 });
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn leaving_the_grid_ends_the_game() {
        let mut state = test_game(10, 10);
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 4 }], Direction::Left);
        state.food = Food::new(Position { x: 9, y: 9 });

        let event = state.tick();

        assert_eq!(
            event,
            TickEvent::GameOver {
                score: 0,
                reason: DeathReason::WallCollision,
            }
        );
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn biting_the_body_ends_the_game() {
        // Head at (2,2) turning left into a loop lands on (1,2), which the
        // shift moves segment 1 onto as well.
        let mut state = test_game(6, 6);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Left,
        );
        state.food = Food::new(Position { x: 5, y: 5 });

        let event = state.tick();

        assert_eq!(
            event,
            TickEvent::GameOver {
                score: 0,
                reason: DeathReason::SelfCollision,
            }
        );
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn tick_after_game_over_restarts() {
        let mut state = test_game(10, 10);
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 4 }], Direction::Left);
        state.food = Food::new(Position { x: 9, y: 9 });

        state.tick();
        assert_eq!(state.status, GameStatus::Over);

        let event = state.tick();

        assert_eq!(event, TickEvent::Restarted);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        // Reset anchors on the replaced snake's first segment.
        assert_eq!(state.snake.head(), Position { x: 0, y: 4 });
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn restart_persists_a_beaten_high_score() {
        let store = MemoryStore::new(2);
        let grid = Grid::new(10, 10).expect("test grid should be valid");
        let mut state = GameState::with_seed(grid, 42, 2, Box::new(store.clone()));

        state.snake = Snake::new(Position { x: 2, y: 2 });
        state.food = Food::new(Position { x: 3, y: 2 });
        state.tick();
        state.food = Food::new(Position { x: 4, y: 2 });
        state.tick();
        state.food = Food::new(Position { x: 5, y: 2 });
        state.tick();
        assert_eq!(state.score, 3);

        state.snake = Snake::from_segments(vec![Position { x: 0, y: 4 }], Direction::Left);
        state.tick();
        state.tick();

        assert_eq!(state.high_score(), 3);
        assert_eq!(store.value(), 3);
    }

    #[test]
    fn restart_leaves_an_unbeaten_high_score_alone() {
        let store = MemoryStore::new(5);
        let grid = Grid::new(10, 10).expect("test grid should be valid");
        let mut state = GameState::with_seed(grid, 42, 5, Box::new(store.clone()));

        state.snake = Snake::from_segments(vec![Position { x: 0, y: 4 }], Direction::Left);
        state.food = Food::new(Position { x: 9, y: 9 });
        state.tick();
        state.tick();

        assert_eq!(state.high_score(), 5);
        assert_eq!(store.value(), 5);
    }

    #[test]
    fn queued_direction_applies_on_the_next_tick() {
        let mut state = test_game(10, 10);
        state.snake = Snake::new(Position { x: 5, y: 5 });
        state.food = Food::new(Position { x: 9, y: 9 });

        state.queue_direction(Direction::Up);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn last_queued_direction_wins() {
        let mut state = test_game(10, 10);
        state.snake = Snake::new(Position { x: 5, y: 5 });
        state.food = Food::new(Position { x: 9, y: 9 });

        state.queue_direction(Direction::Up);
        state.queue_direction(Direction::Down);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn queued_reversal_is_ignored_for_a_long_snake() {
        let mut state = test_game(10, 10);
        state.snake = Snake::from_segments(
            vec![Position { x: 5, y: 5 }, Position { x: 4, y: 5 }],
            Direction::Right,
        );
        state.food = Food::new(Position { x: 9, y: 9 });

        state.queue_direction(Direction::Left);
        state.tick();

        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn pending_direction_does_not_survive_a_restart() {
        let mut state = test_game(10, 10);
        state.snake = Snake::from_segments(vec![Position { x: 0, y: 4 }], Direction::Left);
        state.food = Food::new(Position { x: 9, y: 9 });

        state.tick();
        state.queue_direction(Direction::Down);
        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        state.tick();
        // The fresh snake moves along its default heading, not Down.
        assert_eq!(state.snake.head(), Position { x: 1, y: 4 });
    }

    #[test]
    fn new_game_starts_at_the_grid_center() {
        let state = test_game(20, 30);

        assert_eq!(state.snake.head(), Position { x: 15, y: 10 });
        assert_eq!(state.food.position, Position { x: 15, y: 10 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.status, GameStatus::Running);
    }
}

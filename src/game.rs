use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, INITIAL_FOOD, INITIAL_SNAKE_HEAD};
use crate::food::Food;
use crate::input::{Direction, Velocity, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Not started yet; no timer is active.
    Idle,
    Running,
    Paused,
    /// Terminal: the snake bit itself.
    Over,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed.
    Skipped,
    /// The head moved; `grew` is set when food was eaten.
    Moved { grew: bool },
    /// The candidate head hit the body; the status is now `Over`.
    Collided,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub velocity: Velocity,
    pub score: u32,
    pub status: GameStatus,
    direction: Direction,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates the startup state with food placement seeded from entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        Self {
            snake: Snake::new(INITIAL_SNAKE_HEAD.wrapped(bounds)),
            food: Food::new(INITIAL_FOOD.wrapped(bounds)),
            velocity: Velocity::ZERO,
            score: 0,
            status: GameStatus::Idle,
            direction: Direction::Right,
            bounds,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Collision is checked against the current body before anything is
    /// committed, so a colliding tick leaves snake, food and score untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        let next_head = self.next_head_position();
        if self.snake.collides_with(next_head) {
            self.status = GameStatus::Over;
            log::info!("snake bit itself at {next_head:?}; final score {}", self.score);
            return TickOutcome::Collided;
        }

        let grew = next_head == self.food.position;
        if grew {
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.bounds);
            log::debug!(
                "food eaten at {next_head:?}; score {}, new food at {:?}",
                self.score,
                self.food.position
            );
        }

        self.snake.advance(next_head, grew);
        TickOutcome::Moved { grew }
    }

    /// Turns the snake unless `direction` reverses the locked direction.
    ///
    /// Returns whether the direction was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            log::trace!("ignored reversal from {:?} to {direction:?}", self.direction);
            return false;
        }

        self.velocity = direction.velocity();
        self.direction = direction;
        true
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.snake.head().stepped(self.velocity, self.bounds)
    }

    /// Returns the locked movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the grid size for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}

use std::collections::{HashSet, VecDeque};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food::FoodPlacer;
use crate::grid::{Coord, Direction, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    GridFull,
    Aborted,
}

impl EndReason {
    pub fn describe(&self) -> &'static str {
        match self {
            EndReason::WallCollision => "You hit a wall",
            EndReason::SelfCollision => "You ran into yourself",
            EndReason::GridFull => "The snake filled the whole grid",
            EndReason::Aborted => "Ended by request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Ended(EndReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

/// One run of the game: the snake, the food and the score, advanced a tick
/// at a time. Cloning a session snapshots the run, including its randomness.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    wrap_enabled: bool,
    // Head first, tail last.
    snake: VecDeque<Coord>,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Coord,
    score: u32,
    placer: FoodPlacer,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let grid = Grid::new(config.grid_count);
        let mid = config.grid_count / 2;
        // The head starts on the centre cell with the body trailing to the
        // right. Config validation guarantees the body fits.
        let snake: VecDeque<Coord> = (0..config.initial_snake_length)
            .map(|i| Coord {
                cell: mid + i,
                row: mid,
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let placer = FoodPlacer::default();
        let occupied: HashSet<Coord> = snake.iter().copied().collect();
        let food = placer
            .place(&mut rng, &grid, &occupied)
            .expect("a freshly spawned snake leaves free cells");
        GameSession {
            grid,
            wrap_enabled: config.wrap_enabled,
            snake,
            direction: Direction::Left,
            pending_direction: None,
            food,
            score: 0,
            placer,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Coord {
        *self.snake.front().expect("the snake always has a head")
    }

    /// Queues a direction change for the next tick. Requests that would
    /// reverse the snake onto itself are dropped; the check runs against the
    /// direction the snake is actually travelling, not against an earlier
    /// queued request.
    pub fn request_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.pending_direction = Some(requested);
        }
    }

    /// Advances the game by one tick: commit the queued direction, move the
    /// head, grow or shift the body, then look for collisions.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let head = self.head();
        let next = if self.wrap_enabled {
            self.grid.wrapped_step(head, self.direction)
        } else {
            match self.grid.bounded_step(head, self.direction) {
                Some(coord) => coord,
                // The session is left exactly as it was before the tick.
                None => return StepOutcome::Ended(EndReason::WallCollision),
            }
        };

        self.snake.push_front(next);

        let ate = next == self.food;
        if ate {
            self.score += 1;
            info!("ate food at ({}, {}), score {}", next.cell, next.row, self.score);
            if self.snake.len() == self.grid.area() {
                return StepOutcome::Ended(EndReason::GridFull);
            }
            let occupied: HashSet<Coord> = self.snake.iter().copied().collect();
            self.food = self
                .placer
                .place(&mut self.rng, &self.grid, &occupied)
                .expect("a snake shorter than the grid leaves free cells");
        } else {
            self.snake.pop_back();
        }

        // The tail cell vacated this tick no longer counts, so the scan runs
        // against the body as it stands after the move.
        if self.snake.iter().skip(1).any(|&segment| segment == next) {
            return StepOutcome::Ended(EndReason::SelfCollision);
        }

        if ate {
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    pub fn cell_at(&self, coord: Coord) -> CellKind {
        assert!(
            self.grid.contains(coord),
            "cell ({}, {}) is outside the grid",
            coord.cell,
            coord.row
        );
        if coord == self.head() {
            CellKind::Head
        } else if self.snake.contains(&coord) {
            CellKind::Body
        } else if coord == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

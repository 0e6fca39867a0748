use std::time::Duration;

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_GRID_COUNT: u16 = 14;
pub const DEFAULT_TICK_MS: u64 = 500;
pub const DEFAULT_SNAKE_LENGTH: u16 = 5;
pub const DEFAULT_CELL_WIDTH: u16 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be between 2 and 100 cells per side, got {0}")]
    GridCount(u16),
    #[error("tick interval must be between 50 and 5000 ms, got {0}")]
    TickInterval(u64),
    #[error("snake length {length} does not fit the grid, at most {max} cells from the centre to the right edge")]
    SnakeLength { length: u16, max: u16 },
    #[error("cell width must be between 1 and 4 columns, got {0}")]
    CellWidth(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_count: u16,
    pub wrap_enabled: bool,
    pub tick_interval: Duration,
    pub initial_snake_length: u16,
    pub cell_width: u16,
    pub border: bool,
    pub ascii: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_count: DEFAULT_GRID_COUNT,
            wrap_enabled: true,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            initial_snake_length: DEFAULT_SNAKE_LENGTH,
            cell_width: DEFAULT_CELL_WIDTH,
            border: true,
            ascii: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=100).contains(&self.grid_count) {
            return Err(ConfigError::GridCount(self.grid_count));
        }
        let tick_ms = self.tick_interval.as_millis() as u64;
        if !(50..=5000).contains(&tick_ms) {
            return Err(ConfigError::TickInterval(tick_ms));
        }
        // The snake spawns head on the centre cell with the body running to
        // the right, so it may use at most the cells from the centre to the
        // right edge.
        let max_length = self.grid_count - self.grid_count / 2;
        if self.initial_snake_length == 0 || self.initial_snake_length > max_length {
            return Err(ConfigError::SnakeLength {
                length: self.initial_snake_length,
                max: max_length,
            });
        }
        if !(1..=4).contains(&self.cell_width) {
            return Err(ConfigError::CellWidth(self.cell_width));
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(name = "gridsnake", version, about = "Snake on a square grid, in the terminal")]
pub struct Cli {
    /// Cells per side of the square board
    #[arg(long, default_value_t = DEFAULT_GRID_COUNT)]
    pub grid_count: u16,

    /// End the game on wall contact instead of wrapping to the opposite edge
    #[arg(long)]
    pub walls: bool,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Starting length of the snake
    #[arg(long, default_value_t = DEFAULT_SNAKE_LENGTH)]
    pub snake_length: u16,

    /// Terminal columns drawn per board cell
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u16,

    /// Draw the board without a border
    #[arg(long)]
    pub no_border: bool,

    /// Use plain ASCII glyphs instead of unicode blocks
    #[arg(long)]
    pub ascii: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn to_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            grid_count: self.grid_count,
            wrap_enabled: !self.walls,
            tick_interval: Duration::from_millis(self.tick_ms),
            initial_snake_length: self.snake_length,
            cell_width: self.cell_width,
            border: !self.no_border,
            ascii: self.ascii,
        };
        config.validate()?;
        Ok(config)
    }
}

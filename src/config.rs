use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::grid::Cell;

// Window / board
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TILE_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / TILE_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / TILE_SIZE;
pub const SEGMENT_SIZE: i32 = TILE_SIZE - 2; // leaves a 2px gap between segments
pub const TICK_RATE: u32 = 15; // snake steps per second

pub const SAVE_FILE: &str = "snake_record.json";

// Palette
pub const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const HUD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const HUD_DIM: Color = Color::new(0.6, 0.6, 0.6, 1.0);
pub const COIN_COLOR: Color = Color::new(1.0, 0.84, 0.0, 1.0);
pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// Background bands, indexed by score band
pub const BACKGROUND_BANDS: [Color; 4] = [
    Color::new(0.0, 0.0, 0.0, 1.0),
    Color::new(0.02, 0.04, 0.12, 1.0),
    Color::new(0.08, 0.02, 0.12, 1.0),
    Color::new(0.14, 0.04, 0.02, 1.0),
];
pub const BAND_WIDTH: u32 = 10; // points per background band

// Effects
pub const MAX_PARTICLES: usize = 200;
pub const FOOD_BURST: usize = 24;
pub const STAR_COUNT: usize = 80;

/// Runtime configuration of a game session.
///
/// The binary always uses [`GameConfig::default`]; tests shrink the board and
/// point the record at a temporary directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells
    pub grid_width: i32,
    /// Board height in cells
    pub grid_height: i32,
    /// Snake steps per second
    pub tick_rate: u32,
    /// Location of the persisted record
    pub record_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            tick_rate: TICK_RATE,
            record_path: PathBuf::from(SAVE_FILE),
        }
    }
}

impl GameConfig {
    /// Same as the default board, with the record stored at `path`.
    pub fn with_record_path(path: impl Into<PathBuf>) -> Self {
        Self {
            record_path: path.into(),
            ..Default::default()
        }
    }

    /// Spawn cell of the snake.
    pub fn center(&self) -> Cell {
        Cell::new(self.grid_width / 2, self.grid_height / 2)
    }

    /// Seconds between two snake steps.
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

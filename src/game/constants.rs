//! Game constants for board size, colors, timing, and layout.

use bevy::prelude::*;
use std::time::Duration;

// Board dimensions, in pixels
pub const GAME_WIDTH: i32 = 1000;
pub const GAME_HEIGHT: i32 = 700;
pub const CELL_SIZE: i32 = 50;

// Snake
pub const BODY_PARTS: usize = 4;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(70);

// Layout: the score label sits in a band above the board
pub const LABEL_HEIGHT: f32 = 60.0;
pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const GAME_OVER_FONT_SIZE: f32 = 70.0;

// Colors
pub const SNAKE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const GAME_OVER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

// Z-index constants for rendering layers
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_TEXT: f32 = 3.0;

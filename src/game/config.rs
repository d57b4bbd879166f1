//! Board and timing configuration.

use bevy::prelude::*;
use std::time::Duration;
use thiserror::Error;

use super::{BODY_PARTS, CELL_SIZE, GAME_HEIGHT, GAME_WIDTH, TICK_INTERVAL};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{dimension} must be positive, got {value}")]
    NonPositive { dimension: &'static str, value: i32 },
    #[error("{dimension} of {value} is not a multiple of the cell size {cell_size}")]
    NotGridAligned {
        dimension: &'static str,
        value: i32,
        cell_size: i32,
    },
    #[error("the snake needs at least one body part")]
    EmptySnake,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Geometry and pacing of a game. All positions on the board are multiples
/// of `cell_size`, bounded by `width` x `height`.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub initial_body_parts: usize,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            cell_size: CELL_SIZE,
            initial_body_parts: BODY_PARTS,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in [
            ("cell size", self.cell_size),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { dimension, value });
            }
        }

        for (dimension, value) in [("width", self.width), ("height", self.height)] {
            if value % self.cell_size != 0 {
                return Err(ConfigError::NotGridAligned {
                    dimension,
                    value,
                    cell_size: self.cell_size,
                });
            }
        }

        if self.initial_body_parts == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Number of cells along the x axis.
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells along the y axis.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}

//! Food - a single item placed on a random cell of the board.

use rand::Rng;

use crate::game::{Drawable, FOOD_COLOR, GameConfig, Position, ShapeKind};

/// The food currently on the board. Eaten food is discarded and replaced by
/// a freshly placed one rather than moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Places food on a uniformly random cell. Cells occupied by the snake
    /// are not excluded.
    pub fn random(rng: &mut impl Rng, config: &GameConfig) -> Self {
        let x = rng.random_range(0..config.columns()) * config.cell_size;
        let y = rng.random_range(0..config.rows()) * config.cell_size;
        Food {
            position: Position::new(x, y),
        }
    }

    pub fn at(position: Position) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn drawable(&self) -> Drawable {
        Drawable {
            position: self.position,
            shape: ShapeKind::Circle,
            color: FOOD_COLOR,
        }
    }
}

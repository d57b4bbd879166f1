//! Board primitives and ECS marker components for the snake game.

use bevy::prelude::*;

/// Pixel position of a cell's top-left corner on the board. Always a
/// multiple of the cell size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The position one cell away in `direction`. The board's y axis grows
    /// downward.
    pub fn step(self, direction: Direction, cell_size: i32) -> Position {
        let Position { x, y } = self;
        match direction {
            Direction::Up => Position::new(x, y - cell_size),
            Direction::Down => Position::new(x, y + cell_size),
            Direction::Left => Position::new(x - cell_size, y),
            Direction::Right => Position::new(x + cell_size, y),
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Maps an arrow key to its direction.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowUp => Some(Direction::Up),
            KeyCode::ArrowDown => Some(Direction::Down),
            KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The two shapes anything on the board is drawn with.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ShapeKind {
    Square,
    Circle,
}

/// Something drawable on the board: where, what shape, and which color.
#[derive(Clone, Copy, Debug)]
pub struct Drawable {
    pub position: Position,
    pub shape: ShapeKind,
    pub color: Color,
}

/// Component to mark a drawn snake segment.
#[derive(Component)]
pub struct SegmentShape;

/// Component to mark the drawn food.
#[derive(Component)]
pub struct FoodShape;

/// Component to mark the score label.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over message.
#[derive(Component)]
pub struct GameOverText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell_along_the_direction_axis() {
        let origin = Position::new(100, 100);
        assert_eq!(origin.step(Direction::Up, 50), Position::new(100, 50));
        assert_eq!(origin.step(Direction::Down, 50), Position::new(100, 150));
        assert_eq!(origin.step(Direction::Left, 50), Position::new(50, 100));
        assert_eq!(origin.step(Direction::Right, 50), Position::new(150, 100));
    }

    #[test]
    fn opposites_pair_up() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn only_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::KeyW), None);
        assert_eq!(Direction::from_key(KeyCode::Space), None);
    }
}

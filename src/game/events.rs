//! Game events (messages).
//!
//! Every tick produces a list of these describing what changed on the
//! board; the renderer and UI only ever react to them.

use bevy::prelude::*;

use super::Position;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A new head segment was prepended to the snake.
    SegmentAdded(Position),
    /// The rearmost segment was dropped.
    TailRemoved(Position),
    /// The food at this position was eaten and discarded.
    FoodEaten(Position),
    /// A new food item was placed.
    FoodSpawned(Position),
    ScoreChanged(u32),
    /// The snake collided; no further ticks follow.
    GameOver { score: u32 },
}

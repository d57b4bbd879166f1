//! System ordering within a frame.

use bevy::prelude::*;

/// Key presses are applied before the tick, and a tick's events are drawn in
/// the same frame they are produced.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Tick,
    Present,
}

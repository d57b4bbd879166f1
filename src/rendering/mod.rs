//! Rendering plugin - turns game events into shapes on screen.
//!
//! The game state never touches entities. This plugin keeps its own registry
//! from board items to the entities that draw them and applies each tick's
//! events to it.

use std::collections::VecDeque;

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::food::Food;
use crate::game::{
    Drawable, FoodShape, GameConfig, GameEvent, GameSet, GameState, LABEL_HEIGHT, Position,
    SegmentShape, ShapeKind, Z_FOOD, Z_SNAKE_SEGMENT,
};
use crate::snake::segment_drawable;

/// Plugin for drawing the board.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeRegistry>()
            .add_systems(Startup, draw_initial_board)
            .add_systems(Update, apply_game_events.in_set(GameSet::Present));
    }
}

/// Entities currently drawing the board. `segments` mirrors the snake's
/// order, head first.
#[derive(Resource, Default)]
pub struct ShapeRegistry {
    segments: VecDeque<Entity>,
    food: Option<Entity>,
}

/// Converts a board position (top-left corner of a cell, y down) into the
/// world-space centre of that cell. The board sits below the score label.
pub fn board_to_world(position: Position, config: &GameConfig, z: f32) -> Vec3 {
    let cell = config.cell_size as f32;
    let x = position.x as f32 - config.width as f32 / 2.0 + cell / 2.0;
    let y = config.height as f32 / 2.0 - position.y as f32 - cell / 2.0 - LABEL_HEIGHT / 2.0;
    Vec3::new(x, y, z)
}

/// Spawns the shape for `drawable`, tagged with `marker`.
fn spawn_shape(
    commands: &mut Commands,
    drawable: Drawable,
    marker: impl Bundle,
    config: &GameConfig,
    z: f32,
) -> Entity {
    let cell = config.cell_size as f32;
    let shape_config = ShapeConfig {
        color: drawable.color,
        transform: Transform::from_translation(board_to_world(drawable.position, config, z)),
        ..ShapeConfig::default_2d()
    };

    match drawable.shape {
        ShapeKind::Square => commands
            .spawn((ShapeBundle::rect(&shape_config, Vec2::splat(cell)), marker))
            .id(),
        ShapeKind::Circle => commands
            .spawn((ShapeBundle::circle(&shape_config, cell / 2.0), marker))
            .id(),
    }
}

fn apply_event(
    commands: &mut Commands,
    registry: &mut ShapeRegistry,
    config: &GameConfig,
    event: &GameEvent,
) {
    match *event {
        GameEvent::SegmentAdded(position) => {
            let entity = spawn_shape(
                commands,
                segment_drawable(position),
                SegmentShape,
                config,
                Z_SNAKE_SEGMENT,
            );
            registry.segments.push_front(entity);
        }
        GameEvent::TailRemoved(position) => {
            trace!("Erasing tail at {:?}", position);
            if let Some(entity) = registry.segments.pop_back() {
                commands.entity(entity).despawn();
            }
        }
        GameEvent::FoodEaten(position) => {
            trace!("Erasing eaten food at {:?}", position);
            if let Some(entity) = registry.food.take() {
                commands.entity(entity).despawn();
            }
        }
        GameEvent::FoodSpawned(position) => {
            let drawable = Food::at(position).drawable();
            let entity = spawn_shape(commands, drawable, FoodShape, config, Z_FOOD);
            registry.food = Some(entity);
        }
        GameEvent::GameOver { score } => {
            debug!("Clearing the board, final score {}", score);
            for entity in registry.segments.drain(..).chain(registry.food.take()) {
                commands.entity(entity).despawn();
            }
        }
        GameEvent::ScoreChanged(_) => {}
    }
}

/// System to draw the starting snake and food.
fn draw_initial_board(
    mut commands: Commands,
    mut registry: ResMut<ShapeRegistry>,
    config: Res<GameConfig>,
    game_state: Res<GameState>,
) {
    for event in game_state.initial_events() {
        apply_event(&mut commands, &mut registry, &config, &event);
    }
}

/// System to apply this frame's game events to the drawn shapes.
fn apply_game_events(
    mut commands: Commands,
    mut registry: ResMut<ShapeRegistry>,
    config: Res<GameConfig>,
    mut events: MessageReader<GameEvent>,
) {
    for event in events.read() {
        apply_event(&mut commands, &mut registry, &config, event);
    }
}

//! UI plugin - camera, score label and the game over message.

use bevy::prelude::*;

use crate::game::{
    GAME_OVER_COLOR, GAME_OVER_FONT_SIZE, GameEvent, GameOverText, GameSet, LABEL_HEIGHT,
    SCORE_FONT_SIZE, ScoreText, Z_TEXT,
};

/// Plugin for the camera and text elements.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(
                Update,
                (update_score_text, spawn_game_over_text).in_set(GameSet::Present),
            );
    }
}

/// Text shown in the score label.
pub fn score_label(score: u32) -> String {
    format!("Score:{score}")
}

/// Initial setup system - camera and score label.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Px(LABEL_HEIGHT),
            top: Val::Px(0.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(0)),
                TextFont {
                    font_size: SCORE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                ScoreText,
            ));
        });
}

/// System to update the score label whenever the score changes.
fn update_score_text(
    mut events: MessageReader<GameEvent>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    let Some(score) = events.read().fold(None, |latest, event| match event {
        GameEvent::ScoreChanged(score) => Some(*score),
        _ => latest,
    }) else {
        return;
    };

    if let Ok(mut text) = query.single_mut() {
        *text = Text::new(score_label(score));
    }
}

/// System to show the game over message in the middle of the board.
pub(crate) fn spawn_game_over_text(
    mut commands: Commands,
    mut events: MessageReader<GameEvent>,
    existing: Query<(), With<GameOverText>>,
) {
    let game_over = events
        .read()
        .filter(|event| matches!(event, GameEvent::GameOver { .. }))
        .count()
        > 0;
    if !game_over || !existing.is_empty() {
        return;
    }

    // Centre of the board, which sits half a label below the window centre
    let centre = Vec3::new(0.0, -LABEL_HEIGHT / 2.0, Z_TEXT);

    commands.spawn((
        Text2d::new("GAME OVER"),
        TextFont {
            font_size: GAME_OVER_FONT_SIZE,
            ..default()
        },
        TextColor(GAME_OVER_COLOR),
        Transform::from_translation(centre),
        GameOverText,
    ));
}

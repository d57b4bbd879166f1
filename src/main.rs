use bevy::{
    prelude::*,
    window::{MonitorSelection, WindowPosition, WindowResolution},
};
use bevy_vector_shapes::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use game::{
    BACKGROUND_COLOR, ConfigError, GameConfig, GameEvent, GameRng, GameState, LABEL_HEIGHT,
    TickTimer,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> Result<(), ConfigError> {
    let config = GameConfig::default();
    config.validate()?;

    let mut rng = StdRng::from_os_rng();
    let game_state = GameState::new(&config, &mut rng);

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        config.width as u32,
                        (config.height as f32 + LABEL_HEIGHT) as u32,
                    ),
                    position: WindowPosition::Centered(MonitorSelection::Primary),
                    resizable: false,
                    title: "Snake".to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(TickTimer::new(config.tick_interval))
        .insert_resource(GameRng(rng))
        .insert_resource(game_state)
        .insert_resource(config)
        .add_message::<GameEvent>()
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .add_systems(Startup, announce_start)
        .run();

    Ok(())
}

fn announce_start(config: Res<GameConfig>) {
    info!(
        "Starting snake on a {}x{} board ({} cells of {}px)",
        config.width,
        config.height,
        config.columns() * config.rows(),
        config.cell_size
    );
}

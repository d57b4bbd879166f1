//! Snake plugin - the snake body model, keyboard input, and the tick system
//! that drives the game loop.

use std::collections::VecDeque;

use bevy::{
    input::{ButtonState, keyboard::KeyboardInput},
    prelude::*,
};

use crate::game::{
    Direction, Drawable, GameConfig, GameEvent, GameRng, GameSet, GameState, Position,
    SNAKE_COLOR, ShapeKind, TickTimer,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (GameSet::Input, GameSet::Tick, GameSet::Present).chain(),
        )
        .add_systems(
            Update,
            (
                snake_direction_input.in_set(GameSet::Input),
                advance_game.in_set(GameSet::Tick),
            ),
        );
    }
}

/// Ordered body segments, head first and tail last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// A snake of `body_parts` segments all stacked on the board origin.
    pub fn new(body_parts: usize) -> Self {
        Snake {
            segments: std::iter::repeat_n(Position::default(), body_parts).collect(),
        }
    }

    /// Prepends a new head one cell away from the current head. The tail is
    /// left alone; callers trim it with [`Snake::remove_tail`] unless the
    /// snake is growing.
    pub fn move_towards(&mut self, direction: Direction, cell_size: i32) -> Position {
        let head = self.head().step(direction, cell_size);
        self.segments.push_front(head);
        head
    }

    pub fn remove_tail(&mut self) -> Option<Position> {
        self.segments.pop_back()
    }

    pub fn head(&self) -> Position {
        self.segments.front().copied().unwrap_or_default()
    }

    /// Every segment except the head.
    pub fn body(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter().skip(1)
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Position> for Snake {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Snake {
            segments: iter.into_iter().collect(),
        }
    }
}

/// How a single snake segment is drawn.
pub fn segment_drawable(position: Position) -> Drawable {
    Drawable {
        position,
        shape: ShapeKind::Square,
        color: SNAKE_COLOR,
    }
}

/// System to turn arrow key presses into direction changes, in the order
/// they were pressed.
fn snake_direction_input(
    mut keyboard_events: MessageReader<KeyboardInput>,
    mut game_state: ResMut<GameState>,
) {
    for direction in keyboard_events
        .read()
        .filter(|event| event.state == ButtonState::Pressed)
        .filter_map(|event| Direction::from_key(event.key_code))
    {
        if game_state.change_direction(direction) {
            debug!("Heading {:?}", game_state.direction());
        }
    }
}

/// System to run one game step for every tick that elapsed this frame.
fn advance_game(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut timer: ResMut<TickTimer>,
    mut rng: ResMut<GameRng>,
    mut game_state: ResMut<GameState>,
    mut events: MessageWriter<GameEvent>,
) {
    if timer.is_cancelled() {
        return;
    }

    for _ in 0..timer.advance(time.delta()) {
        events.write_batch(game_state.step(&config, &mut rng.0));

        if !game_state.is_running() {
            info!(
                "Game Over! Final score: {}, snake length {}",
                game_state.score(),
                game_state.snake().len()
            );
            timer.cancel();
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::game::{FoodShape, GameOverText, SegmentShape};
    use crate::rendering::RenderingPlugin;
    use crate::ui::spawn_game_over_text;
    use bevy::input::keyboard::Key;
    use bevy::time::TimeUpdateStrategy;
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    /// A headless app running the game systems, with every frame advancing
    /// time by `frame`.
    fn game_app(game_state: GameState, frame: Duration, tick_interval: Duration) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .insert_resource(GameConfig::default())
            .insert_resource(TickTimer::new(tick_interval))
            .insert_resource(GameRng(StdRng::seed_from_u64(3)))
            .insert_resource(game_state)
            .add_message::<GameEvent>()
            .add_message::<KeyboardInput>()
            .add_plugins((SnakePlugin, RenderingPlugin))
            .add_systems(Update, spawn_game_over_text.in_set(GameSet::Present));
        app
    }

    fn count<T: Component>(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<(), With<T>>().iter(world).count()
    }

    fn snake_at(cells: &[(i32, i32)]) -> Snake {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    fn press(app: &mut App, key_code: KeyCode, logical_key: Key) {
        app.world_mut().write_message(KeyboardInput {
            key_code,
            logical_key,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
    }

    #[test]
    fn hitting_the_wall_ends_the_game_and_clears_the_board() {
        let game_state = GameState::from_parts(
            snake_at(&[(950, 0), (900, 0), (850, 0), (800, 0)]),
            Food::at(Position::new(500, 500)),
            Direction::Right,
        );
        // Several ticks fall due in a single frame.
        let mut app = game_app(
            game_state,
            Duration::from_millis(200),
            Duration::from_millis(70),
        );

        for _ in 0..5 {
            if app.world().resource::<TickTimer>().is_cancelled() {
                break;
            }
            app.update();
        }

        let state = app.world().resource::<GameState>();
        assert!(!state.is_running());
        assert_eq!(state.snake().head(), Position::new(1000, 0));
        assert_eq!(state.snake().len(), 4);
        assert!(app.world().resource::<TickTimer>().is_cancelled());
        assert_eq!(count::<SegmentShape>(&mut app), 0);
        assert_eq!(count::<FoodShape>(&mut app), 0);
        assert_eq!(count::<GameOverText>(&mut app), 1);

        app.update();
        assert_eq!(count::<GameOverText>(&mut app), 1);
        assert_eq!(
            app.world().resource::<GameState>().snake().head(),
            Position::new(1000, 0)
        );
    }

    #[test]
    fn key_presses_apply_in_the_order_they_arrive() {
        let game_state = GameState::from_parts(
            snake_at(&[(500, 300), (500, 250)]),
            Food::at(Position::new(0, 0)),
            Direction::Down,
        );
        let mut app = game_app(game_state, Duration::ZERO, Duration::from_secs(3600));

        // Left is allowed while heading down, and Up is allowed once heading left.
        press(&mut app, KeyCode::ArrowLeft, Key::ArrowLeft);
        press(&mut app, KeyCode::ArrowUp, Key::ArrowUp);
        app.update();

        assert_eq!(
            app.world().resource::<GameState>().direction(),
            Direction::Up
        );
    }

    #[test]
    fn reversal_key_is_ignored() {
        let game_state = GameState::from_parts(
            snake_at(&[(500, 300), (500, 250)]),
            Food::at(Position::new(0, 0)),
            Direction::Down,
        );
        let mut app = game_app(game_state, Duration::ZERO, Duration::from_secs(3600));

        press(&mut app, KeyCode::ArrowUp, Key::ArrowUp);
        app.update();

        assert_eq!(
            app.world().resource::<GameState>().direction(),
            Direction::Down
        );
    }

    #[test]
    fn new_snake_is_stacked_on_the_origin() {
        let snake = Snake::new(4);
        assert_eq!(snake.len(), 4);
        assert!(snake.segments().all(|p| *p == Position::new(0, 0)));
    }

    #[test]
    fn move_then_trim_keeps_length_and_advances_head() {
        let mut snake = Snake::new(4);
        snake.move_towards(Direction::Right, 50);
        snake.move_towards(Direction::Down, 50);
        let before = snake.head();
        let length = snake.len();

        snake.move_towards(Direction::Down, 50);
        snake.remove_tail();

        assert_eq!(snake.len(), length);
        assert_eq!(snake.head(), Position::new(before.x, before.y + 50));
    }

    #[test]
    fn move_without_trim_grows_by_one() {
        let mut snake = Snake::new(4);
        let head = snake.move_towards(Direction::Down, 50);
        assert_eq!(head, Position::new(0, 50));
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), head);
    }

    #[test]
    fn body_excludes_the_head() {
        let mut snake = Snake::new(2);
        snake.move_towards(Direction::Right, 50);
        let body: Vec<Position> = snake.body().copied().collect();
        assert_eq!(body, vec![Position::new(0, 0), Position::new(0, 0)]);
    }

    #[test]
    fn remove_tail_returns_the_rearmost_segment() {
        let mut snake = Snake::new(1);
        snake.move_towards(Direction::Right, 50);
        assert_eq!(snake.remove_tail(), Some(Position::new(0, 0)));
        assert_eq!(snake.remove_tail(), Some(Position::new(50, 0)));
        assert_eq!(snake.remove_tail(), None);
        assert!(snake.is_empty());
    }

    #[test]
    fn segment_drawable_is_a_green_square() {
        let drawable = segment_drawable(Position::new(50, 100));
        assert_eq!(drawable.shape, ShapeKind::Square);
        assert_eq!(drawable.position, Position::new(50, 100));
        assert_eq!(drawable.color, SNAKE_COLOR);
    }
}

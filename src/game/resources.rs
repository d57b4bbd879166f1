//! Game resources (singleton state): the controller, its tick scheduler and
//! the random source used for food placement.

use bevy::prelude::*;
use rand::{Rng, rngs::StdRng};
use std::time::Duration;

use super::{Direction, GameConfig, GameEvent};
use crate::food::Food;
use crate::snake::Snake;

/// Game phase enum to track which state the game is in. `GameOver` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// Main game state resource. Owns the snake, the food, the current
/// direction and the score; [`GameState::step`] is the only thing that
/// advances it.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Food,
    direction: Direction,
    score: u32,
    phase: GamePhase,
}

impl GameState {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        GameState {
            snake: Snake::new(config.initial_body_parts),
            food: Food::random(rng, config),
            direction: Direction::Down,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    #[cfg(test)]
    pub fn from_parts(snake: Snake, food: Food, direction: Direction) -> Self {
        GameState {
            snake,
            food,
            direction,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    /// Events that draw the board as it is right now: every segment from
    /// tail to head, then the food.
    pub fn initial_events(&self) -> Vec<GameEvent> {
        self.snake
            .segments()
            .rev()
            .map(|position| GameEvent::SegmentAdded(*position))
            .chain(std::iter::once(GameEvent::FoodSpawned(self.food.position())))
            .collect()
    }

    /// Adopts `direction` for the next step unless it would reverse the
    /// snake onto itself. Returns whether the change was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            debug!(
                "Ignoring reversal from {:?} to {:?}",
                self.direction, direction
            );
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advances the game by one tick and returns what changed.
    pub fn step(&mut self, config: &GameConfig, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.phase == GamePhase::GameOver {
            return Vec::new();
        }

        debug_assert!(!self.snake.is_empty(), "stepping a snake with no segments");
        let mut events = Vec::new();

        let head = self.snake.move_towards(self.direction, config.cell_size);
        events.push(GameEvent::SegmentAdded(head));

        if head == self.food.position() {
            self.score += 1;
            events.push(GameEvent::FoodEaten(self.food.position()));
            events.push(GameEvent::ScoreChanged(self.score));

            self.food = Food::random(rng, config);
            events.push(GameEvent::FoodSpawned(self.food.position()));
            debug!(
                "Food eaten at {:?}, score {}, snake length {}",
                head,
                self.score,
                self.snake.len()
            );
        } else {
            let tail = self.snake.remove_tail();
            debug_assert!(tail.is_some(), "trimmed the tail of an empty snake");
            match tail {
                Some(tail) => events.push(GameEvent::TailRemoved(tail)),
                None => warn!("Trimmed the tail of an empty snake"),
            }
        }

        if self.check_collision(config) {
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        }

        events
    }

    /// True when the head left the board or ran into the body.
    pub fn check_collision(&self, config: &GameConfig) -> bool {
        let head = self.snake.head();
        let outside = head.x < 0 || head.x >= config.width || head.y < 0 || head.y >= config.height;
        outside || self.snake.body().any(|segment| *segment == head)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }
}

/// Repeating timer that paces the game loop. Cancelling it stops the loop;
/// there is no way to resume.
#[derive(Resource, Debug)]
pub struct TickTimer {
    timer: Timer,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        TickTimer {
            timer: Timer::new(interval, TimerMode::Repeating),
        }
    }

    /// Feeds elapsed frame time into the timer and returns how many ticks
    /// are due.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.timer.is_paused() {
            return 0;
        }
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }

    pub fn cancel(&mut self) {
        self.timer.pause();
    }

    pub fn is_cancelled(&self) -> bool {
        self.timer.is_paused()
    }
}

/// Random source for food placement.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

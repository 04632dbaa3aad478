use std::time::Duration;

use super::events::{Feedback, GameEvents, GameOverSummary, InputSource};
use super::food::{Food, random_cell};
use super::policy::MovementPolicy;
use super::settings::ArenaSettings;
use super::snake::Snake;
use super::tick_driver::interval_for_speed;
use super::types::{BoardSize, DeathReason, Direction, GameStatus, PlayerSlot};
use crate::games::GameRng;
use crate::{log, log_verbose};

pub struct SnakeGameState {
    settings: ArenaSettings,
    player_one: Snake,
    player_two: Option<Snake>,
    ai_snake: Option<Snake>,
    food: Food,
    next_food_serial: u64,
    speed: f32,
    status: GameStatus,
    ticks: u64,
}

impl SnakeGameState {
    /// Player snakes follow keyboard input only.
    pub fn new(settings: ArenaSettings, rng: &mut GameRng) -> Self {
        Self::with_player_policy(settings, MovementPolicy::Manual, rng)
    }

    /// Same as [`SnakeGameState::new`], but every player snake gets a clone
    /// of `player_policy`.
    pub fn with_player_policy(
        settings: ArenaSettings,
        player_policy: MovementPolicy,
        rng: &mut GameRng,
    ) -> Self {
        let player_one = Snake::new(
            PlayerSlot::One,
            settings.player_one_start(),
            Direction::Right,
            player_policy.clone(),
        );
        let player_two = settings.two_player.then(|| {
            Snake::new(
                PlayerSlot::Two,
                settings.player_two_start(),
                Direction::Left,
                player_policy,
            )
        });
        let food = Food::spawn(&settings.board, 0, rng);

        log!(
            "New {} game on a {}x{} board (seed {})",
            if settings.two_player { "two-player" } else { "single-player" },
            settings.board.width,
            settings.board.height,
            rng.seed()
        );

        Self {
            speed: settings.initial_speed,
            settings,
            player_one,
            player_two,
            ai_snake: None,
            food,
            next_food_serial: 1,
            status: GameStatus::Running,
            ticks: 0,
        }
    }

    pub fn board(&self) -> &BoardSize {
        &self.settings.board
    }

    pub fn player_one(&self) -> &Snake {
        &self.player_one
    }

    pub fn player_two(&self) -> Option<&Snake> {
        self.player_two.as_ref()
    }

    pub fn ai_snake(&self) -> Option<&Snake> {
        self.ai_snake.as_ref()
    }

    /// Every snake currently on the board, players first.
    pub fn snakes(&self) -> impl Iterator<Item = &Snake> {
        std::iter::once(&self.player_one)
            .chain(self.player_two.as_ref())
            .chain(self.ai_snake.as_ref())
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn tick_interval(&self) -> Duration {
        interval_for_speed(self.speed)
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffers a turn for a player snake. Ignored once the game is over,
    /// for the AI slot, and for a player 2 that is not playing.
    pub fn steer(&mut self, slot: PlayerSlot, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        match slot {
            PlayerSlot::One => self.player_one.change_direction(direction),
            PlayerSlot::Two => self
                .player_two
                .as_mut()
                .is_some_and(|snake| snake.change_direction(direction)),
            PlayerSlot::Ai => false,
        }
    }

    pub fn apply_input(&mut self, input: &mut impl InputSource) {
        for intent in input.drain_intents() {
            self.steer(intent.slot, intent.direction);
        }
    }

    pub fn update(&mut self, rng: &mut GameRng, events: &mut impl GameEvents) {
        if self.is_game_over() {
            return;
        }
        self.ticks += 1;
        let board = self.settings.board;

        self.player_one.advance(&self.food, &board, rng);
        if let Some(snake) = self.player_two.as_mut() {
            snake.advance(&self.food, &board, rng);
        }

        self.try_spawn_ai(rng, events);

        if let Some(snake) = self.ai_snake.as_mut() {
            snake.advance(&self.food, &board, rng);
        }

        if let Some((crashed, reason)) = self.find_collision() {
            self.finish(crashed, reason, events);
            return;
        }

        self.resolve_food(rng, events);

        log_verbose!(
            "tick {}: P1 head {} len {} | speed {:.2}",
            self.ticks,
            self.player_one.head(),
            self.player_one.len(),
            self.speed
        );
    }

    fn try_spawn_ai(&mut self, rng: &mut GameRng, events: &mut impl GameEvents) {
        if self.ai_snake.is_some() || self.player_one.score < self.settings.ai_spawn_score {
            return;
        }

        let start = random_cell(&self.settings.board, rng);
        self.ai_snake = Some(Snake::new(
            PlayerSlot::Ai,
            start,
            Direction::Left,
            MovementPolicy::greedy(self.settings.ai_reaction_delay),
        ));
        events.feedback(Feedback::AiSpawned);
        log!("AI snake spawned at {} on tick {}", start, self.ticks);
    }

    /// Player 1 is checked against player 2 and the AI; player 2 only
    /// against player 1. The AI itself never crashes.
    fn find_collision(&self) -> Option<(PlayerSlot, DeathReason)> {
        let board = &self.settings.board;

        if let Some(reason) = self.player_one.collision(board, self.player_two.as_ref()) {
            return Some((PlayerSlot::One, reason));
        }

        if let Some(snake) = &self.player_two
            && let Some(reason) = snake.collision(board, Some(&self.player_one))
        {
            return Some((PlayerSlot::Two, reason));
        }

        if let Some(ai) = &self.ai_snake
            && let Some(reason) = self.player_one.collision(board, Some(ai))
        {
            return Some((PlayerSlot::One, reason));
        }

        None
    }

    /// At most one snake eats per tick, in slot order.
    fn resolve_food(&mut self, rng: &mut GameRng, events: &mut impl GameEvents) {
        let food_pos = self.food.position();
        let Some(slot) = self
            .snakes()
            .find(|snake| snake.head() == food_pos)
            .map(|snake| snake.slot)
        else {
            return;
        };

        let Some(snake) = self.snake_mut(slot) else {
            return;
        };
        snake.grow();
        let score = snake.score;

        self.food = Food::spawn(&self.settings.board, self.next_food_serial, rng);
        self.next_food_serial += 1;
        events.feedback(Feedback::FoodConsumed { slot });

        if slot.is_human() {
            self.speed += self.settings.speed_increment;
            events.score_changed(PlayerSlot::One, self.player_one.score);
            if let Some(snake) = &self.player_two {
                events.score_changed(PlayerSlot::Two, snake.score);
            }
        }

        log!(
            "{} ate food at {} (score {}, speed {:.2})",
            slot,
            food_pos,
            score,
            self.speed
        );
    }

    fn finish(&mut self, crashed: PlayerSlot, reason: DeathReason, events: &mut impl GameEvents) {
        self.status = GameStatus::GameOver;

        let player_one_score = self.player_one.score;
        let player_two_score = self.player_two.as_ref().map(|snake| snake.score);
        let summary = GameOverSummary {
            player_one_score,
            player_two_score,
            outcome: GameOverSummary::decide(player_one_score, player_two_score),
            crashed,
            reason,
            ticks: self.ticks,
        };

        log!(
            "Game over on tick {}: {} {} at {}",
            self.ticks,
            crashed,
            reason,
            self.player_snake(crashed).head()
        );
        events.game_over(&summary);
    }

    fn snake_mut(&mut self, slot: PlayerSlot) -> Option<&mut Snake> {
        match slot {
            PlayerSlot::One => Some(&mut self.player_one),
            PlayerSlot::Two => self.player_two.as_mut(),
            PlayerSlot::Ai => self.ai_snake.as_mut(),
        }
    }

    fn player_snake(&self, slot: PlayerSlot) -> &Snake {
        match slot {
            PlayerSlot::Two => self.player_two.as_ref().unwrap_or(&self.player_one),
            _ => &self.player_one,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::policy::NEW_FOOD_DELAY_MAX;
use super::types::{BoardSize, CELL_SIZE, Point};
use crate::config::Validate;

const MIN_BOARD_WIDTH: i32 = 200;
const MIN_BOARD_HEIGHT: i32 = 100;
const MAX_BOARD_SIDE: i32 = 4000;
const START_INSET: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSettings {
    pub board: BoardSize,
    pub two_player: bool,
    /// Ticks per second at the start of a game.
    pub initial_speed: f32,
    /// Added to the speed whenever a player eats.
    pub speed_increment: f32,
    /// Player-1 score at which the AI snake enters.
    pub ai_spawn_score: u32,
    pub ai_reaction_delay: u32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            board: BoardSize::new(800, 600),
            two_player: false,
            initial_speed: 15.0,
            speed_increment: 0.25,
            ai_spawn_score: 10,
            ai_reaction_delay: NEW_FOOD_DELAY_MAX,
        }
    }
}

impl ArenaSettings {
    pub fn player_one_start(&self) -> Point {
        Point::new(START_INSET, self.start_row())
    }

    pub fn player_two_start(&self) -> Point {
        Point::new(self.board.width - START_INSET, self.start_row())
    }

    fn start_row(&self) -> i32 {
        (self.board.height / 2) / CELL_SIZE * CELL_SIZE
    }
}

impl Validate for ArenaSettings {
    fn validate(&self) -> Result<(), String> {
        let BoardSize { width, height } = self.board;
        if width % CELL_SIZE != 0 || height % CELL_SIZE != 0 {
            return Err(format!("board dimensions must be multiples of {}", CELL_SIZE));
        }
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_SIDE).contains(&width) {
            return Err(format!(
                "board width must be between {} and {}",
                MIN_BOARD_WIDTH, MAX_BOARD_SIDE
            ));
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_SIDE).contains(&height) {
            return Err(format!(
                "board height must be between {} and {}",
                MIN_BOARD_HEIGHT, MAX_BOARD_SIDE
            ));
        }
        if !self.initial_speed.is_finite()
            || self.initial_speed <= 0.0
            || self.initial_speed > 120.0
        {
            return Err("initial_speed must be greater than 0 and at most 120".to_string());
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err("speed_increment must not be negative".to_string());
        }
        if self.ai_reaction_delay > 600 {
            return Err("ai_reaction_delay must not exceed 600 ticks".to_string());
        }
        Ok(())
    }
}

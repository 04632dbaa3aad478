mod bot_controller;
mod events;
mod food;
mod game_state;
mod policy;
mod settings;
mod snake;
mod tick_driver;
mod types;

pub use bot_controller::BotController;
pub use events::{
    Feedback, FeedbackSink, GameEvents, GameOverSink, GameOverSummary, InputSource, Intent,
    Outcome, Renderer, ScoreSink, SilentEvents,
};
pub use food::Food;
pub use game_state::SnakeGameState;
pub use policy::{GreedyPolicy, MovementPolicy, NEW_FOOD_DELAY_MAX};
pub use settings::ArenaSettings;
pub use snake::Snake;
pub use tick_driver::{CancelHandle, TickDecision, TickDriver, interval_for_speed};
pub use types::{BoardSize, CELL_SIZE, DeathReason, Direction, PlayerSlot, Point};

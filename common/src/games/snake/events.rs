use super::game_state::SnakeGameState;
use super::types::{DeathReason, Direction, PlayerSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    FoodConsumed { slot: PlayerSlot },
    AiSpawned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Single-player game; there is nobody to beat.
    Solo,
    Winner(PlayerSlot),
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub player_one_score: u32,
    pub player_two_score: Option<u32>,
    pub outcome: Outcome,
    pub crashed: PlayerSlot,
    pub reason: DeathReason,
    pub ticks: u64,
}

impl GameOverSummary {
    pub fn decide(player_one_score: u32, player_two_score: Option<u32>) -> Outcome {
        match player_two_score {
            None => Outcome::Solo,
            Some(two) if player_one_score > two => Outcome::Winner(PlayerSlot::One),
            Some(two) if two > player_one_score => Outcome::Winner(PlayerSlot::Two),
            Some(_) => Outcome::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intent {
    pub slot: PlayerSlot,
    pub direction: Direction,
}

pub trait ScoreSink {
    fn score_changed(&mut self, slot: PlayerSlot, score: u32);
}

/// Fire-and-forget cues (sound effects, flashes, log lines).
pub trait FeedbackSink {
    fn feedback(&mut self, event: Feedback);
}

pub trait GameOverSink {
    fn game_over(&mut self, summary: &GameOverSummary);
}

/// Everything a tick may report back to the application shell.
pub trait GameEvents: ScoreSink + FeedbackSink + GameOverSink {}

impl<T: ScoreSink + FeedbackSink + GameOverSink> GameEvents for T {}

pub trait Renderer {
    fn render(&mut self, game: &SnakeGameState);
}

/// Directional intents collected between ticks.
pub trait InputSource {
    fn drain_intents(&mut self) -> Vec<Intent>;
}

/// Discards every event. Useful for simulations nobody watches.
pub struct SilentEvents;

impl ScoreSink for SilentEvents {
    fn score_changed(&mut self, _slot: PlayerSlot, _score: u32) {}
}

impl FeedbackSink for SilentEvents {
    fn feedback(&mut self, _event: Feedback) {}
}

impl GameOverSink for SilentEvents {
    fn game_over(&mut self, _summary: &GameOverSummary) {}
}

use std::collections::BTreeMap;

use chrono::Local;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_common::games::snake::{
    Feedback, FeedbackSink, GameOverSink, GameOverSummary, PlayerSlot, ScoreSink,
};

/// Collects what a tick reports so the UI can show it on the next frame.
pub struct UiEvents {
    scores: BTreeMap<PlayerSlot, u32>,
    feed: AllocRingBuffer<String>,
    summary: Option<GameOverSummary>,
}

impl UiEvents {
    pub fn new(feed_size: usize, two_player: bool) -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(PlayerSlot::One, 0);
        if two_player {
            scores.insert(PlayerSlot::Two, 0);
        }
        Self {
            scores,
            feed: AllocRingBuffer::new(feed_size),
            summary: None,
        }
    }

    pub fn scores(&self) -> impl Iterator<Item = (PlayerSlot, u32)> + '_ {
        self.scores.iter().map(|(slot, score)| (*slot, *score))
    }

    pub fn feed(&self) -> impl Iterator<Item = &String> {
        self.feed.iter()
    }

    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }

    fn push_line(&mut self, line: String) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.feed.enqueue(format!("[{}] {}", timestamp, line));
    }
}

impl ScoreSink for UiEvents {
    fn score_changed(&mut self, slot: PlayerSlot, score: u32) {
        self.scores.insert(slot, score);
    }
}

impl FeedbackSink for UiEvents {
    fn feedback(&mut self, event: Feedback) {
        let line = match event {
            Feedback::FoodConsumed { slot } => format!("🪙 {} ate", slot),
            Feedback::AiSpawned => "🐍 Hiss! The AI snake has entered".to_string(),
        };
        self.push_line(line);
    }
}

impl GameOverSink for UiEvents {
    fn game_over(&mut self, summary: &GameOverSummary) {
        self.push_line(format!("💀 {} {}", summary.crashed, summary.reason));
        self.summary = Some(summary.clone());
    }
}

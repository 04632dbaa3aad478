use std::time::Duration;

use snake_common::games::GameRng;
use snake_common::games::snake::{
    CELL_SIZE, Feedback, FeedbackSink, GameOverSink, GameOverSummary, MovementPolicy, PlayerSlot,
    Point, Renderer, ScoreSink, SnakeGameState, TickDecision, TickDriver,
};
use snake_common::{log, log_verbose};
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::ClientConfig;

/// Sinks that report to the log instead of a window.
#[derive(Default)]
struct LogEvents {
    summary: Option<GameOverSummary>,
}

impl ScoreSink for LogEvents {
    fn score_changed(&mut self, slot: PlayerSlot, score: u32) {
        log_verbose!("{} score: {}", slot, score);
    }
}

impl FeedbackSink for LogEvents {
    fn feedback(&mut self, event: Feedback) {
        match event {
            Feedback::FoodConsumed { slot } => log_verbose!("coin: {} ate", slot),
            Feedback::AiSpawned => log!("hiss: the AI snake has entered"),
        }
    }
}

impl GameOverSink for LogEvents {
    fn game_over(&mut self, summary: &GameOverSummary) {
        self.summary = Some(summary.clone());
    }
}

struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&mut self, game: &SnakeGameState) {
        log_verbose!(
            "tick {} | {}",
            game.ticks(),
            game.snakes()
                .map(|snake| {
                    format!(
                        "{} at {} len {} score {}",
                        snake.slot,
                        snake.head(),
                        snake.len(),
                        snake.score
                    )
                })
                .collect::<Vec<_>>()
                .join(" | ")
        );
    }
}

/// One character per cell: `1`/`2`/`A` for snakes (upper case for heads of
/// the players), `*` for food and `.` for empty cells.
pub fn board_picture(game: &SnakeGameState) -> String {
    let board = game.board();
    let mut picture = String::new();
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let cell = Point::new(column * CELL_SIZE, row * CELL_SIZE);
            let symbol = game
                .snakes()
                .find(|snake| snake.occupies(cell))
                .map(|snake| match (snake.slot, snake.head() == cell) {
                    (PlayerSlot::One, true) => 'P',
                    (PlayerSlot::One, false) => '1',
                    (PlayerSlot::Two, true) => 'Q',
                    (PlayerSlot::Two, false) => '2',
                    (PlayerSlot::Ai, _) => 'A',
                })
                .unwrap_or(if game.food().position() == cell { '*' } else { '.' });
            picture.push(symbol);
        }
        picture.push('\n');
    }
    picture
}

/// How a headless game ended. `summary` is `None` when the run was stopped
/// by `max_ticks` or Ctrl-C before anyone crashed.
#[derive(Debug)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub summary: Option<GameOverSummary>,
}

/// Runs one game with both players on autopilot until it ends, `max_ticks`
/// is reached or Ctrl-C is pressed.
pub async fn run(
    config: ClientConfig,
    seed: Option<u64>,
    max_ticks: Option<u64>,
) -> Result<HeadlessReport, String> {
    let mut rng = seed.map(GameRng::new).unwrap_or_else(GameRng::from_random);
    let mut game = SnakeGameState::with_player_policy(
        config.settings.clone(),
        MovementPolicy::greedy(0),
        &mut rng,
    );

    let mut events = LogEvents::default();
    let mut renderer = TextRenderer;
    let mut driver = TickDriver::new(Duration::ZERO);
    let cancel = driver.cancel_handle();
    let started = Instant::now();

    let mut frames = tokio::time::interval(Duration::from_millis(config.frame_interval_ms));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                if game.is_game_over() || max_ticks.is_some_and(|max| game.ticks() >= max) {
                    cancel.cancel();
                }
                match driver.poll(started.elapsed(), game.tick_interval()) {
                    TickDecision::Run => {
                        game.update(&mut rng, &mut events);
                        renderer.render(&game);
                    }
                    TickDecision::Skip => {}
                    TickDecision::Stopped => break,
                }
            }
            result = &mut ctrl_c, if !cancel.is_cancelled() => {
                result.map_err(|e| format!("Failed to listen for Ctrl-C: {}", e))?;
                log!("Interrupted after {} ticks", game.ticks());
                cancel.cancel();
            }
        }
    }

    let scores = game
        .snakes()
        .map(|snake| format!("{}: score {}, length {}", snake.slot, snake.score, snake.len()))
        .collect::<Vec<_>>()
        .join("\n");
    log!("Final board after {} ticks:\n{}{}", game.ticks(), board_picture(&game), scores);

    Ok(HeadlessReport {
        ticks: game.ticks(),
        summary: events.summary,
    })
}

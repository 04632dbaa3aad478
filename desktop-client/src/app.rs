use std::time::{Duration, Instant};

use eframe::egui;
use snake_common::games::GameRng;
use snake_common::games::snake::{
    Outcome, PlayerSlot, Renderer, SnakeGameState, TickDecision, TickDriver,
};

use crate::canvas::CanvasRenderer;
use crate::config::ClientConfig;
use crate::input::KeyboardInput;
use crate::sinks::UiEvents;

struct Session {
    game: SnakeGameState,
    rng: GameRng,
    driver: TickDriver,
    input: KeyboardInput,
    events: UiEvents,
    started: Instant,
}

impl Session {
    fn start(config: &ClientConfig, two_player: bool, seed: Option<u64>) -> Self {
        let mut settings = config.settings.clone();
        settings.two_player = two_player;
        let mut rng = seed.map(GameRng::new).unwrap_or_else(GameRng::from_random);
        let game = SnakeGameState::new(settings, &mut rng);
        Self {
            game,
            rng,
            driver: TickDriver::new(Duration::ZERO),
            input: KeyboardInput::new(two_player),
            events: UiEvents::new(config.event_feed_size, two_player),
            started: Instant::now(),
        }
    }

    fn step(&mut self, ctx: &egui::Context) {
        self.input.collect(ctx);
        self.game.apply_input(&mut self.input);

        match self.driver.poll(self.started.elapsed(), self.game.tick_interval()) {
            TickDecision::Run => self.game.update(&mut self.rng, &mut self.events),
            TickDecision::Skip | TickDecision::Stopped => {}
        }
    }
}

enum Screen {
    Menu,
    Playing(Box<Session>),
    GameOver(Box<Session>),
}

pub struct SnakeApp {
    config: ClientConfig,
    seed: Option<u64>,
    screen: Screen,
}

impl SnakeApp {
    /// `autostart` skips the menu and begins a game in the given mode.
    pub fn new(config: ClientConfig, seed: Option<u64>, autostart: Option<bool>) -> Self {
        let screen = match autostart {
            Some(two_player) => {
                Screen::Playing(Box::new(Session::start(&config, two_player, seed)))
            }
            None => Screen::Menu,
        };
        Self { config, seed, screen }
    }

    /// Returns the chosen mode once a button is clicked.
    fn render_menu(ui: &mut egui::Ui) -> Option<bool> {
        let mut chosen = None;
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("🐍 Snake Arena");
            ui.add_space(20.0);
            ui.label("Player 1: W A S D");
            ui.label("Player 2: arrow keys");
            ui.add_space(20.0);
            if ui.button("1 Player").clicked() {
                chosen = Some(false);
            }
            if ui.button("2 Players").clicked() {
                chosen = Some(true);
            }
        });
        chosen
    }

    fn render_feed(ui: &mut egui::Ui, session: &Session) {
        ui.heading("Events");
        ui.separator();
        for line in session.events.feed() {
            ui.label(line);
        }
    }

    fn render_scores(ui: &mut egui::Ui, session: &Session) {
        ui.horizontal(|ui| {
            for (slot, score) in session.events.scores() {
                ui.label(format!("{}: {}", slot, score));
                ui.separator();
            }
            ui.label(format!("Speed: {:.2}", session.game.speed()));
        });
    }

    fn render_board(ui: &mut egui::Ui, session: &Session) {
        let board = session.game.board();
        let available = ui.available_size();
        let scale = (available.x / board.width as f32)
            .min(available.y / board.height as f32)
            .clamp(0.25, 1.0);
        let (response, painter) = ui.allocate_painter(
            egui::vec2(board.width as f32 * scale, board.height as f32 * scale),
            egui::Sense::hover(),
        );
        CanvasRenderer::new(&painter, response.rect.min, scale).render(&session.game);
    }

    fn render_game_over(ui: &mut egui::Ui, session: &Session) -> bool {
        let mut play_again = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ui.ctx(), |ui| {
                if let Some(summary) = session.events.summary() {
                    ui.label(format!("{} {}", summary.crashed, summary.reason));
                    match summary.outcome {
                        Outcome::Solo => {
                            ui.label(format!("Score: {}", summary.player_one_score));
                        }
                        Outcome::Winner(slot) => {
                            ui.label(format!("🏆 {} wins!", slot));
                        }
                        Outcome::Draw => {
                            ui.label("It's a draw!");
                        }
                    }
                    if let Some(two) = summary.player_two_score {
                        ui.label(format!(
                            "{}: {}   {}: {}",
                            PlayerSlot::One,
                            summary.player_one_score,
                            PlayerSlot::Two,
                            two
                        ));
                    }
                    ui.label(format!("Survived {} ticks", summary.ticks));
                }
                ui.add_space(10.0);
                play_again = ui.button("Play again").clicked();
            });
        play_again
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let finished = match &mut self.screen {
            Screen::Playing(session) => {
                session.step(ctx);
                session.game.is_game_over()
            }
            _ => false,
        };
        if finished
            && let Screen::Playing(session) = std::mem::replace(&mut self.screen, Screen::Menu)
        {
            self.screen = Screen::GameOver(session);
        }

        let mut back_to_menu = false;
        let mut chosen_mode = None;
        if let Screen::Playing(session) | Screen::GameOver(session) = &self.screen {
            egui::TopBottomPanel::top("scores").show(ctx, |ui| {
                Self::render_scores(ui, session);
            });
            egui::SidePanel::right("events")
                .min_width(220.0)
                .show(ctx, |ui| Self::render_feed(ui, session));
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.screen {
            Screen::Menu => chosen_mode = Self::render_menu(ui),
            Screen::Playing(session) => Self::render_board(ui, session),
            Screen::GameOver(session) => {
                Self::render_board(ui, session);
                back_to_menu = Self::render_game_over(ui, session);
            }
        });

        if let Some(two_player) = chosen_mode {
            let session = Session::start(&self.config, two_player, self.seed);
            self.screen = Screen::Playing(Box::new(session));
        } else if back_to_menu {
            self.screen = Screen::Menu;
        }

        if matches!(self.screen, Screen::Playing(_)) {
            ctx.request_repaint();
        }
    }
}

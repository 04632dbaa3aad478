use eframe::egui;
use snake_common::games::snake::{Direction, InputSource, Intent, PlayerSlot};

const KEY_BINDINGS: [(egui::Key, PlayerSlot, Direction); 8] = [
    (egui::Key::W, PlayerSlot::One, Direction::Up),
    (egui::Key::S, PlayerSlot::One, Direction::Down),
    (egui::Key::A, PlayerSlot::One, Direction::Left),
    (egui::Key::D, PlayerSlot::One, Direction::Right),
    (egui::Key::ArrowUp, PlayerSlot::Two, Direction::Up),
    (egui::Key::ArrowDown, PlayerSlot::Two, Direction::Down),
    (egui::Key::ArrowLeft, PlayerSlot::Two, Direction::Left),
    (egui::Key::ArrowRight, PlayerSlot::Two, Direction::Right),
];

/// WASD steers player 1, the arrow keys player 2 (two-player games only).
pub struct KeyboardInput {
    two_player: bool,
    intents: Vec<Intent>,
}

impl KeyboardInput {
    pub fn new(two_player: bool) -> Self {
        Self {
            two_player,
            intents: Vec::new(),
        }
    }

    pub fn collect(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            for (key, slot, direction) in KEY_BINDINGS {
                if slot == PlayerSlot::Two && !self.two_player {
                    continue;
                }
                if i.key_pressed(key) {
                    self.intents.push(Intent { slot, direction });
                }
            }
        });
    }
}

impl InputSource for KeyboardInput {
    fn drain_intents(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }
}

use super::types::{BoardSize, CELL_SIZE, Point};
use crate::games::GameRng;

/// A single food item. Never mutated: eating it means replacing it with a
/// freshly spawned one, which gets a new `serial`.
#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    serial: u64,
    position: Point,
    hue: f32,
}

impl Food {
    pub fn spawn(board: &BoardSize, serial: u64, rng: &mut GameRng) -> Self {
        let position = random_cell(board, rng);
        let hue = rng.unit() * 360.0;
        Self { serial, position, hue }
    }

    pub fn at(position: Point, serial: u64, hue: f32) -> Self {
        Self { serial, position, hue }
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Display hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.hue
    }
}

/// Uniformly random cell-aligned point inside the board.
pub fn random_cell(board: &BoardSize, rng: &mut GameRng) -> Point {
    let column = rng.random_range(0..board.columns().max(1));
    let row = rng.random_range(0..board.rows().max(1));
    Point::new(column * CELL_SIZE, row * CELL_SIZE)
}

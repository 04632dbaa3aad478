use std::collections::VecDeque;

use super::types::{BoardSize, Direction, Point};
use crate::games::GameRng;

pub struct BotController;

impl BotController {
    /// Safe move closest to `target` by Manhattan distance. Ties keep the
    /// earlier direction in `Direction::ALL`.
    pub fn best_move(
        head: Point,
        body: &VecDeque<Point>,
        target: Point,
        board: &BoardSize,
    ) -> Option<Direction> {
        let mut best_dir = None;
        let mut best_distance = i32::MAX;

        for dir in Self::safe_directions(head, body, board) {
            let distance = head.step(dir).manhattan_distance(target);
            if distance < best_distance {
                best_distance = distance;
                best_dir = Some(dir);
            }
        }

        best_dir
    }

    pub fn random_safe_direction(
        head: Point,
        body: &VecDeque<Point>,
        board: &BoardSize,
        rng: &mut GameRng,
    ) -> Option<Direction> {
        let safe = Self::safe_directions(head, body, board);
        rng.pick(&safe).copied()
    }

    pub fn safe_directions(
        head: Point,
        body: &VecDeque<Point>,
        board: &BoardSize,
    ) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| Self::is_safe_position(head.step(dir), body, board))
            .collect()
    }

    /// Only the bot's own body counts as an obstacle; other snakes are
    /// invisible to it.
    pub fn is_safe_position(pos: Point, body: &VecDeque<Point>, board: &BoardSize) -> bool {
        board.contains(pos) && !body.contains(&pos)
    }
}

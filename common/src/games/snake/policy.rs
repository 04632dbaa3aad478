use std::collections::VecDeque;

use super::bot_controller::BotController;
use super::food::Food;
use super::types::{BoardSize, Direction, Point};
use crate::games::GameRng;

/// Reaction delay of the AI snake, in ticks.
pub const NEW_FOOD_DELAY_MAX: u32 = 30;

/// How a snake picks its next direction.
#[derive(Clone, Debug, PartialEq)]
pub enum MovementPolicy {
    /// Direction comes only from external input.
    Manual,
    Greedy(GreedyPolicy),
}

impl MovementPolicy {
    pub fn greedy(reaction_delay: u32) -> Self {
        MovementPolicy::Greedy(GreedyPolicy::new(reaction_delay))
    }

    pub fn plan(
        &mut self,
        body: &VecDeque<Point>,
        food: &Food,
        board: &BoardSize,
        rng: &mut GameRng,
    ) -> Option<Direction> {
        match self {
            MovementPolicy::Manual => None,
            MovementPolicy::Greedy(greedy) => greedy.plan(body, food, board, rng),
        }
    }
}

/// Walks towards the food, but only after `reaction_delay` ticks have
/// passed since the food last changed.
#[derive(Clone, Debug, PartialEq)]
pub struct GreedyPolicy {
    reaction_delay: u32,
    target_food: Option<u64>,
    delay_remaining: u32,
}

impl GreedyPolicy {
    pub fn new(reaction_delay: u32) -> Self {
        Self {
            reaction_delay,
            target_food: None,
            delay_remaining: 0,
        }
    }

    fn plan(
        &mut self,
        body: &VecDeque<Point>,
        food: &Food,
        board: &BoardSize,
        rng: &mut GameRng,
    ) -> Option<Direction> {
        if self.target_food != Some(food.serial()) {
            self.target_food = Some(food.serial());
            self.delay_remaining = self.reaction_delay;
        }

        if self.delay_remaining > 0 {
            self.delay_remaining -= 1;
            return None;
        }

        let head = *body.front()?;
        BotController::best_move(head, body, food.position(), board)
            .or_else(|| BotController::random_safe_direction(head, body, board, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(x: i32, y: i32) -> VecDeque<Point> {
        VecDeque::from(vec![Point::new(x, y)])
    }

    #[test]
    fn test_manual_never_plans() {
        let mut policy = MovementPolicy::Manual;
        let mut rng = GameRng::new(42);
        let food = Food::at(Point::new(0, 0), 1, 0.0);
        let board = BoardSize::new(800, 600);
        assert!(policy.plan(&single(100, 100), &food, &board, &mut rng).is_none());
        assert_eq!(policy, MovementPolicy::Manual);
    }

    #[test]
    fn test_greedy_waits_out_reaction_delay() {
        let mut policy = MovementPolicy::greedy(3);
        let mut rng = GameRng::new(42);
        let food = Food::at(Point::new(300, 100), 1, 0.0);
        let board = BoardSize::new(800, 600);
        let body = single(100, 100);

        for _ in 0..3 {
            assert!(policy.plan(&body, &food, &board, &mut rng).is_none());
        }
        assert_eq!(policy.plan(&body, &food, &board, &mut rng), Some(Direction::Right));
    }

    #[test]
    fn test_new_food_restarts_delay() {
        let mut policy = GreedyPolicy::new(2);
        let mut rng = GameRng::new(42);
        let board = BoardSize::new(800, 600);
        let body = single(100, 100);
        let first = Food::at(Point::new(300, 100), 1, 0.0);
        let second = Food::at(Point::new(300, 100), 2, 0.0);

        policy.plan(&body, &first, &board, &mut rng);
        policy.plan(&body, &first, &board, &mut rng);
        assert!(policy.plan(&body, &first, &board, &mut rng).is_some());

        // Same position, different instance: still counts as a change.
        assert!(policy.plan(&body, &second, &board, &mut rng).is_none());
        assert_eq!(policy.delay_remaining, 1);
    }

    #[test]
    fn test_zero_delay_plans_immediately() {
        let mut policy = MovementPolicy::greedy(0);
        let mut rng = GameRng::new(42);
        let food = Food::at(Point::new(100, 500), 1, 0.0);
        let board = BoardSize::new(800, 600);
        assert_eq!(
            policy.plan(&single(100, 100), &food, &board, &mut rng),
            Some(Direction::Down)
        );
    }
}

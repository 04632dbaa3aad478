use std::collections::VecDeque;

use super::food::Food;
use super::policy::MovementPolicy;
use super::types::{BoardSize, DeathReason, Direction, PlayerSlot, Point};
use crate::games::GameRng;

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub growth_pending: u32,
    pub score: u32,
    pub slot: PlayerSlot,
    pub policy: MovementPolicy,
}

impl Snake {
    pub fn new(
        slot: PlayerSlot,
        start_pos: Point,
        direction: Direction,
        policy: MovementPolicy,
    ) -> Self {
        Self {
            body: VecDeque::from(vec![start_pos]),
            direction,
            pending_direction: direction,
            growth_pending: 0,
            score: 0,
            slot,
            policy,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Commits the buffered direction and advances one cell. The tail is
    /// kept while growth is pending.
    pub fn move_forward(&mut self) {
        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.growth_pending > 0 {
            self.growth_pending -= 1;
        } else {
            self.body.pop_back();
        }
    }

    /// Buffers `direction` unless it reverses the current direction.
    /// Returns whether the request was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn grow(&mut self) {
        self.growth_pending += 1;
        self.score += 1;
    }

    /// Lets the movement policy steer, then moves.
    pub fn advance(&mut self, food: &Food, board: &BoardSize, rng: &mut GameRng) {
        if let Some(direction) = self.policy.plan(&self.body, food, board, rng) {
            self.change_direction(direction);
        }
        self.move_forward();
    }

    pub fn check_collision(&self, board: &BoardSize, other: Option<&Snake>) -> bool {
        self.collision(board, other).is_some()
    }

    pub fn collision(&self, board: &BoardSize, other: Option<&Snake>) -> Option<DeathReason> {
        let head = self.head();

        if !board.contains(head) {
            return Some(DeathReason::WallCollision);
        }

        if self.body.iter().skip(1).any(|segment| *segment == head) {
            return Some(DeathReason::SelfCollision);
        }

        if let Some(other) = other
            && other.occupies(head)
        {
            return Some(DeathReason::OtherSnakeCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual(x: i32, y: i32, direction: Direction) -> Snake {
        Snake::new(PlayerSlot::One, Point::new(x, y), direction, MovementPolicy::Manual)
    }

    fn board() -> BoardSize {
        BoardSize::new(800, 600)
    }

    #[test]
    fn test_move_right_from_start() {
        let mut snake = manual(100, 300, Direction::Right);
        snake.move_forward();
        assert_eq!(snake.head(), Point::new(110, 300));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_change_direction_rejects_only_reversal() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = manual(100, 100, current);
                let accepted = snake.change_direction(requested);
                assert_eq!(accepted, requested != current.opposite());
                if accepted {
                    assert_eq!(snake.pending_direction, requested);
                } else {
                    assert_eq!(snake.pending_direction, current);
                }
            }
        }
    }

    #[test]
    fn test_reversal_checked_against_current_not_buffered() {
        let mut snake = manual(100, 100, Direction::Right);
        assert!(snake.change_direction(Direction::Up));
        // Down is opposite of the buffered Up, but not of the current Right.
        assert!(snake.change_direction(Direction::Down));
        assert!(!snake.change_direction(Direction::Left));
        snake.move_forward();
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Point::new(100, 110));
    }

    #[test]
    fn test_grow_is_realised_on_next_move() {
        let mut snake = manual(100, 100, Direction::Right);
        snake.grow();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.score, 1);
        assert_eq!(snake.growth_pending, 1);

        snake.move_forward();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.growth_pending, 0);

        snake.move_forward();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_length_changes_only_with_pending_growth() {
        let mut snake = manual(100, 100, Direction::Down);
        snake.grow();
        snake.grow();
        let mut expected = snake.len();
        for _ in 0..5 {
            let had_growth = snake.growth_pending > 0;
            snake.move_forward();
            if had_growth {
                expected += 1;
            }
            assert_eq!(snake.len(), expected);
        }
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_wall_collision() {
        let mut snake = manual(0, 300, Direction::Left);
        assert!(!snake.check_collision(&board(), None));
        snake.move_forward();
        assert_eq!(snake.head(), Point::new(-10, 300));
        assert!(snake.check_collision(&board(), None));
        assert_eq!(snake.collision(&board(), None), Some(DeathReason::WallCollision));

        let edge = manual(800, 0, Direction::Right);
        assert!(edge.check_collision(&board(), None));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = manual(100, 100, Direction::Right);
        for _ in 0..4 {
            snake.grow();
        }
        for direction in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            snake.change_direction(direction);
            snake.move_forward();
        }
        assert_eq!(snake.head(), Point::new(100, 100));
        assert_eq!(snake.collision(&board(), None), Some(DeathReason::SelfCollision));
    }

    #[test]
    fn test_collision_with_other_body() {
        let snake = manual(200, 200, Direction::Right);
        let mut other = Snake::new(
            PlayerSlot::Two,
            Point::new(210, 200),
            Direction::Left,
            MovementPolicy::Manual,
        );
        other.body.push_back(Point::new(200, 200));
        assert_eq!(
            snake.collision(&board(), Some(&other)),
            Some(DeathReason::OtherSnakeCollision)
        );
        assert!(!snake.check_collision(&board(), None));
    }

    #[test]
    fn test_collision_is_pure() {
        let mut snake = manual(790, 100, Direction::Right);
        snake.move_forward();
        let before = snake.body.clone();
        let first = snake.check_collision(&board(), None);
        let second = snake.check_collision(&board(), None);
        assert_eq!(first, second);
        assert_eq!(snake.body, before);
    }

    #[test]
    fn test_advance_follows_policy() {
        let mut snake = Snake::new(
            PlayerSlot::Ai,
            Point::new(100, 100),
            Direction::Left,
            MovementPolicy::greedy(0),
        );
        let food = Food::at(Point::new(100, 300), 1, 0.0);
        let mut rng = GameRng::new(42);
        snake.advance(&food, &board(), &mut rng);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Point::new(100, 110));
    }

    #[test]
    fn test_advance_holds_direction_without_safe_move() {
        let mut snake = Snake::new(
            PlayerSlot::Ai,
            Point::new(-20, 50),
            Direction::Left,
            MovementPolicy::greedy(0),
        );
        let food = Food::at(Point::new(300, 50), 1, 0.0);
        let mut rng = GameRng::new(42);
        snake.advance(&food, &board(), &mut rng);
        assert_eq!(snake.direction, Direction::Left);
        assert_eq!(snake.head(), Point::new(-30, 50));
        assert_eq!(snake.len(), 1);
    }
}

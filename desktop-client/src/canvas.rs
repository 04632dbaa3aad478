use eframe::egui;
use snake_common::games::snake::{CELL_SIZE, Point, Renderer, SnakeGameState};

use crate::colors::{BACKGROUND, GRID_LINE, body_color, color_from_hue, head_color};

/// Paints the board into an egui painter, one board unit = `scale` points.
pub struct CanvasRenderer<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    scale: f32,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, scale: f32) -> Self {
        Self { painter, origin, scale }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + point.x as f32 * self.scale,
            self.origin.y + point.y as f32 * self.scale,
        )
    }

    fn cell_rect(&self, point: Point) -> egui::Rect {
        let side = CELL_SIZE as f32 * self.scale;
        egui::Rect::from_min_size(self.to_screen(point), egui::vec2(side, side))
    }

    fn draw_grid(&self, width: i32, height: i32) {
        let stroke = egui::Stroke::new(1.0, GRID_LINE);
        for x in (0..width).step_by(CELL_SIZE as usize) {
            self.painter.line_segment(
                [self.to_screen(Point::new(x, 0)), self.to_screen(Point::new(x, height))],
                stroke,
            );
        }
        for y in (0..height).step_by(CELL_SIZE as usize) {
            self.painter.line_segment(
                [self.to_screen(Point::new(0, y)), self.to_screen(Point::new(width, y))],
                stroke,
            );
        }
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, game: &SnakeGameState) {
        let board = game.board();
        let board_rect = egui::Rect::from_min_max(
            self.origin,
            self.to_screen(Point::new(board.width, board.height)),
        );
        self.painter.rect_filled(board_rect, 0.0, BACKGROUND);
        self.draw_grid(board.width, board.height);

        for snake in game.snakes() {
            for (i, segment) in snake.body.iter().enumerate() {
                let color = if i == 0 { head_color(snake.slot) } else { body_color(snake.slot) };
                self.painter.rect_filled(self.cell_rect(*segment), 0.0, color);
            }
        }

        let food = game.food();
        let half = CELL_SIZE as f32 * self.scale / 2.0;
        self.painter.circle_filled(
            self.cell_rect(food.position()).center(),
            half,
            color_from_hue(food.hue()),
        );
    }
}

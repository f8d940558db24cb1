use macroquad::prelude::{Rect, Vec2, vec2};

use crate::engine::Cell;

pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_EDGE: f32 = 20.0;
const BUTTON_GAP: f32 = 10.0;
// the board sits a little below center to leave room for the title
const BOARD_DROP: f32 = 20.0;
pub const WALL_THICKNESS: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Pause,
    Restart,
}

/// Screen geometry for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub screen: Vec2,
    pub board: Rect,
    pub cell_size: f32,
    pub pause_button: Rect,
    pub restart_button: Rect,
}

impl Layout {
    pub fn new(screen_w: f32, screen_h: f32, grid_w: i32, grid_h: i32, cell_size: f32) -> Self {
        let board_w = grid_w as f32 * cell_size;
        let board_h = grid_h as f32 * cell_size;
        let board = Rect::new(
            ((screen_w - board_w) / 2.0).floor(),
            ((screen_h - board_h) / 2.0).floor() + BOARD_DROP,
            board_w,
            board_h,
        );

        let button_x = screen_w - BUTTON_WIDTH - BUTTON_EDGE;
        let pause_button = Rect::new(button_x, BUTTON_EDGE, BUTTON_WIDTH, BUTTON_HEIGHT);
        let restart_button = Rect::new(
            button_x,
            BUTTON_EDGE + BUTTON_HEIGHT + BUTTON_GAP,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        Self { screen: vec2(screen_w, screen_h), board, cell_size, pause_button, restart_button }
    }

    /// Which button, if any, is under `point`. Edges count as inside.
    pub fn hit_test(&self, point: Vec2) -> Option<Button> {
        if contains_inclusive(self.pause_button, point) {
            Some(Button::Pause)
        } else if contains_inclusive(self.restart_button, point) {
            Some(Button::Restart)
        } else {
            None
        }
    }

    pub fn cell_origin(&self, cell: Cell) -> Vec2 {
        vec2(
            self.board.x + cell.x as f32 * self.cell_size,
            self.board.y + cell.y as f32 * self.cell_size,
        )
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.cell_origin(cell) + Vec2::splat(self.cell_size / 2.0)
    }
}

fn contains_inclusive(rect: Rect, p: Vec2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.w && p.y >= rect.y && p.y <= rect.y + rect.h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(800.0, 600.0, 30, 20, 20.0)
    }

    #[test]
    fn board_is_centered_and_dropped() {
        let l = layout();
        assert_eq!(l.board, Rect::new(100.0, 120.0, 600.0, 400.0));
        assert_eq!(l.cell_center(Cell::new(0, 0)), vec2(110.0, 130.0));
    }

    #[test]
    fn buttons_hit_on_edges() {
        let l = layout();
        assert_eq!(l.hit_test(vec2(660.0, 20.0)), Some(Button::Pause));
        assert_eq!(l.hit_test(vec2(780.0, 60.0)), Some(Button::Pause));
        assert_eq!(l.hit_test(vec2(700.0, 70.0)), Some(Button::Restart));
        assert_eq!(l.hit_test(vec2(700.0, 65.0)), None);
        assert_eq!(l.hit_test(vec2(659.0, 30.0)), None);
    }
}

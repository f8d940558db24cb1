use macroquad::prelude::*;

use crate::engine::{Direction, Phase, Snapshot};
use crate::input::Hover;
use crate::layout::{Button, Layout, WALL_THICKNESS};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

// Palette
const BG_COLOR: Color = rgb(10, 20, 30);
const GRID_COLOR: Color = rgb(40, 50, 70);
const SNAKE_COLOR: Color = rgb(50, 180, 100);
const HEAD_COLOR: Color = rgb(70, 220, 120);
const FOOD_COLOR: Color = rgb(220, 80, 60);
const WALL_COLOR: Color = rgb(70, 100, 150);
const TEXT_COLOR: Color = rgb(200, 220, 255);
const BUTTON_COLOR: Color = rgb(80, 120, 200);
const BUTTON_HOVER_COLOR: Color = rgb(100, 150, 230);
const BUTTON_BORDER: Color = rgb(100, 140, 220);
const GAME_OVER_COLOR: Color = rgb(220, 80, 80);
const PAUSED_COLOR: Color = rgb(80, 180, 220);
const TITLE_COLOR: Color = rgb(100, 200, 255);
const HINT_COLOR: Color = rgb(150, 180, 220);

fn draw_centered_text(text: &str, center_x: f32, y: f32, size: f32, color: Color) {
    let m = measure_text(text, None, size as u16, 1.0);
    draw_text(text, center_x - m.width / 2.0, y, size, color);
}

fn draw_button(rect: Rect, label: &str, hover: bool) {
    let fill = if hover { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BUTTON_BORDER);

    let m = measure_text(label, None, 20, 1.0);
    let x = rect.x + (rect.w - m.width) / 2.0;
    let y = rect.y + (rect.h + m.offset_y) / 2.0;
    draw_text(label, x, y, 20.0, TEXT_COLOR);
}

fn draw_board(snapshot: &Snapshot, layout: &Layout) {
    let b = layout.board;
    draw_rectangle(
        b.x - WALL_THICKNESS,
        b.y - WALL_THICKNESS,
        b.w + 2.0 * WALL_THICKNESS,
        b.h + 2.0 * WALL_THICKNESS,
        WALL_COLOR,
    );
    draw_rectangle(b.x, b.y, b.w, b.h, BG_COLOR);

    for x in 0..=snapshot.grid_width() {
        let px = b.x + x as f32 * layout.cell_size;
        draw_line(px, b.y, px, b.y + b.h, 1.0, GRID_COLOR);
    }
    for y in 0..=snapshot.grid_height() {
        let py = b.y + y as f32 * layout.cell_size;
        draw_line(b.x, py, b.x + b.w, py, 1.0, GRID_COLOR);
    }
}

fn draw_snake(snapshot: &Snapshot, layout: &Layout) {
    let radius = layout.cell_size / 2.0 - 2.0;

    let food = layout.cell_center(snapshot.food());
    draw_circle(food.x, food.y, radius, FOOD_COLOR);

    // A crashed head can sit one cell outside the board
    let head = layout.cell_center(snapshot.head());
    draw_circle(head.x, head.y, radius, HEAD_COLOR);

    let off = layout.cell_size / 4.0;
    let eye = head
        + match snapshot.direction() {
            Direction::Up => vec2(-off, -off),
            Direction::Down => vec2(-off, off),
            Direction::Left => vec2(-off, 0.0),
            Direction::Right => vec2(off, 0.0),
        };
    draw_circle(eye.x, eye.y, layout.cell_size / 8.0, WHITE);

    for segment in snapshot.body() {
        let c = layout.cell_center(*segment);
        draw_circle(c.x, c.y, radius, SNAKE_COLOR);
    }
}

fn draw_hud(snapshot: &Snapshot, layout: &Layout, hover: &Hover) {
    let (sw, sh) = (layout.screen.x, layout.screen.y);

    draw_text(&format!("Score: {}", snapshot.score()), 20.0, 44.0, 28.0, TEXT_COLOR);
    draw_text(&format!("Best: {}", snapshot.high_score()), 20.0, 84.0, 28.0, TEXT_COLOR);

    let pause_label = if snapshot.paused() { "Resume" } else { "Pause" };
    draw_button(layout.pause_button, pause_label, hover.is_over(Button::Pause));
    draw_button(layout.restart_button, "Restart", hover.is_over(Button::Restart));

    match snapshot.phase() {
        Phase::GameOver => {
            draw_centered_text("GAME OVER!", sw / 2.0, sh / 2.0 - 30.0, 48.0, GAME_OVER_COLOR);
            draw_centered_text("Press Space to play again", sw / 2.0, sh / 2.0 + 20.0, 24.0, TEXT_COLOR);
        }
        Phase::Paused => draw_centered_text("PAUSED", sw / 2.0, sh / 2.0, 48.0, PAUSED_COLOR),
        Phase::Playing => {}
    }

    draw_centered_text("SNAKE", sw / 2.0, 40.0, 36.0, TITLE_COLOR);
    draw_centered_text(
        "Arrows/WASD: move   Space: pause/resume   R: restart",
        sw / 2.0,
        sh - 14.0,
        16.0,
        HINT_COLOR,
    );
}

/// Draws one frame. Only reads the snapshot.
pub fn draw(snapshot: &Snapshot, layout: &Layout, hover: &Hover) {
    clear_background(BG_COLOR);
    draw_board(snapshot, layout);
    draw_snake(snapshot, layout);
    draw_hud(snapshot, layout, hover);
}

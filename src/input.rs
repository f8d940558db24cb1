use macroquad::prelude::{KeyCode, MouseButton, Vec2, is_key_pressed, is_mouse_button_pressed, mouse_position, vec2};

use crate::command::Command;
use crate::engine::{Direction, Phase};
use crate::layout::{Button, Layout};

const WATCHED_KEYS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::R,
];

pub fn command_for_key(key: KeyCode, phase: Phase) -> Option<Command> {
    let command = match key {
        KeyCode::Up | KeyCode::W => Command::MoveIntent(Direction::Up),
        KeyCode::Down | KeyCode::S => Command::MoveIntent(Direction::Down),
        KeyCode::Left | KeyCode::A => Command::MoveIntent(Direction::Left),
        KeyCode::Right | KeyCode::D => Command::MoveIntent(Direction::Right),
        // space doubles as "play again" once the game is over
        KeyCode::Space if phase == Phase::GameOver => Command::Restart,
        KeyCode::Space => Command::TogglePause,
        KeyCode::R => Command::Restart,
        _ => return None,
    };
    Some(command)
}

pub fn command_for_click(button: Button) -> Command {
    match button {
        Button::Pause => Command::TogglePause,
        Button::Restart => Command::Restart,
    }
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

/// Which button the pointer is resting on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hover {
    pub button: Option<Button>,
}

impl Hover {
    /// Returns true when the hovered button changed.
    pub fn update(&mut self, layout: &Layout, pointer: Vec2) -> bool {
        let now = layout.hit_test(pointer);
        let changed = now != self.button;
        self.button = now;
        changed
    }

    pub fn is_over(&self, button: Button) -> bool {
        self.button == Some(button)
    }
}

/// Collects this frame's commands from the keyboard and mouse.
pub fn poll(layout: &Layout, hover: &mut Hover, phase: Phase) -> Vec<Command> {
    let (mx, my) = mouse_position();
    let pointer = vec2(mx, my);
    hover.update(layout, pointer);

    let mut commands: Vec<Command> = WATCHED_KEYS
        .iter()
        .filter(|k| is_key_pressed(**k))
        .filter_map(|k| command_for_key(*k, phase))
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some(button) = layout.hit_test(pointer) {
            commands.push(command_for_click(button));
        }
    }
    commands
}

//! Grid snake: a tick-driven game engine plus the macroquad pieces that
//! drive and draw it.

pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod input;
pub mod layout;
pub mod render;

pub use command::{Command, dispatch};
pub use engine::{Cell, Direction, Engine, Phase, Rules, Snapshot, Tick};

use crate::engine::{Direction, Engine, Tick};

/// Everything the host can ask of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveIntent(Direction),
    TogglePause,
    Restart,
    Tick,
}

/// Applies one command. Only `Command::Tick` reports an outcome.
pub fn dispatch(engine: &mut Engine, command: Command) -> Option<Tick> {
    match command {
        Command::MoveIntent(direction) => engine.set_pending_direction(direction),
        Command::TogglePause => engine.toggle_pause(),
        Command::Restart => engine.reset(),
        Command::Tick => return Some(engine.advance()),
    }
    None
}

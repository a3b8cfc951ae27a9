//! Host input to widget commands
//!
//! Arrow keys change speed; holding the pointer on the pane pauses the ball and
//! releasing it resumes.

/// A widget control action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    /// Play if paused, pause if running
    Toggle,
    IncreaseSpeed,
    DecreaseSpeed,
    /// Run exactly one tick
    Step,
}

/// Map a DOM `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | "Up" => Some(Command::IncreaseSpeed),
        "ArrowDown" | "Down" => Some(Command::DecreaseSpeed),
        " " | "Spacebar" => Some(Command::Toggle),
        "." => Some(Command::Step),
        _ => None,
    }
}

/// Pointer press/release on the pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Pressed,
    Released,
}

pub fn command_for_pointer(action: PointerAction) -> Command {
    match action {
        PointerAction::Pressed => Command::Pause,
        PointerAction::Released => Command::Play,
    }
}

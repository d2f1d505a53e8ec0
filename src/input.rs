use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key identifier that toggles between running and paused.
pub const TOGGLE_KEY: &str = " ";

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step for this direction (y grows downward).
    #[must_use]
    pub fn velocity(self) -> Velocity {
        match self {
            Self::Up => Velocity { dx: 0, dy: -1 },
            Self::Down => Velocity { dx: 0, dy: 1 },
            Self::Left => Velocity { dx: -1, dy: 0 },
            Self::Right => Velocity { dx: 1, dy: 0 },
        }
    }

    /// Display name shown on the direction label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Maps an arrow key identifier to its direction.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "arrowup" => Some(Self::Up),
            "arrowdown" => Some(Self::Down),
            "arrowleft" => Some(Self::Left),
            "arrowright" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Per-tick head displacement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    /// The snake stands still until the first direction is applied.
    pub const ZERO: Self = Self { dx: 0, dy: 0 };
}

/// High-level input events consumed by the game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Toggle,
    Quit,
}

impl GameInput {
    /// Interprets a lowercased key identifier. Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(direction) = Direction::from_key(key) {
            return Some(Self::Direction(direction));
        }

        match key {
            TOGGLE_KEY => Some(Self::Toggle),
            "escape" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// One key press as delivered by the terminal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KeyPress {
    /// Lowercased key identifier, e.g. `arrowup`, `" "`, `a`.
    pub key: String,
    /// True for Ctrl+C, which always leaves the game.
    pub interrupt: bool,
}

/// Terminal events the game loop cares about.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TerminalEvent {
    Key(KeyPress),
    Resize,
}

/// Waits up to `timeout` for the next relevant terminal event.
pub fn poll_event(timeout: Duration) -> io::Result<Option<TerminalEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let event = match event::read()? {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            key_press(&key_event).map(TerminalEvent::Key)
        }
        Event::Resize(_, _) => Some(TerminalEvent::Resize),
        _ => None,
    };

    Ok(event)
}

/// Converts a crossterm key event into a lowercased key identifier.
#[must_use]
pub fn key_press(event: &KeyEvent) -> Option<KeyPress> {
    let key = key_identifier(event.code)?;
    let interrupt = event.modifiers.contains(KeyModifiers::CONTROL) && key == "c";

    Some(KeyPress { key, interrupt })
}

fn key_identifier(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "arrowup",
        KeyCode::Down => "arrowdown",
        KeyCode::Left => "arrowleft",
        KeyCode::Right => "arrowright",
        KeyCode::Char(c) => return Some(c.to_lowercase().collect()),
        KeyCode::F(n) => return Some(format!("f{n}")),
        KeyCode::Enter => "enter",
        KeyCode::Esc => "escape",
        KeyCode::Backspace => "backspace",
        KeyCode::Tab | KeyCode::BackTab => "tab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        _ => return None,
    };

    Some(name.to_owned())
}

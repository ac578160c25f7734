//! Translation of terminal key events into screen-independent inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A key press the state machine understands. Screens interpret these in
/// their own context (arrows steer the snake in play, move the cursor in
/// menus, cycle values in settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    Left,
    Right,
    Activate,
    Back,
    NextField,
    Char(char),
    Backspace,
}

/// Maps a key event, ignoring releases and keys without a meaning.
pub fn map_key(key: KeyEvent) -> Option<AppInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(AppInput::Up),
        KeyCode::Down => Some(AppInput::Down),
        KeyCode::Left => Some(AppInput::Left),
        KeyCode::Right => Some(AppInput::Right),
        KeyCode::Enter => Some(AppInput::Activate),
        KeyCode::Esc => Some(AppInput::Back),
        KeyCode::Tab => Some(AppInput::NextField),
        KeyCode::Backspace => Some(AppInput::Backspace),
        KeyCode::Char(c) => Some(AppInput::Char(c)),
        _ => None,
    }
}

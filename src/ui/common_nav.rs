use crossterm::event::{KeyCode, KeyEvent};

use crate::app::Transition;
use crate::state::Action;

/// Return a `Back` dispatch on Esc so every view gets "Back" for free.
pub fn esc_to_back(k: KeyEvent) -> Option<Transition> {
    if matches!(k.code, KeyCode::Esc) {
        Some(Transition::Dispatch(Action::Back))
    } else {
        None
    }
}

/// Up/Down/Tab focus cycling over `len` items. Returns the new index.
pub fn cycle_focus(k: KeyEvent, index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match k.code {
        KeyCode::Up | KeyCode::BackTab => if index == 0 { len - 1 } else { index - 1 },
        KeyCode::Down | KeyCode::Tab => (index + 1) % len,
        _ => index.min(len - 1),
    }
}

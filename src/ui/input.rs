// src/ui/input.rs
use super::{Action, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(mode: InputMode, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(Action::Open),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(Action::Back),
            KeyCode::Home | KeyCode::Char('~') => Some(Action::Home),
            KeyCode::Char(' ') => Some(Action::Select),
            KeyCode::Char('v') => Some(Action::AddToSelection),
            KeyCode::Esc => Some(Action::ClearSelection),
            KeyCode::Char('n') => Some(Action::CreateStart),
            KeyCode::Char('/') => Some(Action::FilterStart),
            _ => None,
        },
        InputMode::Prompt | InputMode::Filter => match key.code {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(ch) => Some(Action::Input(ch)),
            _ => None,
        },
    }
}

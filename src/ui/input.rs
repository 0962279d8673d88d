use crate::ui::app::App;
use crate::ui::selector::SelectorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    let expanded = app.selector().is_expanded();
    let intent = match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Esc if expanded => SelectorIntent::Close,
        KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => SelectorIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => SelectorIntent::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') if expanded => SelectorIntent::Confirm,
        KeyCode::Enter | KeyCode::Char(' ') => SelectorIntent::Open,
        KeyCode::Char(ch) if ch.is_ascii_digit() => match ch.to_digit(10) {
            Some(digit) if digit > 0 => SelectorIntent::Choose {
                index: digit as usize - 1,
            },
            _ => return,
        },
        _ => return,
    };

    app.on_selector_intent(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

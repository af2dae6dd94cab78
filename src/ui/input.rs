use crate::ui::app::App;
use crate::ui::entry::{EntryIntent, EntryMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Parse an amount typed into the increment/decrement form.
///
/// Accepts integers strictly greater than zero; anything else is `None`
/// and the submission is dropped without a message.
pub fn parse_amount(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|value| *value > 0)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.entry().is_visible() {
        match key.code {
            KeyCode::Enter => {
                app.submit_entry();
            }
            KeyCode::Esc => app.dispatch_entry(EntryIntent::Close),
            KeyCode::Backspace => app.dispatch_entry(EntryIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_entry(EntryIntent::Input { ch })
            }
            _ => {}
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('+') | KeyCode::Char('i') => app.open_entry(EntryMode::Increment),
        KeyCode::Char('-') | KeyCode::Char('d') => app.open_entry(EntryMode::Decrement),
        KeyCode::Char('a') => app.add_match(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('r') => app.reset_scores(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

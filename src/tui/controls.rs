//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, EditTarget, Mode};

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if matches!(app.mode, Mode::Editing { .. }) {
        match key.code {
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('w') => app.begin_edit(EditTarget::Watts(app.selected)),
        KeyCode::Char('h') => app.begin_edit(EditTarget::Hours(app.selected)),
        KeyCode::Char('u') => app.begin_edit(EditTarget::UnitCost),
        KeyCode::Char('d') => app.begin_edit(EditTarget::BillingDays),
        KeyCode::Char('c') | KeyCode::Enter => app.calculate(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

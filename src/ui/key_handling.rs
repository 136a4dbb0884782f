// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Focus, UI};

// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    let done = if ui.help_shown() {
        handle_help_key(ui, key_event)
    } else {
        handle_normal_key(ui, key_event)
    };
    ui.mark_dirty();
    done
}

pub fn handle_paste(ui: &mut UI, text: &str) {
    if !ui.help_shown() {
        ui.paste(text);
    }
    ui.mark_dirty();
}

fn is_quit(key_event: &KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

fn handle_normal_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    if is_quit(&key_event) {
        return true;
    }
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        // Predict from anywhere
        KeyCode::Char('r') if ctrl => ui.request_prediction(),
        KeyCode::F(5) => ui.request_prediction(),
        KeyCode::Char('l') if ctrl => ui.edit_focused(|editor| editor.clear()),
        KeyCode::F(1) => ui.show_help(),
        KeyCode::Tab => ui.focus_next(),
        KeyCode::BackTab => ui.focus_prev(),
        KeyCode::Esc => ui.app.clear_msg(),
        _ => match ui.focus() {
            Focus::PredictButton => handle_button_key(ui, key_event),
            Focus::ProteinA | Focus::ProteinB => handle_editor_key(ui, key_event),
        },
    }
    false
}

fn handle_button_key(ui: &mut UI, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter | KeyCode::Char(' ') => ui.request_prediction(),
        KeyCode::Up | KeyCode::Left => ui.focus_prev(),
        KeyCode::Down | KeyCode::Right => ui.focus_next(),
        _ => {}
    }
}

fn handle_editor_key(ui: &mut UI, key_event: KeyEvent) {
    let modified = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key_event.code {
        KeyCode::Char(c) if !modified => ui.type_char(c),
        KeyCode::Enter => ui.type_char('\n'),
        KeyCode::Backspace => ui.edit_focused(|editor| editor.backspace()),
        KeyCode::Delete => ui.edit_focused(|editor| editor.delete()),
        KeyCode::Left => ui.edit_focused(|editor| editor.move_left()),
        KeyCode::Right => ui.edit_focused(|editor| editor.move_right()),
        KeyCode::Home => ui.edit_focused(|editor| editor.move_home()),
        KeyCode::End => ui.edit_focused(|editor| editor.move_end()),
        _ => {}
    }
}

fn handle_help_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    if is_quit(&key_event) {
        return true;
    }
    match key_event.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => ui.hide_help(),
        KeyCode::Up | KeyCode::Char('k') => ui.help_scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => ui.help_scroll_by(1),
        KeyCode::PageUp => ui.help_scroll_by(-10),
        KeyCode::PageDown | KeyCode::Char(' ') => ui.help_scroll_by(10),
        _ => {}
    }
    false
}

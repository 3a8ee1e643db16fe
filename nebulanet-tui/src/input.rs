//! Keyboard input dispatch — overlays → global keys → page-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use nebulanet_core::{JumpOutcome, Route};

use crate::app::{AppState, Overlay};

/// Key bindings shown in the help overlay.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("q / Ctrl+C", "Quit"),
    ("1-4, Tab/Shift+Tab", "Switch page"),
    ("l / →", "Next image"),
    ("h / ←", "Previous image"),
    ("g / G", "First / last image"),
    (":", "Jump to image number"),
    ("j/k, ↓/↑", "Scroll text pages"),
    ("m", "Message history"),
    ("?", "Toggle help"),
];

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Jump => {
            handle_jump_overlay(app, key);
            return;
        }
        Overlay::Help | Overlay::History => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('m')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(route) = Route::from_index(c as usize - '1' as usize) {
                app.navigate(route);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.navigate(app.route.prev());
            } else {
                app.navigate(app.route.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.navigate(app.route.prev());
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('m') => {
            app.overlay = Overlay::History;
            return;
        }
        _ => {}
    }

    // 3. Page-specific keys.
    match app.route {
        Route::Home => handle_home_key(app, key),
        Route::About | Route::Sources | Route::Telescope => handle_page_key(app, key),
    }
}

fn handle_home_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => {
            app.gallery.advance();
            announce_current(app);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.gallery.retreat();
            announce_current(app);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            if let JumpOutcome::Moved { to, .. } = app.gallery.first() {
                app.announce_active(to);
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if let JumpOutcome::Moved { to, .. } = app.gallery.last() {
                app.announce_active(to);
            }
        }
        KeyCode::Char(':') => {
            if app.gallery.is_empty() {
                app.set_warning("Gallery is empty");
            } else {
                app.jump_input.clear();
                app.overlay = Overlay::Jump;
            }
        }
        _ => {}
    }
}

fn announce_current(app: &mut AppState) {
    if let Some(index) = app.gallery.active_index() {
        app.announce_active(index);
    }
}

fn handle_page_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.page_scroll = app.page_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.page_scroll = app.page_scroll.saturating_sub(1);
        }
        KeyCode::PageDown => {
            app.page_scroll = app.page_scroll.saturating_add(10);
        }
        KeyCode::PageUp => {
            app.page_scroll = app.page_scroll.saturating_sub(10);
        }
        _ => {}
    }
}

fn handle_jump_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.jump_input.clear();
        }
        KeyCode::Enter => app.submit_jump(),
        KeyCode::Backspace => {
            app.jump_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            app.jump_input.push(c);
        }
        _ => {}
    }
}

// event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::tui::app::{App, Mode, Panel, Popup};

pub enum Action {
    None,
    Quit,
    Submit(String),
}

pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // handle popups first
    match app.popup {
        Popup::Themes => return handle_theme_popup(app, key),
        Popup::Booking => return handle_booking_popup(app, key),
        Popup::Login => return handle_login_popup(app, key),
        Popup::None => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Insert => handle_insert_key(app, key),
    }
}

fn handle_theme_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_popup(),
        KeyCode::Char('j') | KeyCode::Down => app.theme_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_scroll_up(),
        KeyCode::Enter => app.select_theme(),
        _ => {}
    }
    Action::None
}

fn handle_booking_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_popup(),
        KeyCode::Char('+') | KeyCode::Char('k') | KeyCode::Up => app.booking_days_up(),
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => app.booking_days_down(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.booking_method_next(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.booking_method_prev(),
        KeyCode::Enter => app.confirm_booking(),
        _ => {}
    }
    Action::None
}

fn handle_login_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.login_submit(),
        KeyCode::Char(c) => app.login_insert_char(c),
        KeyCode::Backspace => app.login_delete_char(),
        _ => {}
    }
    Action::None
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        // quit
        KeyCode::Char('q') => return Action::Quit,

        // enter insert mode (jumps to the chat prompt)
        KeyCode::Char('i') => app.enter_insert(),
        KeyCode::Char('a') => {
            app.move_cursor_end();
            app.enter_insert();
        }

        // panel navigation
        KeyCode::Tab => app.next_panel(),
        KeyCode::BackTab => app.prev_panel(),
        KeyCode::Char('1') => app.panel = Panel::Chat,
        KeyCode::Char('2') => {
            app.panel = Panel::Hospitals;
            app.last_browse = Panel::Hospitals;
        }
        KeyCode::Char('3') => {
            app.panel = Panel::Doctors;
            app.last_browse = Panel::Doctors;
        }
        KeyCode::Char('4') => {
            app.panel = Panel::Services;
            app.last_browse = Panel::Services;
        }
        KeyCode::Char('5') => app.panel = Panel::Logs,

        // list movement / scrolling
        KeyCode::Char('j') | KeyCode::Down => app.selection_down(),
        KeyCode::Char('k') | KeyCode::Up => app.selection_up(),

        // hospital filters
        KeyCode::Char('e') if app.panel == Panel::Hospitals => app.toggle_emergency_only(),
        KeyCode::Char('s') if app.panel == Panel::Hospitals => app.cycle_specialty(),

        // actions
        KeyCode::Char('b') => app.open_booking(),
        KeyCode::Char('L') => app.open_login(),
        KeyCode::Char('t') => app.open_theme_popup(),

        _ => {}
    }
    Action::None
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => app.move_cursor_start(),
            KeyCode::Char('e') => app.move_cursor_end(),
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return Action::None;
    }

    match key.code {
        KeyCode::Esc => app.exit_insert(),
        KeyCode::Enter => {
            if let Some(query) = app.submit_prompt() {
                return Action::Submit(query);
            }
        }
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_start(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Up => app.history_prev(),
        KeyCode::Down => app.history_next(),
        _ => {}
    }
    Action::None
}

use crate::ui::app::{App, PopupKind, Screen};
use crate::ui::discovery::DiscoveryIntent;
use crate::ui::filter::FilterIntent;
use crate::ui::login::LoginIntent;
use crate::ui::sort::SortIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if let Some(kind) = app.popup_kind() {
        handle_popup_key(app, kind, key);
        return;
    }

    match app.screen() {
        Screen::Login => handle_login_key(app, key),
        Screen::Home => handle_home_key(app, key),
    }
}

fn handle_popup_key(app: &mut App, kind: PopupKind, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc) {
        app.close_popup();
        return;
    }

    match kind {
        PopupKind::Alert | PopupKind::Detail => {
            if matches!(key.code, KeyCode::Enter) {
                app.close_popup();
            }
        }
        PopupKind::Filter => {
            if is_ctrl_char(key, 'r') {
                app.dispatch_filter(FilterIntent::Reset);
                return;
            }
            match key.code {
                KeyCode::Up => app.dispatch_filter(FilterIntent::MoveUp),
                KeyCode::Down | KeyCode::Tab => app.dispatch_filter(FilterIntent::MoveDown),
                KeyCode::Right | KeyCode::Char(' ') => {
                    app.dispatch_filter(FilterIntent::Increase)
                }
                KeyCode::Left => app.dispatch_filter(FilterIntent::Decrease),
                KeyCode::Enter => app.apply_filter_dialog(),
                _ => {}
            }
        }
        PopupKind::Sort => match key.code {
            KeyCode::Up => app.dispatch_sort(SortIntent::MoveUp),
            KeyCode::Down | KeyCode::Tab => app.dispatch_sort(SortIntent::MoveDown),
            KeyCode::Enter => app.apply_sort_dialog(),
            _ => {}
        },
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'p') {
        app.dispatch_login(LoginIntent::TogglePasswordVisibility);
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::NextField)
        }
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_login(LoginIntent::InsertChar(ch)),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            match ch.to_ascii_lowercase() {
                'f' => app.open_filter_dialog(),
                's' => app.open_sort_dialog(),
                'n' => app.load_more(),
                'l' => app.logout(),
                'u' => app.dispatch_discovery(DiscoveryIntent::ClearSearch),
                _ => {}
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Left => app.dispatch_discovery(DiscoveryIntent::PrevCategory),
        KeyCode::Right => app.dispatch_discovery(DiscoveryIntent::NextCategory),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Backspace => app.dispatch_discovery(DiscoveryIntent::PopSearchChar),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_discovery(DiscoveryIntent::PushSearchChar(ch))
        }
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, FieldKind, InputMode, Overlay};
use crate::cursor::CursorBuffer;
use crate::dispatch::action_for_event;
use crate::registry::{KeyActionId, KeyContext};

/// The binding table that applies to the app's current state.
#[must_use]
pub fn key_context(app: &App) -> KeyContext {
    match app.modals.current() {
        Some(Overlay::ProjectForm(_)) => KeyContext::Form,
        Some(Overlay::Details(state)) if state.composing => KeyContext::Compose,
        Some(Overlay::Details(_)) => KeyContext::Details,
        Some(Overlay::Help { .. }) => KeyContext::Help,
        None => match app.input_mode {
            InputMode::Normal => KeyContext::Dashboard,
            InputMode::Search => KeyContext::Search,
        },
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key_context(app) {
        KeyContext::Dashboard => handle_normal_key(app, key),
        KeyContext::Search => handle_search_key(app, key),
        KeyContext::Form => handle_form_key(app, key),
        KeyContext::Details => handle_details_key(app, key),
        KeyContext::Compose => handle_compose_key(app, key),
        KeyContext::Help => handle_help_key(app, key),
    }
}

pub fn handle_normal_key(app: &mut App, key: KeyEvent) {
    let Some(action) = action_for_event(KeyContext::Dashboard, &key) else {
        return;
    };
    use KeyActionId::*;
    match action {
        MoveDown => app.move_down(),
        MoveUp => app.move_up(),
        JumpToFirst => app.jump_to_first(),
        JumpToLast => app.jump_to_last(),
        OpenDetails => app.open_selected_details(),
        NewProject => app.open_new_project_form(),
        EditProject => app.edit_selected_project(),
        StartSearch => app.enter_search(),
        NextStatusFilter => app.cycle_status_filter(true),
        PrevStatusFilter => app.cycle_status_filter(false),
        NextPriorityFilter => app.cycle_priority_filter(true),
        PrevPriorityFilter => app.cycle_priority_filter(false),
        ClearFilters => app.clear_filters(),
        ToggleHelp => app.toggle_help(),
        Quit => app.should_quit = true,
        ForceClose => app.force_close_overlays(),
        _ => {}
    }
}

pub fn handle_search_key(app: &mut App, key: KeyEvent) {
    match action_for_event(KeyContext::Search, &key) {
        Some(KeyActionId::ConfirmSearch) => app.confirm_search(),
        Some(KeyActionId::CancelSearch) => app.cancel_search(),
        _ => {
            if handle_text_input(&mut app.search_buffer, key) {
                app.update_search();
            }
        }
    }
}

pub fn handle_form_key(app: &mut App, key: KeyEvent) {
    if let Some(action) = action_for_event(KeyContext::Form, &key) {
        use KeyActionId::*;
        match action {
            SubmitForm => app.submit_form(),
            ClearForm => app.clear_form(),
            ForceClose => app.force_close_overlays(),
            NextField | PrevField | NextTab | PrevTab => {
                if let Some(state) = app.form_state_mut() {
                    match action {
                        NextField => state.form.focus_next(),
                        PrevField => state.form.focus_prev(),
                        NextTab => state.form.next_tab(),
                        _ => state.form.prev_tab(),
                    }
                }
            }
            _ => {}
        }
        return;
    }

    let Some(state) = app.form_state_mut() else {
        return;
    };
    if matches!(state.form.focused_field().kind(), FieldKind::Choice(_)) {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => state.form.cycle_choice(true),
            KeyCode::Left => state.form.cycle_choice(false),
            _ => {}
        }
        return;
    }
    if let Some(buffer) = state.form.focused_buffer_mut() {
        handle_text_input(buffer, key);
    }
}

pub fn handle_details_key(app: &mut App, key: KeyEvent) {
    let Some(action) = action_for_event(KeyContext::Details, &key) else {
        return;
    };
    use KeyActionId::*;
    match action {
        ScrollDown => app.scroll_details(true),
        ScrollUp => app.scroll_details(false),
        ComposeComment => app.start_comment(),
        EditProject => app.edit_from_details(),
        ForceClose => app.force_close_overlays(),
        _ => {}
    }
}

pub fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match action_for_event(KeyContext::Compose, &key) {
        Some(KeyActionId::SubmitComment) => app.submit_comment(),
        Some(KeyActionId::CancelComment) => app.stop_comment(),
        Some(KeyActionId::ForceClose) => app.force_close_overlays(),
        _ => {
            if let Some(state) = app.detail_state_mut() {
                handle_text_input(&mut state.comment, key);
            }
        }
    }
}

pub fn handle_help_key(app: &mut App, key: KeyEvent) {
    match action_for_event(KeyContext::Help, &key) {
        Some(KeyActionId::ScrollDown) => app.scroll_help(true),
        Some(KeyActionId::ScrollUp) => app.scroll_help(false),
        Some(KeyActionId::CloseHelp) => app.toggle_help(),
        Some(KeyActionId::ForceClose) => app.force_close_overlays(),
        _ => {}
    }
}

fn handle_text_input(buffer: &mut CursorBuffer, key: KeyEvent) -> bool {
    let KeyEvent {
        code, modifiers, ..
    } = key;

    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('a') => buffer.move_to_start(),
            KeyCode::Char('e') => buffer.move_to_end(),
            KeyCode::Char('w') => buffer.delete_word_before(),
            KeyCode::Char('u') => buffer.delete_to_start(),
            KeyCode::Char('k') => buffer.delete_to_end(),
            KeyCode::Left => buffer.move_word_left(),
            KeyCode::Right => buffer.move_word_right(),
            _ => return false,
        }
        return true;
    }

    if modifiers.contains(KeyModifiers::ALT) {
        match code {
            KeyCode::Char('b') => buffer.move_word_left(),
            KeyCode::Char('f') => buffer.move_word_right(),
            KeyCode::Backspace => buffer.delete_word_before(),
            _ => return false,
        }
        return true;
    }

    match code {
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_to_start(),
        KeyCode::End => buffer.move_to_end(),
        KeyCode::Delete => {
            buffer.delete_char_after();
        }
        KeyCode::Backspace => {
            buffer.delete_char_before();
        }
        KeyCode::Char(c) => buffer.insert_char(c),
        _ => return false,
    }
    true
}

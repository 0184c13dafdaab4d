// Key and mouse handling for the browse grid

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::ui::platform;
use crate::ui::state::{AppState, InputMode};

pub(super) fn handle_browse_key(key: KeyEvent, state: &mut AppState) {
    if state.browse.input_mode == InputMode::Editing {
        handle_search_key(key, state);
        return;
    }

    if state.browse.menu_open {
        handle_drawer_key(key, state);
        return;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') => {
            state.browse.input_mode = InputMode::Editing;
            state.browse.cursor_pos = state.browse.search_query.chars().count();
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            sync_drawer_selection(state);
            state.browse.toggle_menu();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.browse.reset_filters();
        }
        KeyCode::Tab => cycle_category(state, 1),
        KeyCode::BackTab => cycle_category(state, -1),
        KeyCode::Left => move_selection(state, -1),
        KeyCode::Right => move_selection(state, 1),
        KeyCode::Up => move_selection(state, -(state.browse.grid_columns as isize)),
        KeyCode::Down => move_selection(state, state.browse.grid_columns as isize),
        KeyCode::Enter | KeyCode::Char(' ') => expand_selected(state),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.browse.input_mode = InputMode::Normal;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.browse.clear_search();
        }
        KeyCode::Char(c) => {
            state.browse.insert_char(c);
            state.clamp_selection();
        }
        KeyCode::Backspace => {
            state.browse.delete_char_backwards();
            state.clamp_selection();
        }
        KeyCode::Left => {
            state.browse.cursor_pos = state.browse.cursor_pos.saturating_sub(1);
        }
        KeyCode::Right => {
            let len = state.browse.search_query.chars().count();
            state.browse.cursor_pos = (state.browse.cursor_pos + 1).min(len);
        }
        KeyCode::Home => state.browse.cursor_pos = 0,
        KeyCode::End => {
            state.browse.cursor_pos = state.browse.search_query.chars().count();
        }
        _ => {}
    }
}

fn handle_drawer_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
            state.browse.menu_open = false;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let current = state.browse.menu_list_state.selected().unwrap_or(0);
            state
                .browse
                .menu_list_state
                .select(Some(current.saturating_sub(1)));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let current = state.browse.menu_list_state.selected().unwrap_or(0);
            let last = state.categories.len().saturating_sub(1);
            state
                .browse
                .menu_list_state
                .select(Some((current + 1).min(last)));
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = state.browse.menu_list_state.selected().unwrap_or(0);
            if let Some(category) = state.categories.get(index) {
                let id = category.id.clone();
                state.browse.select_category(&id);
                if state.touch_feedback {
                    platform::touch_feedback();
                }
            }
        }
        _ => {}
    }
}

// Drawer selection starts on the active category
fn sync_drawer_selection(state: &mut AppState) {
    let index = state
        .categories
        .iter()
        .position(|c| c.id == state.browse.active_category)
        .unwrap_or(0);
    state.browse.menu_list_state.select(Some(index));
}

fn cycle_category(state: &mut AppState, delta: isize) {
    if state.categories.is_empty() {
        return;
    }
    let len = state.categories.len() as isize;
    let current = state
        .categories
        .iter()
        .position(|c| c.id == state.browse.active_category)
        .unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    let id = state.categories[next].id.clone();
    state.browse.select_category(&id);
}

fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.filtered().len();
    if len == 0 {
        return;
    }
    let current = state.browse.selected_card as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    state.browse.selected_card = next as usize;
}

fn expand_selected(state: &mut AppState) {
    let id = state
        .filtered()
        .get(state.browse.selected_card)
        .map(|record| record.id);
    if let Some(id) = id {
        state.browse.expand(id);
        if state.touch_feedback {
            platform::touch_feedback();
        }
    }
}

pub(super) fn handle_browse_mouse(mouse: MouseEvent, state: &mut AppState) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // The drawer overlays everything else, so resolve it first
            if state.browse.menu_open {
                let hit = state
                    .browse
                    .category_areas
                    .iter()
                    .find(|(area, _)| area.contains(position))
                    .map(|(_, id)| id.clone());
                match hit {
                    Some(id) => {
                        state.browse.select_category(&id);
                        if state.touch_feedback {
                            platform::touch_feedback();
                        }
                    }
                    None => state.browse.menu_open = false,
                }
                return;
            }

            if let Some(area) = state.browse.search_area {
                if area.contains(position) {
                    state.browse.input_mode = InputMode::Editing;
                    state.browse.cursor_pos = state.browse.search_query.chars().count();
                    return;
                }
            }

            let category_hit = state
                .browse
                .category_areas
                .iter()
                .find(|(area, _)| area.contains(position))
                .map(|(_, id)| id.clone());
            if let Some(id) = category_hit {
                state.browse.select_category(&id);
                if state.touch_feedback {
                    platform::touch_feedback();
                }
                return;
            }

            let card_hit = state
                .browse
                .card_areas
                .iter()
                .find(|(area, _)| area.contains(position))
                .map(|(_, id)| *id);
            if let Some(id) = card_hit {
                if state.browse.input_mode == InputMode::Editing {
                    state.browse.input_mode = InputMode::Normal;
                }
                state.browse.expand(id);
                if state.touch_feedback {
                    platform::touch_feedback();
                }
            }
        }
        MouseEventKind::ScrollUp => {
            move_selection(state, -(state.browse.grid_columns as isize));
        }
        MouseEventKind::ScrollDown => {
            move_selection(state, state.browse.grid_columns as isize);
        }
        _ => {}
    }
}

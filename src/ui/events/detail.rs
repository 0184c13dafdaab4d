// Key and mouse handling for the detail view

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::ui::platform;
use crate::ui::state::AppState;

pub(super) fn handle_detail_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            state.browse.close();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.browse.detail_scroll = state.browse.detail_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            // Clamped against the content height at render time
            state.browse.detail_scroll = state
                .browse
                .detail_scroll
                .saturating_add(1)
                .min(state.browse.detail_max_scroll);
        }
        KeyCode::PageUp => {
            state.browse.detail_scroll = state.browse.detail_scroll.saturating_sub(5);
        }
        KeyCode::PageDown => {
            state.browse.detail_scroll = state
                .browse
                .detail_scroll
                .saturating_add(5)
                .min(state.browse.detail_max_scroll);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if !state.related_records().is_empty() {
                state.browse.related_open = !state.browse.related_open;
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            expand_related(state, c as usize - '1' as usize);
        }
        _ => {}
    }
}

fn expand_related(state: &mut AppState, index: usize) {
    let id = state.related_records().get(index).map(|record| record.id);
    if let Some(id) = id {
        state.browse.expand(id);
        if state.touch_feedback {
            platform::touch_feedback();
        }
    }
}

pub(super) fn handle_detail_mouse(mouse: MouseEvent, state: &mut AppState) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = state.browse.detail_close_area {
                if area.contains(position) {
                    state.browse.close();
                    return;
                }
            }

            if let Some(area) = state.browse.related_toggle_area {
                if area.contains(position) {
                    state.browse.related_open = !state.browse.related_open;
                    return;
                }
            }

            let hit = state
                .browse
                .related_areas
                .iter()
                .find(|(area, _)| area.contains(position))
                .map(|(_, id)| *id);
            if let Some(id) = hit {
                state.browse.expand(id);
                if state.touch_feedback {
                    platform::touch_feedback();
                }
            }
        }
        MouseEventKind::ScrollUp => {
            state.browse.detail_scroll = state.browse.detail_scroll.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => {
            state.browse.detail_scroll = state
                .browse
                .detail_scroll
                .saturating_add(1)
                .min(state.browse.detail_max_scroll);
        }
        _ => {}
    }
}

// Key handling for the help modal

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::help::{HelpModalState, HelpSection};
use crate::ui::state::AppState;

pub(super) fn open_help(state: &mut AppState) {
    state.help_modal = Some(HelpModalState {
        current_section: HelpSection::About,
        scroll_offset: 0,
        max_scroll: 0,
        app_version: state.app_version.clone(),
        catalog_len: state.catalog.len(),
        category_count: state.categories.len(),
    });
}

pub(super) fn handle_help_key(key: KeyEvent, state: &mut AppState) {
    let Some(help) = state.help_modal.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('q') => {
            state.help_modal = None;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            help.current_section = help.current_section.next();
            help.scroll_offset = 0;
        }
        KeyCode::BackTab | KeyCode::Left => {
            help.current_section = help.current_section.previous();
            help.scroll_offset = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            help.scroll_offset = help.scroll_offset.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            help.scroll_offset = help.scroll_offset.saturating_add(1).min(help.max_scroll);
        }
        KeyCode::PageUp => {
            help.scroll_offset = help.scroll_offset.saturating_sub(10);
        }
        KeyCode::PageDown => {
            help.scroll_offset = help.scroll_offset.saturating_add(10).min(help.max_scroll);
        }
        KeyCode::Home => help.scroll_offset = 0,
        KeyCode::End => help.scroll_offset = help.max_scroll,
        _ => {}
    }
}

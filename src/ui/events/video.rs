// Key and mouse handling for the video overlay

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::state::AppState;
use crate::ui::video_modal;

pub(super) fn handle_video_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V')
        | KeyCode::Char('q') | KeyCode::Char('Q') => {
            // Closing the overlay terminates the player; playback must
            // not continue behind the grid
            video_modal::close_video(state);
        }
        _ => {}
    }
}

pub(super) fn handle_video_mouse(mouse: MouseEvent, state: &mut AppState) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        video_modal::close_video(state);
    }
}

// Intro video overlay. The "embedded player" is an external process
// (mpv/ffplay); closing the overlay kills it, which is what guarantees
// the media is no longer audible or visible, not merely hidden.

use crate::log::write_debug_log;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::process::{Command, Stdio};

pub struct VideoModal;

impl VideoModal {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let modal_width = 60.min(area.width.saturating_sub(4));
        let modal_height = 11.min(area.height.saturating_sub(2));
        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Introduction Video ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let status = if let Some(player) = &state.video.player_name {
            Line::from(vec![
                Span::styled("▶ Playing via ", Style::default().fg(Color::Green)),
                Span::styled(
                    player.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else if state.video.spawn_failed {
            Line::from(Span::styled(
                "No video player found (install mpv or ffplay)",
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                "Playback finished",
                Style::default().fg(Color::Gray),
            ))
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "National Art School Introduction",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Learn about the National Art School and its",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "programs in this introductory video.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            status,
            Line::from(""),
            Line::from(vec![
                Span::styled("[Esc/V]", Style::default().fg(Color::Yellow)),
                Span::raw(" Close and stop playback"),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}

/// Open the overlay and start the first available player. Spawn failure
/// is a degraded-capability condition: logged, the overlay still opens.
pub fn open_video(state: &mut AppState) {
    state.video.is_open = true;
    state.video.spawn_failed = false;

    if state.video.player.is_some() {
        return; // already playing
    }

    for player in state.video_players.clone() {
        match Command::new(&player)
            .arg(&state.video_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                state.video.player = Some(child);
                state.video.player_name = Some(player);
                return;
            }
            Err(e) => {
                let _ = write_debug_log(&format!(
                    "video player '{}' failed to spawn: {}",
                    player, e
                ));
            }
        }
    }

    state.video.spawn_failed = true;
    let _ = write_debug_log("no video player available; overlay opened without playback");
}

/// Close the overlay and stop playback. Kill-and-reap, so a reopened
/// overlay always starts a fresh player.
pub fn close_video(state: &mut AppState) {
    state.video.is_open = false;
    stop_player(state);
}

pub fn stop_player(state: &mut AppState) {
    if let Some(mut child) = state.video.player.take() {
        if let Err(e) = child.kill() {
            let _ = write_debug_log(&format!("failed to kill video player: {}", e));
        }
        if let Err(e) = child.wait() {
            let _ = write_debug_log(&format!("failed to reap video player: {}", e));
        }
    }
    state.video.player_name = None;
}

/// Reap a player that exited on its own (end of video, user closed the
/// window). Called from the tick path.
pub fn poll_player(state: &mut AppState) {
    let exited = match &mut state.video.player {
        Some(child) => child.try_wait().ok().flatten().is_some(),
        None => false,
    };
    if exited {
        state.video.player = None;
        state.video.player_name = None;
    }
}

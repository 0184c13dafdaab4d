// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEvent,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ui::{
    DetailView, GridView, HelpModal, QuitModal, VideoModal, platform,
    state::{AppState, InputMode, QuitConfirmationState},
    video_modal,
};

mod detail;
mod grid;
mod help;
mod video;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Periodic update for rendering and player polling
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(16); // ~60 FPS

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            // Poll for events with adaptive timeout
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            // Send tick if enough time elapsed
            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(catalog: Catalog) -> io::Result<()> {
    run_ui_with_options(catalog, None, &Config::default())
}

pub fn run_ui_with_options(
    catalog: Catalog,
    kiosk: Option<bool>,
    config: &Config,
) -> io::Result<()> {
    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Enter alternate screen and enable mouse capture. Mouse capture
    // doubles as the kiosk gesture suppression: the terminal no longer
    // reacts to drags and scrolls on its own.
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app_state = AppState::new(catalog, config);

    // CLI flag > config default
    if let Some(kiosk) = kiosk {
        app_state.kiosk_fullscreen = kiosk;
    }

    // Best-effort platform touches; failures are logged, not fatal
    platform::set_title("National Art School - FAQ");

    // Initial orientation from the current terminal size
    if let Ok(size) = terminal.size() {
        app_state.update_orientation(size.width, size.height);
    }

    // Wire up UI event channel
    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    // Main loop
    let result = run_app(&mut terminal, &mut app_state, event_rx);

    // Stop any still-running video playback before leaving
    video_modal::stop_player(&mut app_state);

    // Restore terminal: leave alternate screen and disable mouse capture
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Collect all pending events so we can coalesce tick bursts and
        // keep inputs snappy
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(UiEvent::Tick) => pending_ticks += 1,
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Err(_) => {
                // Channel closed, exit
                return Ok(());
            }
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
            }
        }

        // Process input events first so user commands are never stuck
        // behind a tick backlog
        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse(mouse, state);
                }
                Event::Resize(width, height) => {
                    state.update_orientation(width, height);
                }
                _ => {}
            }
        }

        if pending_ticks > 0 {
            // Reap a player that finished on its own
            video_modal::poll_player(state);
        }

        // Render after processing events
        terminal.draw(|frame| {
            GridView::render(frame, state);

            if state.browse.is_expanded() {
                DetailView::render(frame, state);
            }

            if state.video.is_open {
                VideoModal::render(frame, state);
            }

            if let Some(ref mut help_state) = state.help_modal {
                HelpModal::render(frame, help_state);
            }

            if let Some(ref quit_state) = state.quit_confirmation {
                QuitModal::render(frame, quit_state);
            }
        })?;
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Returns true when the application should exit.
fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Modal priority: quit confirmation > help > video > detail > grid

    if state.quit_confirmation.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                state.quit_confirmation = None;
            }
            _ => {}
        }
        return false;
    }

    if state.help_modal.is_some() {
        help::handle_help_key(key, state);
        return false;
    }

    if state.video.is_open {
        video::handle_video_key(key, state);
        return false;
    }

    // While editing search text, global shortcuts are inactive
    let is_editing =
        state.browse.input_mode == InputMode::Editing && !state.browse.is_expanded();

    if !is_editing {
        if should_quit(&key) {
            return request_quit(state);
        }

        match key.code {
            KeyCode::Char('h') | KeyCode::Char('H') => {
                help::open_help(state);
                return false;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                state.kiosk_fullscreen = !state.kiosk_fullscreen;
                return false;
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                video_modal::open_video(state);
                return false;
            }
            _ => {}
        }
    }

    if state.browse.is_expanded() {
        detail::handle_detail_key(key, state);
    } else {
        grid::handle_browse_key(key, state);
    }

    false
}

/// Quitting while the intro video is still audible asks first.
fn request_quit(state: &mut AppState) -> bool {
    if state.video.is_playing() {
        state.quit_confirmation = Some(QuitConfirmationState {
            video_playing: true,
        });
        false
    } else {
        true
    }
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    // Modal overlays swallow mouse input except where they define targets
    if state.quit_confirmation.is_some() || state.help_modal.is_some() {
        return;
    }
    if state.video.is_open {
        video::handle_video_mouse(mouse, state);
        return;
    }

    if state.browse.is_expanded() {
        detail::handle_detail_mouse(mouse, state);
    } else {
        grid::handle_browse_mouse(mouse, state);
    }
}

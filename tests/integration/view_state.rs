// Integration tests for UI view-state transitions
//
// These drive AppState the way the event handlers do, without a
// terminal: category selection, search editing, expansion, the video
// overlay flags, and orientation.

use faqdash::catalog::builtin_catalog;
use faqdash::config::Config;
use faqdash::ui::AppState;
use faqdash::ui::state::{InputMode, Orientation};

fn app_state() -> AppState {
    AppState::new(builtin_catalog(), &Config::default())
}

#[test]
fn startup_shows_the_full_grid() {
    let state = app_state();
    assert_eq!(state.filtered().len(), 12);
    assert_eq!(state.categories.len(), 7);
    assert!(!state.browse.is_expanded());
    assert_eq!(state.browse.input_mode, InputMode::Normal);
}

#[test]
fn search_narrows_while_a_card_is_expanded() {
    // Filters and expansion are independent axes
    let mut state = app_state();
    state.browse.expand(2);
    state.browse.update_search("scholarship");

    assert_eq!(state.browse.expanded_id, Some(2));
    assert_eq!(state.filtered().len(), 1);
    // The expanded record resolves even though it no longer matches
    assert!(state.expanded_record().is_some());
}

#[test]
fn related_navigation_chains_between_cards() {
    let mut state = app_state();
    state.browse.expand(4);

    // Walk the related chain twice; each hop is a direct expand
    for _ in 0..2 {
        let next = state.related_records().first().map(|r| r.id);
        let next = next.expect("admission cards have related entries");
        state.browse.expand(next);
        assert_eq!(state.browse.expanded_id, Some(next));
    }
}

#[test]
fn related_panel_state_resets_on_each_expand() {
    let mut state = app_state();
    state.browse.expand(4);
    state.browse.related_open = true;
    state.browse.detail_scroll = 3;

    state.browse.expand(5);
    assert!(!state.browse.related_open);
    assert_eq!(state.browse.detail_scroll, 0);
}

#[test]
fn empty_result_set_is_a_valid_state() {
    let mut state = app_state();
    state.browse.select_category("finance");
    state.browse.update_search("portfolio");
    assert!(state.filtered().is_empty());
    state.clamp_selection();
    assert_eq!(state.browse.selected_card, 0);

    // Reset recovers the full grid in one transition
    state.browse.reset_filters();
    assert_eq!(state.filtered().len(), 12);
}

#[test]
fn video_overlay_tracks_player_lifecycle_flags() {
    let mut state = app_state();
    assert!(!state.video.is_open);
    assert!(!state.video.is_playing());

    // Opening without a spawned player still shows the overlay
    state.video.is_open = true;
    state.video.spawn_failed = true;
    assert!(state.video.is_open);
    assert!(!state.video.is_playing());
}

#[test]
fn kiosk_flag_comes_from_config() {
    let mut config = Config::default();
    config.startup.kiosk_fullscreen = true;
    let state = AppState::new(builtin_catalog(), &config);
    assert!(state.kiosk_fullscreen);
}

#[test]
fn orientation_override_pins_the_layout() {
    let mut config = Config::default();
    config.display.orientation = "landscape".to_string();
    let mut state = AppState::new(builtin_catalog(), &config);

    // A tall terminal would normally flip to portrait
    state.update_orientation(60, 80);
    assert_eq!(state.orientation, Orientation::Landscape);
}

#[test]
fn auto_orientation_follows_resize_events() {
    let mut state = app_state();
    state.update_orientation(220, 50);
    assert_eq!(state.orientation, Orientation::Landscape);
    state.update_orientation(90, 60);
    assert_eq!(state.orientation, Orientation::Portrait);
}

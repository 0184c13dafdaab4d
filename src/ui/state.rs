// Application state management

use crate::catalog::{self, Catalog, Category, FaqRecord};
use crate::config::Config;
use crate::ui::help::HelpModalState;
use ratatui::{layout::Rect, widgets::ListState};
use std::process::Child;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,  // Normal navigation mode - global shortcuts active
    Editing, // Search editing mode - character input active, global shortcuts inactive
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// State for the quit confirmation modal
#[derive(Debug, Clone)]
pub struct QuitConfirmationState {
    /// True when the intro video player is still running
    pub video_playing: bool,
}

/// Browsing state: active filter inputs plus which card (if any) is
/// expanded. Filtered results are derived on read, never stored.
pub struct BrowseState {
    pub active_category: String,
    pub search_query: String,
    pub expanded_id: Option<u32>,
    pub menu_open: bool,

    pub input_mode: InputMode,
    pub cursor_pos: usize, // character position in search_query

    // Grid selection
    pub selected_card: usize,
    pub grid_columns: usize, // set by the renderer, used for Up/Down movement
    pub grid_scroll: usize,  // first visible grid row

    // Detail view
    pub detail_scroll: u16,
    pub detail_max_scroll: u16,
    pub related_open: bool, // portrait toggle panel

    // Category drawer
    pub menu_list_state: ListState,

    // Mouse support - widget areas recorded at render time
    pub card_areas: Vec<(Rect, u32)>,
    pub category_areas: Vec<(Rect, String)>,
    pub related_areas: Vec<(Rect, u32)>,
    pub search_area: Option<Rect>,
    pub detail_close_area: Option<Rect>,
    pub related_toggle_area: Option<Rect>,
}

impl Default for BrowseState {
    fn default() -> Self {
        let mut menu_list_state = ListState::default();
        menu_list_state.select(Some(0));

        Self {
            active_category: catalog::ALL_CATEGORY.to_string(),
            search_query: String::new(),
            expanded_id: None,
            menu_open: false,
            input_mode: InputMode::Normal,
            cursor_pos: 0,
            selected_card: 0,
            grid_columns: 1,
            grid_scroll: 0,
            detail_scroll: 0,
            detail_max_scroll: 0,
            related_open: false,
            menu_list_state,
            card_areas: Vec::new(),
            category_areas: Vec::new(),
            related_areas: Vec::new(),
            search_area: None,
            detail_close_area: None,
            related_toggle_area: None,
        }
    }
}

impl BrowseState {
    pub fn is_expanded(&self) -> bool {
        self.expanded_id.is_some()
    }

    /// Always legal. Closes the drawer as a side effect.
    pub fn select_category(&mut self, id: &str) {
        self.active_category = id.to_string();
        self.menu_open = false;
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    /// Replace the query verbatim. No debounce; every keystroke re-filters.
    pub fn update_search(&mut self, text: &str) {
        self.search_query = text.to_string();
        self.cursor_pos = self.search_query.chars().count();
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    /// Browsing -> Expanded, or Expanded -> Expanded when a related card
    /// is chosen. A stale id is tolerated: the detail view renders
    /// nothing for an id absent from the dataset.
    pub fn expand(&mut self, id: u32) {
        self.expanded_id = Some(id);
        self.detail_scroll = 0;
        self.related_open = false;
    }

    /// Expanded -> Browsing. Category, search, and menu are untouched.
    pub fn close(&mut self) {
        self.expanded_id = None;
        self.detail_scroll = 0;
        self.related_open = false;
    }

    /// Clears both filters together, independent of card expansion.
    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.cursor_pos = 0;
        self.active_category = catalog::ALL_CATEGORY.to_string();
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // Search editing primitives (cursor position is in characters)

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = byte_index(&self.search_query, self.cursor_pos);
        self.search_query.insert(byte_pos, c);
        self.cursor_pos += 1;
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    pub fn delete_char_backwards(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = byte_index(&self.search_query, self.cursor_pos - 1);
        self.search_query.remove(byte_pos);
        self.cursor_pos -= 1;
        self.selected_card = 0;
        self.grid_scroll = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.cursor_pos = 0;
        self.selected_card = 0;
        self.grid_scroll = 0;
    }
}

fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Intro video overlay. The embedded player is an external process;
/// closing the overlay must terminate it so playback verifiably stops.
#[derive(Default)]
pub struct VideoOverlayState {
    pub is_open: bool,
    pub player: Option<Child>,
    pub player_name: Option<String>,
    pub spawn_failed: bool,
}

impl VideoOverlayState {
    pub fn is_playing(&self) -> bool {
        self.player.is_some()
    }
}

pub struct AppState {
    pub catalog: Catalog,
    /// Derived once; the dataset is static for the life of the process.
    pub categories: Vec<Category>,
    pub browse: BrowseState,
    pub video: VideoOverlayState,
    pub help_modal: Option<HelpModalState>,
    pub quit_confirmation: Option<QuitConfirmationState>,

    // Shell state
    pub kiosk_fullscreen: bool,
    pub orientation: Orientation,
    pub orientation_override: Option<Orientation>,
    pub touch_feedback: bool,
    pub show_help_hint: bool,
    pub viewport: Rect,

    pub video_url: String,
    pub video_players: Vec<String>,
    pub app_version: String,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let categories = catalog::derive_categories(&catalog.records);

        let orientation_override = match config.display.orientation.to_lowercase().as_str() {
            "landscape" => Some(Orientation::Landscape),
            "portrait" => Some(Orientation::Portrait),
            _ => None, // "auto" and anything unrecognized
        };

        Self {
            catalog,
            categories,
            browse: BrowseState::default(),
            video: VideoOverlayState::default(),
            help_modal: None,
            quit_confirmation: None,
            kiosk_fullscreen: config.startup.kiosk_fullscreen,
            orientation: orientation_override.unwrap_or(Orientation::Landscape),
            orientation_override,
            touch_feedback: config.display.touch_feedback,
            show_help_hint: config.startup.show_help_hint,
            viewport: Rect::default(),
            video_url: config.video.url.clone(),
            video_players: config.video.players.clone(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// The visible subset for the current filters, derived on read after
    /// each transition. Cheap at this dataset size.
    pub fn filtered(&self) -> Vec<&FaqRecord> {
        catalog::filter(
            &self.catalog.records,
            &self.browse.active_category,
            &self.browse.search_query,
        )
    }

    /// The expanded record, or None when nothing is expanded or the id
    /// is stale (defensive state, not an error).
    pub fn expanded_record(&self) -> Option<&FaqRecord> {
        self.browse.expanded_id.and_then(|id| self.catalog.find(id))
    }

    pub fn related_records(&self) -> Vec<&FaqRecord> {
        match self.expanded_record() {
            Some(record) => catalog::related_for(&self.catalog.records, record),
            None => Vec::new(),
        }
    }

    /// Recompute orientation from the terminal size. Terminal cells are
    /// roughly twice as tall as wide, so landscape means width exceeding
    /// twice the height. A configured override wins.
    pub fn update_orientation(&mut self, width: u16, height: u16) {
        self.orientation = self.orientation_override.unwrap_or({
            if width > height.saturating_mul(2) {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            }
        });
    }

    /// Keep the grid selection inside the filtered result set.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.browse.selected_card = 0;
        } else if self.browse.selected_card >= len {
            self.browse.selected_card = len - 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct HelpModalState {
    pub current_section: HelpSection,
    pub scroll_offset: u16,
    pub max_scroll: u16,
    pub app_version: String,
    pub catalog_len: usize,
    pub category_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSection {
    About,
    Browsing,
    SearchFilters,
    KeyboardShortcuts,
}

impl HelpSection {
    pub fn next(self) -> Self {
        match self {
            Self::About => Self::Browsing,
            Self::Browsing => Self::SearchFilters,
            Self::SearchFilters => Self::KeyboardShortcuts,
            Self::KeyboardShortcuts => Self::About,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::About => Self::KeyboardShortcuts,
            Self::Browsing => Self::About,
            Self::SearchFilters => Self::Browsing,
            Self::KeyboardShortcuts => Self::SearchFilters,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::About => "About",
            Self::Browsing => "Browsing",
            Self::SearchFilters => "Search & Filters",
            Self::KeyboardShortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn all_sections() -> Vec<Self> {
        vec![
            Self::About,
            Self::Browsing,
            Self::SearchFilters,
            Self::KeyboardShortcuts,
        ]
    }
}

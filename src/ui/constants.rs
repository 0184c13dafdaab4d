// Layout constants - single source of truth for the grid geometry

/// Minimum card width in columns; the grid packs as many columns as fit.
pub const CARD_MIN_WIDTH: u16 = 30;

/// Category sidebar width in landscape layout.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Column caps per orientation.
pub const MAX_COLUMNS_LANDSCAPE: usize = 4;
pub const MAX_COLUMNS_PORTRAIT: usize = 2;

/// Header rows (title + search line inside a bordered block).
pub const HEADER_HEIGHT: u16 = 4;

/// Related side stack width inside the detail overlay (landscape).
pub const RELATED_STACK_WIDTH: u16 = 32;

/// Kiosk display title.
pub const KIOSK_TITLE: &str = "National Art School";
pub const KIOSK_SUBTITLE: &str = "Frequently Asked Questions";

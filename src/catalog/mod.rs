// FAQ catalog: the dataset plus the pure logic that reads it
// (filtering, category derivation, answer formatting).

pub mod answer;
pub mod category;
pub mod data;
pub mod filter;
pub mod types;

pub use answer::{FormattedAnswer, format_answer};
pub use category::{Category, derive_categories, icon_for};
pub use data::builtin_catalog;
pub use filter::{ALL_CATEGORY, filter, related_for};
pub use types::{Accent, CardSize, Catalog, FaqRecord};

/// Maximum number of related questions offered alongside an expanded card.
///
/// The kiosk shows related entries in two surfaces (toggle panel and side
/// stack); both use this single cap.
pub const RELATED_CAP: usize = 4;

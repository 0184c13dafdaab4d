use anyhow::{Context, Result, bail};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Card footprint in the grid. Visual only; carries no filtering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Large,
    #[default]
    Medium,
    Small,
}

impl CardSize {
    /// Rendered card height in terminal rows (including borders).
    pub fn rows(self) -> u16 {
        match self {
            Self::Large => 9,
            Self::Medium => 7,
            Self::Small => 5,
        }
    }
}

/// Card accent color. Stands in for the original display gradients; kept
/// out of the filtering logic entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Emerald,
    Amber,
    Rose,
    Violet,
    Sky,
    Fuchsia,
    Teal,
    Yellow,
    Slate,
    Red,
    Indigo,
}

impl Accent {
    pub fn color(self) -> Color {
        match self {
            Self::Blue => Color::Blue,
            Self::Emerald => Color::Green,
            Self::Amber => Color::Yellow,
            Self::Rose => Color::LightRed,
            Self::Violet => Color::Magenta,
            Self::Sky => Color::LightBlue,
            Self::Fuchsia => Color::LightMagenta,
            Self::Teal => Color::Cyan,
            Self::Yellow => Color::LightYellow,
            Self::Slate => Color::DarkGray,
            Self::Red => Color::Red,
            Self::Indigo => Color::LightCyan,
        }
    }
}

/// One question/answer unit. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: u32,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub size: CardSize,
    pub category: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
}

/// The full FAQ dataset. Normally compiled in, but a kiosk deployment can
/// point `[catalog] path` at a TOML file with the same `[[faq]]` shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "faq", default)]
    pub records: Vec<FaqRecord>,
}

impl Catalog {
    /// Load a catalog from a TOML file. An empty file is a valid (empty)
    /// catalog; duplicate ids or blank categories are not.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog: Catalog = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the dataset invariants: unique ids, non-empty categories.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(record.id) {
                bail!("duplicate FAQ id {}", record.id);
            }
            if record.category.trim().is_empty() {
                bail!("FAQ id {} has an empty category", record.id);
            }
        }
        Ok(())
    }

    pub fn find(&self, id: u32) -> Option<&FaqRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: &str) -> FaqRecord {
        FaqRecord {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            size: CardSize::Medium,
            category: category.to_string(),
            icon: "📄".to_string(),
            accent: Accent::Blue,
        }
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let catalog = Catalog {
            records: vec![record(1, "Finance"), record(1, "Location")],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_category() {
        let catalog = Catalog {
            records: vec![record(1, "  ")],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert!(catalog.is_empty());
    }

    #[test]
    fn catalog_toml_roundtrip() {
        let catalog = Catalog {
            records: vec![record(1, "Finance"), record(2, "Location")],
        };
        let toml_str = toml::to_string(&catalog).unwrap();
        let parsed: Catalog = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.records, catalog.records);
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let catalog = Catalog {
            records: vec![record(1, "Finance")],
        };
        assert!(catalog.find(99).is_none());
        assert_eq!(catalog.find(1).map(|r| r.id), Some(1));
    }
}

use crate::compose::ComposedEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the advice entry every orientation mapping carries next to its categories.
pub const ADVICE_KEY: &str = "advice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(is_reversed: bool) -> Self {
        if is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    pub fn is_reversed(self) -> bool {
        self == Orientation::Reversed
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Upright => "upright",
            Orientation::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category key (plus `advice`) to interpretation text, one map per orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meanings {
    #[serde(default)]
    pub upright: BTreeMap<String, String>,
    #[serde(default)]
    pub reversed: BTreeMap<String, String>,
}

impl Meanings {
    pub fn for_orientation(&self, orientation: Orientation) -> &BTreeMap<String, String> {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// A card definition as it appears in the deck catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    pub meanings: Meanings,
}

/// A card as it came out of the draw engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    pub orientation: Orientation,
    pub position: Option<String>,
}

impl DrawnCard {
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub name: String,
    pub positions: Vec<String>,
}

impl LayoutTemplate {
    pub fn new<I, S>(name: impl Into<String>, positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            positions: positions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}

/// One card of a saved reading. The interpretation is the text shown when the
/// reading was saved, kept verbatim so later deck edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub name: String,
    pub orientation: Orientation,
    pub interpretation_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub timestamp: DateTime<Utc>,
    pub question: String,
    pub category: String,
    pub layout_name: String,
    pub card_entries: Vec<CardEntry>,
    pub personal_note: String,
}

impl ReadingRecord {
    /// Snapshots composed entries into a record stamped with the current time.
    pub fn from_entries(
        question: impl Into<String>,
        category: impl Into<String>,
        layout_name: impl Into<String>,
        entries: &[ComposedEntry],
        personal_note: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            question: question.into(),
            category: category.into(),
            layout_name: layout_name.into(),
            card_entries: entries
                .iter()
                .map(|entry| CardEntry {
                    position: entry.position.clone(),
                    name: entry.card.name.clone(),
                    orientation: entry.orientation,
                    interpretation_text: entry.body_text.clone(),
                })
                .collect(),
            personal_note: personal_note.into(),
        }
    }
}

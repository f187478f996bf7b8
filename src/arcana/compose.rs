//! # Reading Composer
//!
//! Turns drawn cards into interpretation text. For each card the meaning map
//! of its orientation is consulted:
//!
//! - the body text is the entry for the requested category;
//! - when the category is empty, is `advice`, or is absent from that map, the
//!   fallback category ([`DEFAULT_CATEGORY`] unless configured otherwise) is
//!   used instead;
//! - the advice text is always the `advice` entry of the same map.
//!
//! A card lacking both the requested and the fallback category, or lacking
//! advice, is a deck data problem and yields [`ArcanaError::MissingMeaning`].
//! Callers that must not lose a whole reading over one card can compose card
//! by card with [`Composer::compose_card`] and put an
//! [`ComposedEntry::unavailable`] entry in its place.

use crate::error::{ArcanaError, Result};
use crate::model::{Card, DrawnCard, Orientation, ADVICE_KEY};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const DEFAULT_CATEGORY: &str = "general";

/// Body text of an entry whose card has no usable meaning text.
pub const UNAVAILABLE_TEXT: &str = "No reading available for this card.";

/// One card of a composed reading, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEntry {
    pub position: Option<String>,
    pub card: Card,
    pub orientation: Orientation,
    /// The category the body text was actually taken from.
    pub category: String,
    pub body_text: String,
    pub advice_text: String,
    /// False when the deck had no text for this card; the body is then
    /// [`UNAVAILABLE_TEXT`] and the advice is empty.
    pub available: bool,
}

impl ComposedEntry {
    pub fn unavailable(drawn: &DrawnCard) -> Self {
        Self {
            position: drawn.position.clone(),
            card: drawn.card.clone(),
            orientation: drawn.orientation,
            category: String::new(),
            body_text: UNAVAILABLE_TEXT.to_string(),
            advice_text: String::new(),
            available: false,
        }
    }

    pub fn orientation_label(&self) -> &'static str {
        self.orientation.label()
    }
}

#[derive(Debug, Clone)]
pub struct Composer {
    fallback_category: String,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl Composer {
    pub fn new(fallback_category: impl Into<String>) -> Self {
        Self {
            fallback_category: fallback_category.into(),
        }
    }

    pub fn fallback_category(&self) -> &str {
        &self.fallback_category
    }

    pub fn compose(&self, drawn: &[DrawnCard], category: &str) -> Result<Vec<ComposedEntry>> {
        drawn
            .iter()
            .map(|card| self.compose_card(card, category))
            .collect()
    }

    pub fn compose_card(&self, drawn: &DrawnCard, category: &str) -> Result<ComposedEntry> {
        let meanings = drawn.card.meanings.for_orientation(drawn.orientation);

        let (used, body) = self
            .select_body(meanings, category)
            .ok_or_else(|| {
                let requested = if category.is_empty() {
                    self.fallback_category.as_str()
                } else {
                    category
                };
                self.missing(drawn, requested)
            })?;

        let advice = meanings
            .get(ADVICE_KEY)
            .ok_or_else(|| self.missing(drawn, ADVICE_KEY))?;

        Ok(ComposedEntry {
            position: drawn.position.clone(),
            card: drawn.card.clone(),
            orientation: drawn.orientation,
            category: used.to_string(),
            body_text: body.clone(),
            advice_text: advice.clone(),
            available: true,
        })
    }

    fn select_body<'m>(
        &'m self,
        meanings: &'m BTreeMap<String, String>,
        category: &'m str,
    ) -> Option<(&'m str, &'m String)> {
        if !category.is_empty() && category != ADVICE_KEY {
            if let Some(body) = meanings.get(category) {
                return Some((category, body));
            }
            debug!(category, fallback = %self.fallback_category, "category not found, using fallback");
        }
        meanings
            .get(&self.fallback_category)
            .map(|body| (self.fallback_category.as_str(), body))
    }

    fn missing(&self, drawn: &DrawnCard, category: &str) -> ArcanaError {
        warn!(
            card = %drawn.card.name,
            orientation = %drawn.orientation,
            category,
            "deck is missing meaning text"
        );
        ArcanaError::MissingMeaning {
            card: drawn.card.name.clone(),
            orientation: drawn.orientation,
            category: category.to_string(),
        }
    }
}

//! # Deck
//!
//! The immutable card catalog. A [`Deck`] is validated once when it is built
//! (non-empty, unique card ids) and never changes afterwards; the draw engine
//! only ever reads from it.
//!
//! Decks are JSON arrays of [`Card`]s:
//!
//! ```json
//! [
//!   {
//!     "id": "major-00",
//!     "name": "The Fool",
//!     "image": "images/major-00.jpg",
//!     "url": "https://example.com/the-fool",
//!     "meanings": {
//!       "upright": { "general": "...", "love": "...", "advice": "..." },
//!       "reversed": { "general": "...", "love": "...", "advice": "..." }
//!     }
//!   }
//! ]
//! ```
//!
//! A 22-card Major Arcana deck is compiled into the binary and used whenever
//! no external deck is configured.

use crate::error::{ArcanaError, Result};
use crate::model::Card;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUNDLED_DECK: &str = include_str!("../../data/major_arcana.json");

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(ArcanaError::EmptyDeck);
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(ArcanaError::InvalidDeck(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
        }

        Ok(Self { cards })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| ArcanaError::InvalidDeck(e.to_string()))?;
        Self::new(cards)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ArcanaError::DeckLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The Major Arcana deck shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DECK)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Meanings, ADVICE_KEY};
    use std::collections::BTreeMap;

    /// A card with `general`, `love` and `advice` text for both orientations.
    pub fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: format!("Card {}", id),
            image: format!("images/{}.jpg", id),
            url: format!("https://example.com/{}", id),
            meanings: Meanings {
                upright: meanings_for(id, "up"),
                reversed: meanings_for(id, "rev"),
            },
        }
    }

    /// A card whose meaning maps hold only `general` and `advice`.
    pub fn general_only_card(id: &str) -> Card {
        let mut card = card(id);
        card.meanings.upright.remove("love");
        card.meanings.reversed.remove("love");
        card
    }

    /// A card whose meaning maps hold only `advice`.
    pub fn advice_only_card(id: &str) -> Card {
        let mut card = card(id);
        card.meanings.upright.retain(|k, _| k == ADVICE_KEY);
        card.meanings.reversed.retain(|k, _| k == ADVICE_KEY);
        card
    }

    fn meanings_for(id: &str, tag: &str) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("general".to_string(), format!("{} {} general", id, tag));
        map.insert("love".to_string(), format!("{} {} love", id, tag));
        map.insert(ADVICE_KEY.to_string(), format!("{} {} advice", id, tag));
        map
    }

    pub fn deck_of(ids: &[&str]) -> Deck {
        Deck::new(ids.iter().map(|id| card(id)).collect()).unwrap()
    }
}

//! # Draw Engine
//!
//! Samples cards from a [`Deck`] without replacement. The engine remembers
//! which card ids it has handed out in the current session; once every card
//! has been drawn the next draw clears that memory first (a reshuffle) and
//! carries on, so a draw never fails for lack of cards.
//!
//! Orientation is picked independently for each draw with a fair coin.
//!
//! The random source is a type parameter so tests and the `--seed` flag can
//! pass a seeded [`rand::rngs::StdRng`].

use crate::deck::Deck;
use crate::error::{ArcanaError, Result};
use crate::model::{DrawnCard, Orientation};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

pub struct DrawEngine<R> {
    deck: Arc<Deck>,
    drawn: HashSet<String>,
    rng: R,
    reshuffles: usize,
}

impl<R: Rng> DrawEngine<R> {
    pub fn with_rng(deck: Arc<Deck>, rng: R) -> Self {
        Self {
            deck,
            drawn: HashSet::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Draws one card not yet drawn in this session.
    pub fn draw(&mut self) -> Result<DrawnCard> {
        if self.deck.is_empty() {
            return Err(ArcanaError::EmptyDeck);
        }

        let mut available = self.available_indexes();
        if available.is_empty() {
            // A non-empty deck always has cards available once cleared.
            debug!(deck_size = self.deck.len(), "deck exhausted, reshuffling");
            self.drawn.clear();
            self.reshuffles += 1;
            available = self.available_indexes();
        }

        let pick = available[self.rng.random_range(0..available.len())];
        let card = self.deck.cards()[pick].clone();
        self.drawn.insert(card.id.clone());

        let orientation = Orientation::from_reversed(self.rng.random_bool(0.5));
        debug!(card = %card.name, %orientation, "drew card");

        Ok(DrawnCard {
            card,
            orientation,
            position: None,
        })
    }

    /// Draws `n` cards in order. Position labels are left to the caller.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<DrawnCard>> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// Forgets every drawn card, starting a new session.
    pub fn reset(&mut self) {
        self.drawn.clear();
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    pub fn remaining(&self) -> usize {
        self.deck.len() - self.drawn.len()
    }

    /// Number of implicit reshuffles since the engine was created.
    pub fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    fn available_indexes(&self) -> Vec<usize> {
        self.deck
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| !self.drawn.contains(&card.id))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::deck_of;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(ids: &[&str], seed: u64) -> DrawEngine<StdRng> {
        DrawEngine::with_rng(Arc::new(deck_of(ids)), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn draw_many_returns_distinct_cards() {
        for seed in 0..20 {
            let mut engine = engine(&["A", "B", "C", "D", "E"], seed);
            let cards = engine.draw_many(5).unwrap();
            let ids: HashSet<_> = cards.iter().map(|c| c.card.id.clone()).collect();
            assert_eq!(ids.len(), 5);
            assert!(cards.iter().all(|c| c.position.is_none()));
        }
    }

    #[test]
    fn reshuffles_once_after_exhaustion() {
        for size in 1..6 {
            let ids: Vec<String> = (0..size).map(|i| format!("c{}", i)).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let mut engine = engine(&refs, size as u64);

            engine.draw_many(size).unwrap();
            assert_eq!(engine.reshuffles(), 0);
            assert_eq!(engine.remaining(), 0);

            engine.draw().unwrap();
            assert_eq!(engine.reshuffles(), 1);
            assert_eq!(engine.drawn_count(), 1);
        }
    }

    #[test]
    fn single_card_deck_keeps_drawing() {
        let mut engine = engine(&["A"], 7);
        let cards = engine.draw_many(4).unwrap();
        assert!(cards.iter().all(|c| c.card.id == "A"));
        assert_eq!(engine.reshuffles(), 3);
    }

    #[test]
    fn reset_clears_session() {
        let mut engine = engine(&["A", "B", "C"], 1);
        engine.draw_many(2).unwrap();
        engine.reset();
        assert_eq!(engine.drawn_count(), 0);
        assert_eq!(engine.remaining(), 3);
        assert_eq!(engine.reshuffles(), 0);
    }

    #[test]
    fn both_orientations_occur() {
        let mut engine = engine(&["A", "B", "C"], 42);
        let cards = engine.draw_many(60).unwrap();
        assert!(cards.iter().any(|c| c.orientation == Orientation::Upright));
        assert!(cards.iter().any(|c| c.orientation == Orientation::Reversed));
    }

    #[test]
    fn sessions_are_independent() {
        let deck = Arc::new(deck_of(&["A", "B"]));
        let mut first = DrawEngine::with_rng(deck.clone(), StdRng::seed_from_u64(1));
        let mut second = DrawEngine::with_rng(deck, StdRng::seed_from_u64(2));
        first.draw_many(2).unwrap();
        assert_eq!(second.drawn_count(), 0);
        second.draw().unwrap();
        assert_eq!(first.reshuffles(), 0);
        assert_eq!(second.reshuffles(), 0);
    }
}

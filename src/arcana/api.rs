//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! pieces of one session (deck, draw engine, layout registry, composer and
//! reading store) and dispatches each operation to its command.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or terminal formatting
//! - **Configuration**: `commands::config` works on the data directory alone,
//!   so it runs without a deck and without building this facade
//!
//! ## Generic Over Storage and Randomness
//!
//! `ArcanaApi<B: KeyValueStore, R: Rng>`:
//! - Production: `ArcanaApi<FileBackend, StdRng>`
//! - Testing: `ArcanaApi<MemBackend, StdRng>` seeded for repeatable draws

use crate::commands::{self, Spread};
use crate::compose::Composer;
use crate::config::ArcanaConfig;
use crate::deck::Deck;
use crate::draw::DrawEngine;
use crate::error::{ArcanaError, Result};
use crate::index::HistoryIndex;
use crate::layout::LayoutRegistry;
use crate::store::{KeyValueStore, ReadingStore};
use rand::Rng;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// The main API facade for arcana operations.
pub struct ArcanaApi<B: KeyValueStore, R: Rng> {
    engine: DrawEngine<R>,
    registry: LayoutRegistry,
    composer: Composer,
    store: ReadingStore<B>,
}

impl<B: KeyValueStore, R: Rng> ArcanaApi<B, R> {
    pub fn new(deck: Deck, backend: B, rng: R, config: &ArcanaConfig) -> Result<Self> {
        Ok(Self {
            engine: DrawEngine::with_rng(Arc::new(deck), rng),
            registry: LayoutRegistry::with_custom(&config.layouts)?,
            composer: Composer::new(config.default_category.as_str()),
            store: ReadingStore::with_key(backend, config.storage_key.as_str()),
        })
    }

    pub fn draw_spread(&mut self, layout: &str, category: &str) -> Result<commands::CmdResult> {
        commands::draw::run(
            &mut self.engine,
            &self.registry,
            &self.composer,
            layout,
            category,
        )
    }

    pub fn save_reading(
        &mut self,
        spread: &Spread,
        question: &str,
        personal_note: &str,
    ) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, spread, question, personal_note)
    }

    pub fn history(&mut self) -> Result<commands::CmdResult> {
        commands::history::run(&mut self.store)
    }

    pub fn show_readings<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::show::run(&mut self.store, &indexes)
    }

    pub fn delete_readings<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn export_spread(
        &self,
        spread: &Spread,
        question: &str,
        personal_note: &str,
        output: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&spread.to_record(question, personal_note), output)
    }

    pub fn export_reading(
        &mut self,
        index: &str,
        output: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::export::run_saved(&mut self.store, index, output)
    }

    pub fn layouts(&self) -> Result<commands::CmdResult> {
        commands::layouts::run(&self.registry)
    }
}

/// Loads the configured deck, or the bundled one when none is configured.
pub fn load_deck(config: &ArcanaConfig) -> Result<Deck> {
    match &config.deck_path {
        Some(path) => Deck::load(path),
        None => Deck::bundled(),
    }
}

fn parse_index(input: &str) -> Result<HistoryIndex> {
    HistoryIndex::from_str(input).map_err(ArcanaError::Api)
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<HistoryIndex>> {
    inputs.iter().map(|s| parse_index(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::deck_of;
    use crate::model::LayoutTemplate;
    use crate::store::memory::MemBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api(config: &ArcanaConfig) -> ArcanaApi<MemBackend, StdRng> {
        ArcanaApi::new(
            deck_of(&["A", "B", "C", "D"]),
            MemBackend::new(),
            StdRng::seed_from_u64(11),
            config,
        )
        .unwrap()
    }

    #[test]
    fn draw_save_list_delete() {
        let mut api = api(&ArcanaConfig::default());
        let spread = api.draw_spread("timeline", "love").unwrap().spread.unwrap();
        api.save_reading(&spread, "first", "").unwrap();
        let spread = api.draw_spread("single", "").unwrap().spread.unwrap();
        api.save_reading(&spread, "second", "").unwrap();

        let listed = api.history().unwrap().listed_readings;
        assert_eq!(listed[0].record.question, "second");
        assert_eq!(listed[0].record.card_entries.len(), 1);
        assert_eq!(listed[1].record.card_entries.len(), 3);

        api.delete_readings(&["2"]).unwrap();
        let listed = api.history().unwrap().listed_readings;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.question, "second");
    }

    #[test]
    fn rejects_malformed_index() {
        let mut api = api(&ArcanaConfig::default());
        let err = api.delete_readings(&["first"]).unwrap_err();
        assert!(matches!(err, ArcanaError::Api(_)));
        assert!(err.is_user_error());
    }

    #[test]
    fn uses_configured_layouts_and_fallback() {
        let config = ArcanaConfig {
            default_category: "love".into(),
            layouts: vec![LayoutTemplate::new("pair", ["Me", "You"])],
            ..ArcanaConfig::default()
        };
        let mut api = api(&config);
        let spread = api.draw_spread("pair", "").unwrap().spread.unwrap();
        assert_eq!(spread.entries.len(), 2);
        assert!(spread.entries.iter().all(|e| e.body_text.ends_with("love")));
        assert_eq!(api.layouts().unwrap().layouts.len(), 5);
    }

    #[test]
    fn export_spread_uses_record_shape() {
        let mut api = api(&ArcanaConfig::default());
        let spread = api.draw_spread("choice", "").unwrap().spread.unwrap();
        let text = api
            .export_spread(&spread, "Which way?", "left", None)
            .unwrap()
            .transcript
            .unwrap();
        assert!(text.contains("Layout: choice"));
        assert!(text.contains("Option A: "));
        assert!(text.contains("Personal note: left"));
    }

    #[test]
    fn invalid_custom_layout_fails_init() {
        let config = ArcanaConfig {
            layouts: vec![LayoutTemplate::new("empty", Vec::<String>::new())],
            ..ArcanaConfig::default()
        };
        let result = ArcanaApi::new(
            deck_of(&["A"]),
            MemBackend::new(),
            StdRng::seed_from_u64(0),
            &config,
        );
        assert!(matches!(result, Err(ArcanaError::InvalidLayout(_))));
    }
}

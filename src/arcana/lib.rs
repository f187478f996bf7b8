//! # Arcana Architecture
//!
//! Arcana is a **UI-agnostic tarot reading library** with a small CLI client.
//! It draws cards without replacement, lays them out in named spreads,
//! composes an interpretation from per-card text, and keeps a journal of
//! saved readings.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns one session: deck, engine, layouts, composer, store │
//! │  - Parses history indexes, returns structured CmdResults    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - draw, save, history, show, delete, export, layouts       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (deck, draw, layout, compose) + Storage (store/)    │
//! │  - DrawEngine samples without replacement, reshuffles       │
//! │  - ReadingStore persists records over a KeyValueStore       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! A layout name resolves to its position labels; the draw engine supplies
//! one card per label; the composer picks each card's text for the reading
//! category; a saved reading snapshots that text into a [`model::ReadingRecord`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Logging goes through `tracing`; the binary decides where it
//! ends up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Orchestration for each operation
//! - [`deck`]: The immutable card catalog
//! - [`draw`]: Sampling without replacement
//! - [`layout`]: Spread templates
//! - [`compose`]: Interpretation text selection
//! - [`store`]: Reading history persistence
//! - [`index`]: Newest-first display numbering of the history
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod compose;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod index;
pub mod layout;
pub mod model;
pub mod store;

use crate::config::ArcanaConfig;
use crate::index::DisplayReading;
use crate::model::{LayoutTemplate, ReadingRecord};
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod draw;
pub mod export;
pub mod history;
pub mod layouts;
pub mod save;
pub mod show;

pub use draw::Spread;

#[derive(Debug, Clone)]
pub struct ArcanaPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub spread: Option<Spread>,
    pub affected_readings: Vec<ReadingRecord>,
    pub listed_readings: Vec<DisplayReading>,
    pub layouts: Vec<LayoutTemplate>,
    pub transcript: Option<String>,
    pub export_path: Option<PathBuf>,
    pub config: Option<ArcanaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spread = Some(spread);
        self
    }

    pub fn with_affected_readings(mut self, readings: Vec<ReadingRecord>) -> Self {
        self.affected_readings = readings;
        self
    }

    pub fn with_listed_readings(mut self, readings: Vec<DisplayReading>) -> Self {
        self.listed_readings = readings;
        self
    }

    pub fn with_layouts(mut self, layouts: Vec<LayoutTemplate>) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn with_transcript(mut self, transcript: String) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn with_config(mut self, config: ArcanaConfig) -> Self {
        self.config = Some(config);
        self
    }
}

//! # Layout Registry
//!
//! Maps a spread name to its ordered position labels. The number of labels is
//! the number of cards drawn, and the label order is the order cards are
//! drawn, composed and saved in.
//!
//! The registry is fixed once built: the four built-in spreads plus any
//! layouts declared in the config file.

use crate::error::{ArcanaError, Result};
use crate::model::LayoutTemplate;

pub const SINGLE: &str = "single";
pub const TIMELINE: &str = "timeline";
pub const TRIANGLE: &str = "triangle";
pub const CHOICE: &str = "choice";

fn builtin_layouts() -> Vec<LayoutTemplate> {
    vec![
        LayoutTemplate::new(SINGLE, ["Card"]),
        LayoutTemplate::new(TIMELINE, ["Past", "Present", "Future"]),
        LayoutTemplate::new(TRIANGLE, ["Theme", "Obstacle", "Advice"]),
        LayoutTemplate::new(CHOICE, ["Option A", "Option B", "Advice"]),
    ]
}

#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: Vec<LayoutTemplate>,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LayoutRegistry {
    pub fn builtin() -> Self {
        Self {
            layouts: builtin_layouts(),
        }
    }

    /// Built-in layouts followed by `custom`, in declaration order.
    pub fn with_custom(custom: &[LayoutTemplate]) -> Result<Self> {
        let mut registry = Self::builtin();
        for layout in custom {
            if layout.name.trim().is_empty() {
                return Err(ArcanaError::InvalidLayout("layout name is empty".into()));
            }
            if layout.positions.is_empty() {
                return Err(ArcanaError::InvalidLayout(format!(
                    "'{}' has no positions",
                    layout.name
                )));
            }
            if registry.contains(&layout.name) {
                return Err(ArcanaError::InvalidLayout(format!(
                    "'{}' is already defined",
                    layout.name
                )));
            }
            registry.layouts.push(layout.clone());
        }
        Ok(registry)
    }

    pub fn resolve(&self, name: &str) -> Result<&LayoutTemplate> {
        self.layouts
            .iter()
            .find(|layout| layout.name == name)
            .ok_or_else(|| ArcanaError::UnknownLayout(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layouts.iter().any(|layout| layout.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.layouts.iter().map(|layout| layout.name.as_str()).collect()
    }

    pub fn templates(&self) -> &[LayoutTemplate] {
        &self.layouts
    }
}

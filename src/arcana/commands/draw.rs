use crate::commands::{CmdMessage, CmdResult};
use crate::compose::{ComposedEntry, Composer};
use crate::draw::DrawEngine;
use crate::error::Result;
use crate::layout::LayoutRegistry;
use crate::model::{DrawnCard, ReadingRecord};
use rand::Rng;
use tracing::{info, warn};

/// A freshly drawn and interpreted spread, not yet saved.
#[derive(Debug, Clone)]
pub struct Spread {
    pub layout_name: String,
    pub category: String,
    pub drawn: Vec<DrawnCard>,
    pub entries: Vec<ComposedEntry>,
}

impl Spread {
    /// Snapshot of this spread as a history record.
    pub fn to_record(&self, question: &str, personal_note: &str) -> ReadingRecord {
        ReadingRecord::from_entries(
            question,
            self.category.as_str(),
            self.layout_name.as_str(),
            &self.entries,
            personal_note,
        )
    }
}

/// Draws a new spread: every draw starts a fresh session, so the cards of
/// one spread never repeat. A card the deck has no text for stays in the
/// spread as an unavailable entry and is reported as a warning.
pub fn run<R: Rng>(
    engine: &mut DrawEngine<R>,
    registry: &LayoutRegistry,
    composer: &Composer,
    layout_name: &str,
    category: &str,
) -> Result<CmdResult> {
    let layout = registry.resolve(layout_name)?;

    engine.reset();
    let drawn: Vec<DrawnCard> = engine
        .draw_many(layout.card_count())?
        .into_iter()
        .zip(&layout.positions)
        .map(|(card, label)| card.with_position(label.as_str()))
        .collect();

    let mut result = CmdResult::default();
    let mut entries = Vec::with_capacity(drawn.len());
    for card in &drawn {
        match composer.compose_card(card, category) {
            Ok(entry) => entries.push(entry),
            Err(e) if e.is_data_integrity_error() => {
                warn!(card = %card.card.name, error = %e, "card unavailable in reading");
                result.add_message(CmdMessage::warning(format!(
                    "No reading available for {}: {}",
                    card.card.name, e
                )));
                entries.push(ComposedEntry::unavailable(card));
            }
            Err(e) => return Err(e),
        }
    }
    info!(layout = %layout.name, category, cards = drawn.len(), "drew spread");

    if !category.is_empty()
        && entries
            .iter()
            .any(|e| e.available && e.category != category)
    {
        result.add_message(CmdMessage::warning(format!(
            "Some cards have no '{}' reading; showing '{}' instead.",
            category,
            composer.fallback_category()
        )));
    }

    Ok(result.with_spread(Spread {
        layout_name: layout.name.clone(),
        category: category.to_string(),
        drawn,
        entries,
    }))
}

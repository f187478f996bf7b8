use crate::commands::{CmdMessage, CmdResult, Spread};
use crate::error::Result;
use crate::store::{KeyValueStore, ReadingStore};

pub fn run<B: KeyValueStore>(
    store: &mut ReadingStore<B>,
    spread: &Spread,
    question: &str,
    personal_note: &str,
) -> Result<CmdResult> {
    let record = spread.to_record(question, personal_note);
    store.append(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Reading saved."));
    Ok(result.with_affected_readings(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::draw;
    use crate::compose::Composer;
    use crate::deck::fixtures::deck_of;
    use crate::draw::DrawEngine;
    use crate::error::ArcanaError;
    use crate::layout::{LayoutRegistry, TRIANGLE};
    use crate::store::memory::fixtures::StoreFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn spread() -> Spread {
        let mut engine =
            DrawEngine::with_rng(Arc::new(deck_of(&["A", "B", "C"])), StdRng::seed_from_u64(3));
        draw::run(
            &mut engine,
            &LayoutRegistry::builtin(),
            &Composer::default(),
            TRIANGLE,
            "love",
        )
        .unwrap()
        .spread
        .unwrap()
    }

    #[test]
    fn appends_snapshot_to_history() {
        let mut fixture = StoreFixture::new().with_readings(1);
        let spread = spread();
        let result = run(&mut fixture.store, &spread, "What now?", "felt right").unwrap();

        let records = fixture.store.records().unwrap();
        assert_eq!(records.len(), 2);
        let saved = &records[1];
        assert_eq!(saved, &result.affected_readings[0]);
        assert_eq!(saved.question, "What now?");
        assert_eq!(saved.personal_note, "felt right");
        assert_eq!(saved.layout_name, TRIANGLE);
        let positions: Vec<_> = saved
            .card_entries
            .iter()
            .map(|e| e.position.as_deref().unwrap())
            .collect();
        assert_eq!(positions, vec!["Theme", "Obstacle", "Advice"]);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut fixture = StoreFixture::new();
        fixture.backend.set_simulate_write_error(true);
        let err = run(&mut fixture.store, &spread(), "q", "").unwrap_err();
        assert!(matches!(err, ArcanaError::StorageWrite(_)));
        fixture.backend.set_simulate_write_error(false);
        assert!(fixture.store.is_empty().unwrap());
    }
}

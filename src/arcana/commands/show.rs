use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayReading, HistoryIndex};
use crate::store::{KeyValueStore, ReadingStore};

pub fn run<B: KeyValueStore>(
    store: &mut ReadingStore<B>,
    indexes: &[HistoryIndex],
) -> Result<CmdResult> {
    let len = store.len()?;
    let mut listed = Vec::with_capacity(indexes.len());
    for index in indexes {
        let stored_index = index.to_stored(len)?;
        let record = store.get(stored_index)?.clone();
        listed.push(DisplayReading {
            index: *index,
            stored_index,
            record,
        });
    }
    Ok(CmdResult::default().with_listed_readings(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcanaError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_by_display_index() {
        let mut fixture = StoreFixture::new().with_readings(3);
        let result = run(&mut fixture.store, &[HistoryIndex::new(1), HistoryIndex::new(3)]).unwrap();
        assert_eq!(result.listed_readings[0].record.question, "Question 3");
        assert_eq!(result.listed_readings[0].stored_index, 2);
        assert_eq!(result.listed_readings[1].record.question, "Question 1");
    }

    #[test]
    fn rejects_missing_index() {
        let mut fixture = StoreFixture::new().with_readings(2);
        let err = run(&mut fixture.store, &[HistoryIndex::new(5)]).unwrap_err();
        assert!(matches!(err, ArcanaError::IndexOutOfRange { index: 5, len: 2 }));
    }
}

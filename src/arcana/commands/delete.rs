use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::HistoryIndex;
use crate::store::{KeyValueStore, ReadingStore};

/// Deletes readings by display index. All indexes refer to the listing as it
/// was before this call; they are resolved up front and removed from the
/// highest stored index down so earlier removals do not shift later ones.
pub fn run<B: KeyValueStore>(
    store: &mut ReadingStore<B>,
    indexes: &[HistoryIndex],
) -> Result<CmdResult> {
    let len = store.len()?;
    let mut targets = Vec::with_capacity(indexes.len());
    for index in indexes {
        targets.push((index.to_stored(len)?, *index));
    }
    targets.sort_by(|a, b| b.0.cmp(&a.0));
    targets.dedup_by_key(|(stored, _)| *stored);

    let mut result = CmdResult::default();
    for (stored_index, display_index) in targets {
        let removed = store.delete_at(stored_index)?;
        result.add_message(CmdMessage::success(format!(
            "Reading deleted ({}): {}",
            display_index,
            removed.question
        )));
        result.affected_readings.push(removed);
    }

    Ok(result)
}

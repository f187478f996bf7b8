use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_readings;
use crate::store::{KeyValueStore, ReadingStore};
use tracing::warn;

/// Lists saved readings newest first. An unreadable or corrupt history is
/// shown as empty with a warning rather than failing the command.
pub fn run<B: KeyValueStore>(store: &mut ReadingStore<B>) -> Result<CmdResult> {
    let records = match store.records() {
        Ok(records) => records,
        Err(e) if e.is_storage_error() => {
            warn!(error = %e, "reading history unavailable");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Reading history unavailable: {}",
                e
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let listed = index_readings(records);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No saved readings."));
    }
    Ok(result.with_listed_readings(listed))
}

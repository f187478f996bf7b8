use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArcanaError, Result};
use crate::index::HistoryIndex;
use crate::model::ReadingRecord;
use crate::store::{KeyValueStore, ReadingStore};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the transcript of `record` to `output`, or only returns it when no
/// output path is given.
pub fn run(record: &ReadingRecord, output: Option<&Path>) -> Result<CmdResult> {
    let text = transcript(record);
    let mut result = CmdResult::default();

    if let Some(path) = output {
        let path = if path.is_dir() {
            path.join(default_filename(record))
        } else {
            path.to_path_buf()
        };
        fs::write(&path, &text).map_err(ArcanaError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Exported to {}",
            path.display()
        )));
        result.export_path = Some(path);
    }

    Ok(result.with_transcript(text))
}

/// Exports a saved reading addressed by its display index.
pub fn run_saved<B: KeyValueStore>(
    store: &mut ReadingStore<B>,
    index: HistoryIndex,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let stored_index = index.to_stored(store.len()?)?;
    let record = store.get(stored_index)?.clone();
    run(&record, output)
}

pub fn default_filename(record: &ReadingRecord) -> PathBuf {
    PathBuf::from(format!(
        "tarot-reading-{}.txt",
        record.timestamp.format("%Y-%m-%d_%H-%M-%S")
    ))
}

pub fn transcript(record: &ReadingRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tarot Reading");
    let _ = writeln!(out, "Date: {}", record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "Question: {}", record.question);
    let _ = writeln!(out, "Category: {}", record.category);
    let _ = writeln!(out, "Layout: {}", record.layout_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Cards:");

    for (i, entry) in record.card_entries.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        match &entry.position {
            Some(position) => {
                let _ = writeln!(out, "{}: {} ({})", position, entry.name, entry.orientation);
            }
            None => {
                let _ = writeln!(out, "{} ({})", entry.name, entry.orientation);
            }
        }
        let _ = writeln!(out, "Interpretation: {}", entry.interpretation_text);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Personal note: {}", record.personal_note);
    out
}

//! # History Indexes
//!
//! The history is shown newest first and numbered from 1, so `1` is always
//! the most recent reading. The store, however, keeps readings oldest first
//! and only understands stored indexes. [`HistoryIndex`] is the one place
//! the two are converted:
//!
//! ```text
//! stored:   0      1      2        (oldest .. newest)
//! display:  3      2      1
//! stored_index = len - display
//! ```
//!
//! Every delete or show goes through [`HistoryIndex::to_stored`], never
//! through arithmetic at the call site.

use crate::error::{ArcanaError, Result};
use crate::model::ReadingRecord;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in the newest-first history listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryIndex(usize);

impl HistoryIndex {
    pub fn new(display: usize) -> Self {
        Self(display)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Stored-order index for a history of `len` readings.
    pub fn to_stored(self, len: usize) -> Result<usize> {
        if self.0 == 0 || self.0 > len {
            return Err(ArcanaError::IndexOutOfRange { index: self.0, len });
        }
        Ok(len - self.0)
    }

    /// Display index of the reading at `stored` in a history of `len` readings.
    pub fn from_stored(stored: usize, len: usize) -> Self {
        Self(len - stored)
    }
}

impl fmt::Display for HistoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HistoryIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(HistoryIndex(n)),
            _ => Err(format!("Invalid history index: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayReading {
    pub index: HistoryIndex,
    pub stored_index: usize,
    pub record: ReadingRecord,
}

/// Numbers stored-order records for display, newest first.
pub fn index_readings(records: &[ReadingRecord]) -> Vec<DisplayReading> {
    let len = records.len();
    records
        .iter()
        .enumerate()
        .rev()
        .map(|(stored_index, record)| DisplayReading {
            index: HistoryIndex::from_stored(stored_index, len),
            stored_index,
            record: record.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::record;

    #[test]
    fn newest_is_display_one() {
        let records = vec![record("old"), record("mid"), record("new")];
        let indexed = index_readings(&records);
        assert_eq!(indexed[0].index, HistoryIndex::new(1));
        assert_eq!(indexed[0].record.question, "new");
        assert_eq!(indexed[0].stored_index, 2);
        assert_eq!(indexed[2].index, HistoryIndex::new(3));
        assert_eq!(indexed[2].stored_index, 0);
    }

    #[test]
    fn converts_display_to_stored() {
        assert_eq!(HistoryIndex::new(1).to_stored(3).unwrap(), 2);
        assert_eq!(HistoryIndex::new(3).to_stored(3).unwrap(), 0);
        for stored in 0..5 {
            let display = HistoryIndex::from_stored(stored, 5);
            assert_eq!(display.to_stored(5).unwrap(), stored);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            HistoryIndex::new(4).to_stored(3),
            Err(ArcanaError::IndexOutOfRange { index: 4, len: 3 })
        ));
        assert!(HistoryIndex::new(0).to_stored(3).is_err());
        assert!(HistoryIndex::new(1).to_stored(0).is_err());
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("2".parse::<HistoryIndex>().unwrap(), HistoryIndex::new(2));
        assert!("0".parse::<HistoryIndex>().is_err());
        assert!("p1".parse::<HistoryIndex>().is_err());
    }
}

use super::KeyValueStore;
use crate::error::{ArcanaError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

#[derive(Default)]
struct MemState {
    values: RefCell<HashMap<String, String>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

/// In-memory key-value backend for testing. Does NOT persist data.
///
/// Clones share the same underlying map, so a test can keep a handle to the
/// backend after moving a clone into a store.
#[derive(Clone, Default)]
pub struct MemBackend {
    state: Rc<MemState>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing encoding.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.state
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.values.borrow().get(key).cloned()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.state.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.state.simulate_write_error.set(simulate);
    }
}

impl KeyValueStore for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.state.simulate_read_error.get() {
            return Err(ArcanaError::StorageRead(io::Error::other(
                "Simulated read error",
            )));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.state.simulate_write_error.get() {
            return Err(ArcanaError::StorageWrite(io::Error::other(
                "Simulated write error",
            )));
        }
        self.state
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CardEntry, Orientation, ReadingRecord};
    use crate::store::ReadingStore;
    use chrono::{TimeZone, Utc};

    /// A three-card timeline reading asking `question`.
    pub fn record(question: &str) -> ReadingRecord {
        let entry = |position: &str, name: &str, orientation| CardEntry {
            position: Some(position.to_string()),
            name: name.to_string(),
            orientation,
            interpretation_text: format!("{} as {}", name, position),
        };
        ReadingRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap(),
            question: question.to_string(),
            category: "general".to_string(),
            layout_name: "timeline".to_string(),
            card_entries: vec![
                entry("Past", "The Fool", Orientation::Upright),
                entry("Present", "The Tower", Orientation::Reversed),
                entry("Future", "The Star", Orientation::Upright),
            ],
            personal_note: format!("note on {}", question),
        }
    }

    pub struct StoreFixture {
        pub backend: MemBackend,
        pub store: ReadingStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let backend = MemBackend::new();
            Self {
                store: ReadingStore::new(backend.clone()),
                backend,
            }
        }

        /// Appends readings "Question 1" .. "Question N", oldest first.
        pub fn with_readings(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .append(record(&format!("Question {}", i + 1)))
                    .unwrap();
            }
            self
        }
    }
}

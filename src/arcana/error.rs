use crate::model::Orientation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcanaError {
    #[error("Deck has no cards")]
    EmptyDeck,

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Could not read deck {}: {source}", path.display())]
    DeckLoad {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Card '{card}' has no '{category}' meaning when {orientation}")]
    MissingMeaning {
        card: String,
        orientation: Orientation,
        category: String,
    },

    #[error("Storage read error: {0}")]
    StorageRead(#[source] std::io::Error),

    #[error("Storage write error: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("Reading history is corrupt: {0}")]
    CorruptStore(String),

    #[error("Index {index} out of range (history has {len} readings)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ArcanaError {
    /// Errors caused by what the user typed; the caller should re-prompt.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ArcanaError::UnknownLayout(_) | ArcanaError::Api(_) | ArcanaError::IndexOutOfRange { .. }
        )
    }

    /// Errors in deck or layout data rather than in user input.
    pub fn is_data_integrity_error(&self) -> bool {
        matches!(
            self,
            ArcanaError::MissingMeaning { .. }
                | ArcanaError::InvalidDeck(_)
                | ArcanaError::InvalidLayout(_)
                | ArcanaError::EmptyDeck
        )
    }

    /// Errors from the persistence substrate. Reads may fall back to an empty
    /// history view; writes must never be reported as successful.
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            ArcanaError::StorageRead(_) | ArcanaError::StorageWrite(_) | ArcanaError::CorruptStore(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ArcanaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        assert!(ArcanaError::UnknownLayout("x".into()).is_user_error());
        assert!(ArcanaError::CorruptStore("bad".into()).is_storage_error());
        assert!(!ArcanaError::CorruptStore("bad".into()).is_user_error());
        let missing = ArcanaError::MissingMeaning {
            card: "The Fool".into(),
            orientation: Orientation::Reversed,
            category: "love".into(),
        };
        assert!(missing.is_data_integrity_error());
        assert_eq!(
            missing.to_string(),
            "Card 'The Fool' has no 'love' meaning when reversed"
        );
    }
}

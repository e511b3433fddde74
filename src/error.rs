use thiserror::Error;

/// Reasons a single card could not be enriched. Never fatal for a run.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No exact match on Scryfall for card: {0}")]
    NotFound(String),

    #[error("Scryfall request for card {name} failed: {reason}")]
    Transport { name: String, reason: String },

    #[error("Card {0} has no image available")]
    MissingImageData(String),

    #[error("Card {0} has no type line")]
    MissingTypeLine(String),
}

/// Failures that abort the processing of one deck.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row} has {fields} fields but the header has {columns} columns")]
    RowTooLong {
        row: usize,
        fields: usize,
        columns: usize,
    },
}

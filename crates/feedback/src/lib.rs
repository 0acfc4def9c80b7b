//! Append-only log of human-confirmed classifications, kept in SQLite for
//! later retraining.

mod record;
mod store;

pub use record::FeedbackRecord;
pub use store::{
    create_table_sql, insert_sql, FeedbackConnection, FeedbackStore, StoredFeedback, TABLE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback collection is disabled")]
    Disabled,

    #[error(
        "record does not match the characteristic schema \
         (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;

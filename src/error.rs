use std::path::PathBuf;

use thiserror::Error;

/// The first validation rule a [`crate::model::Student`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StudentValidationError {
    #[error("ID must be a positive number.")]
    NonPositiveId,

    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Marks must be between 0 and 100.")]
    MarksOutOfRange,
}

/// Underlying cause of a failed load or save.
#[derive(Debug, Error)]
pub enum StoreCause {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON has no representation for NaN or infinity; serde_json would write `null`.
    #[error("student {id} has non-finite marks")]
    NonFiniteMarks { id: i32 },
}

/// Whole-list persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load students from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: StoreCause,
    },

    #[error("failed to save students to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: StoreCause,
    },
}

impl StoreError {
    pub fn cause(&self) -> &StoreCause {
        match self {
            StoreError::Load { source, .. } | StoreError::Save { source, .. } => source,
        }
    }
}

/// Edits to the in-memory roster that were refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error(transparent)]
    Invalid(#[from] StudentValidationError),

    #[error("A student with ID {0} already exists.")]
    DuplicateId(i32),

    #[error("No student with ID {0}.")]
    NotFound(i32),
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns. Found headers: {found:?}. Need columns for: id, name, marks.")]
    MissingColumns { found: Vec<String> },
}

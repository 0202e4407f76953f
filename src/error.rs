use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("duplicate course id in catalog: {0}")]
    DuplicateCourse(u32),

    #[error("unknown course id: {0}")]
    UnknownCourse(u32),

    #[error("invalid saved-list operation '{0}' (use toggle:ID, up:ID or down:ID)")]
    InvalidOp(String),

    #[error("invalid grading item '{0}' (use label=percentage)")]
    InvalidGradingItem(String),

    #[error("output encoding failed: {0}")]
    Render(String),
}

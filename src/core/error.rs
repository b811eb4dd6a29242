//! Error types for the classification engine and boundary generator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error(
        "Insufficient class diversity: need points of both labels, got {positives} positive and {negatives} negative"
    )]
    InsufficientClassDiversity { positives: usize, negatives: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid label: expected 0 or 1, got {0}")]
    InvalidLabel(i64),

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, VizError>;

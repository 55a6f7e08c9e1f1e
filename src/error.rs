use std::path::PathBuf;
use thiserror::Error;

use crate::data::DatasetId;

#[derive(Error, Debug)]
pub enum CorpusError {
    // --- I/O ---
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    // --- Datasets ---
    #[error("{} dataset not found at: '{}'\nPlease download the dataset from:\n{url}", dataset.display_name(), path.display())]
    DatasetNotFound {
        dataset: DatasetId,
        path: PathBuf,
        url: &'static str,
    },

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Malformed row {row} in {path}: {reason}")]
    MalformedRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error("Unknown label `{value}` for {dataset} at row {row}")]
    UnknownLabel {
        dataset: DatasetId,
        row: usize,
        value: String,
    },

    // --- Pipeline ---
    #[error("Failed to fetch language model into {path}: {source}")]
    ModelFetch {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Language model load failed for {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("Worker pool error: {0}")]
    ThreadPool(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // --- Config ---
    #[error("Invalid config: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, CorpusError>;

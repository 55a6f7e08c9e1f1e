// src/data/sources.rs
//! Where each dataset lives on disk and where to get it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::DatasetId;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SENTIMENT_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = "data";

impl DatasetId {
    /// File location relative to the data root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            DatasetId::Sentiment140 => "sentiment140/training.1600000.processed.noemoticon.csv",
            DatasetId::AmazonReviews => "amazonreviews/train.ft.txt.bz2",
            DatasetId::Imdb50k => "imdb50k/IMDB Dataset.csv",
            DatasetId::Test => "test/test.csv",
        }
    }

    pub fn source_url(&self) -> &'static str {
        match self {
            DatasetId::Sentiment140 => "https://www.kaggle.com/datasets/kazanova/sentiment140",
            DatasetId::AmazonReviews => "https://www.kaggle.com/datasets/bittlingmayer/amazonreviews",
            DatasetId::Imdb50k => {
                "https://www.kaggle.com/datasets/lakshmi25npathi/imdb-dataset-of-50k-movie-reviews"
            }
            DatasetId::Test => "https://huggingface.co/datasets/mteb/tweet_sentiment_extraction",
        }
    }
}

/// Dataset locations.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    overrides: HashMap<DatasetId, PathBuf>,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Reads the data root from `SENTIMENT_DATA_DIR`, falling back to `data`.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// Points one dataset at an explicit file.
    pub fn with_path(mut self, dataset: DatasetId, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(dataset, path.into());
        self
    }

    pub fn path_for(&self, dataset: DatasetId) -> PathBuf {
        match self.overrides.get(&dataset) {
            Some(path) => path.clone(),
            None => self.data_dir.join(dataset.relative_path()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

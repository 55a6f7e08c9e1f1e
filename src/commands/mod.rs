//! Commands Module
//!
//! All CLI subcommand implementations.

pub mod info;
pub mod load;
pub mod tokenize;

use std::path::PathBuf;

use sentiment_corpus::DataConfig;

/// `--data-dir` wins over `SENTIMENT_DATA_DIR`.
pub fn data_config(data_dir: Option<PathBuf>) -> DataConfig {
    match data_dir {
        Some(dir) => DataConfig::new(dir),
        None => DataConfig::from_env(),
    }
}

// src/data/mod.rs

mod dataset;
pub mod labels;
mod loader;
mod sources;

pub use dataset::{DatasetId, Label, LabeledCorpus};
pub use loader::{load_data, DatasetLoader, LoadOptions};
pub use sources::{DataConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR};

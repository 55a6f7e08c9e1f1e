//! sentiment-corpus: sentiment dataset loaders and a batch lemma tokenizer

pub mod data;
pub mod error;
pub mod logger;
pub mod tokenizer;
pub mod utils;

// Re-exports principais
pub use data::{
    load_data, DataConfig, DatasetId, DatasetLoader, Label, LabeledCorpus, LoadOptions,
};
pub use error::{CorpusError, Result};
pub use tokenizer::{
    tokenize, LanguageModel, Pipeline, PipelineConfig, TextNormalizer, Token, TokenizeOptions,
};

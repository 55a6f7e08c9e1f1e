//! Batch lemma tokenizer.

mod lemma;
mod lexicon;
pub mod lexeme;
mod model;
mod normalize;
mod pipeline;
mod segment;

pub use model::{LanguageModel, ModelMeta, LEMMA_EXCEPTIONS_FILE, META_FILE, STOP_WORDS_FILE};
pub use normalize::TextNormalizer;
pub use pipeline::{tokenize, Pipeline, PipelineConfig, Token, TokenizeOptions, MODEL_DIR_ENV};
pub use segment::segment;

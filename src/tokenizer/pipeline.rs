// src/tokenizer/pipeline.rs
//! Lemma pipeline: normalize -> segment -> lexical attributes -> lemma -> filter.

use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

use super::lexeme::{is_punct, like_email, like_num, like_url};
use super::segment::segment;
use super::{LanguageModel, TextNormalizer};
use crate::error::{CorpusError, Result};
use crate::logger::Progress;

/// Environment variable pointing at an on-disk language model.
pub const MODEL_DIR_ENV: &str = "SENTIMENT_MODEL_DIR";

static GLOBAL: OnceCell<Pipeline> = OnceCell::new();

/// Where the pipeline gets its language model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// `None` = modelo embutido
    pub model_dir: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        let model_dir = std::env::var_os(MODEL_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Self { model_dir }
    }

    pub fn with_model_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: Some(dir.into()),
        }
    }
}

/// Per-call tokenization options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Documents per dispatched batch
    pub batch_size: usize,
    /// Worker threads
    pub n_jobs: usize,
    /// Minimum lemma length, in characters
    pub character_threshold: usize,
    pub show_progress: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            batch_size: 512,
            n_jobs: 4,
            character_threshold: 2,
            show_progress: true,
        }
    }
}

impl TokenizeOptions {
    pub fn quiet() -> Self {
        Self {
            show_progress: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(CorpusError::ConfigError("batch_size must be > 0".to_string()));
        }
        if self.n_jobs == 0 {
            return Err(CorpusError::ConfigError("n_jobs must be > 0".to_string()));
        }
        Ok(())
    }
}

/// One annotated surface token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
    pub like_email: bool,
    pub like_url: bool,
    pub like_num: bool,
}

impl Token {
    /// Conjunctive filter applied before a lemma is emitted.
    pub fn is_content(&self, character_threshold: usize) -> bool {
        !self.is_stop
            && !self.is_punct
            && !self.like_email
            && !self.like_url
            && !self.like_num
            && self.lemma.chars().count() >= character_threshold
    }
}

/// Immutable after construction; shared across worker threads.
pub struct Pipeline {
    model: LanguageModel,
    normalizer: TextNormalizer,
}

impl Pipeline {
    pub fn new(model: LanguageModel) -> Self {
        Self {
            model,
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let model = match &config.model_dir {
            Some(dir) => LanguageModel::load_or_fetch(dir)?,
            None => LanguageModel::bundled(),
        };
        Ok(Self::new(model))
    }

    /// Process-wide pipeline, built from `PipelineConfig::from_env()` on first use.
    pub fn global() -> Result<&'static Pipeline> {
        GLOBAL.get_or_try_init(|| {
            debug!("initializing global pipeline");
            Pipeline::from_config(&PipelineConfig::from_env())
        })
    }

    /// Explicit startup initialization. A pipeline that already exists is kept.
    pub fn init_global(config: &PipelineConfig) -> Result<&'static Pipeline> {
        let mut created = false;
        let pipeline = GLOBAL.get_or_try_init(|| {
            created = true;
            Pipeline::from_config(config)
        })?;
        if !created {
            debug!("global pipeline already initialized, config ignored");
        }
        Ok(pipeline)
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    pub fn annotate(&self, text: &str) -> Vec<Token> {
        let normalized = self.normalizer.normalize(text);
        segment(&normalized)
            .into_iter()
            .map(|surface| {
                let lower = surface.to_lowercase();
                Token {
                    text: surface.to_string(),
                    lemma: self.model.lemmatize(&lower).trim().to_string(),
                    is_stop: self.model.is_stop(&lower),
                    is_punct: is_punct(surface),
                    like_email: like_email(surface),
                    like_url: like_url(surface),
                    like_num: like_num(surface),
                }
            })
            .collect()
    }

    /// Surviving lemmas of one document, in order.
    pub fn lemmas(&self, text: &str, character_threshold: usize) -> Vec<String> {
        self.annotate(text)
            .into_iter()
            .filter(|token| token.is_content(character_threshold))
            .map(|token| token.lemma)
            .collect()
    }

    /// Tokenizes `texts` on a pool of `n_jobs` threads; output `i` belongs to input `i`.
    pub fn tokenize_batch<S>(&self, texts: &[S], options: &TokenizeOptions) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        options.validate()?;
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.n_jobs)
            .thread_name(|i| format!("lemma-worker-{}", i))
            .build()
            .map_err(|e| CorpusError::ThreadPool(e.to_string()))?;

        info!(
            docs = texts.len(),
            batch_size = options.batch_size,
            n_jobs = options.n_jobs,
            "tokenizing"
        );

        let progress = Progress::new("Tokenizando", texts.len(), options.show_progress);
        let threshold = options.character_threshold;

        let batches: Vec<Vec<Vec<String>>> = pool.install(|| {
            texts
                .par_chunks(options.batch_size)
                .map(|batch| {
                    let out: Vec<Vec<String>> = batch
                        .iter()
                        .map(|text| self.lemmas(text.as_ref(), threshold))
                        .collect();
                    progress.inc(batch.len());
                    out
                })
                .collect()
        });
        progress.finish();

        Ok(batches.into_iter().flatten().collect())
    }
}

/// Tokenizes through the process-wide pipeline.
pub fn tokenize<S>(texts: &[S], options: &TokenizeOptions) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    Pipeline::global()?.tokenize_batch(texts, options)
}

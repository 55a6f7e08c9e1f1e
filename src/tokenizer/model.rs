// src/tokenizer/model.rs
//! English lexicon used by the pipeline: stop words and lemma exceptions.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use super::lemma;
use super::lexicon::LEMMA_EXCEPTIONS;
use crate::error::{CorpusError, Result};

pub const META_FILE: &str = "meta.json";
pub const STOP_WORDS_FILE: &str = "stop_words.txt";
pub const LEMMA_EXCEPTIONS_FILE: &str = "lemma_exceptions.tsv";

const BUNDLED_NAME: &str = "en_core_web";
const BUNDLED_LANG: &str = "en";
const BUNDLED_VERSION: &str = "1.0.0";

static BUNDLED_STOP_WORDS: &str = include_str!("../../resources/en_core_web/stop_words.txt");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelMeta {
    pub name: String,
    pub lang: String,
    pub version: String,
}

/// Stop list + lemma exception table
#[derive(Clone, Debug)]
pub struct LanguageModel {
    meta: ModelMeta,
    stop_words: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
}

impl LanguageModel {
    /// Model compiled into the binary.
    pub fn bundled() -> Self {
        let meta = ModelMeta {
            name: BUNDLED_NAME.to_string(),
            lang: BUNDLED_LANG.to_string(),
            version: BUNDLED_VERSION.to_string(),
        };
        let lemma_exceptions = LEMMA_EXCEPTIONS
            .iter()
            .map(|&(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect();

        Self {
            meta,
            stop_words: parse_stop_words(BUNDLED_STOP_WORDS),
            lemma_exceptions,
        }
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let meta_path = dir.join(META_FILE);
        if !meta_path.is_file() {
            return Err(model_load(dir, format!("missing {}", META_FILE)));
        }

        let meta_raw = fs::read_to_string(&meta_path).map_err(|e| model_load(dir, e.to_string()))?;
        let meta: ModelMeta =
            serde_json::from_str(&meta_raw).map_err(|e| model_load(dir, format!("{}: {}", META_FILE, e)))?;
        if meta.lang != BUNDLED_LANG {
            return Err(model_load(
                dir,
                format!("unsupported language `{}` (expected `{}`)", meta.lang, BUNDLED_LANG),
            ));
        }

        let stop_raw = fs::read_to_string(dir.join(STOP_WORDS_FILE))
            .map_err(|e| model_load(dir, format!("{}: {}", STOP_WORDS_FILE, e)))?;
        let lemma_raw = fs::read_to_string(dir.join(LEMMA_EXCEPTIONS_FILE))
            .map_err(|e| model_load(dir, format!("{}: {}", LEMMA_EXCEPTIONS_FILE, e)))?;
        let lemma_exceptions = parse_lemma_exceptions(&lemma_raw)
            .map_err(|reason| model_load(dir, format!("{}: {}", LEMMA_EXCEPTIONS_FILE, reason)))?;

        info!(model = %meta.name, version = %meta.version, path = %dir.display(), "language model loaded");

        Ok(Self {
            meta,
            stop_words: parse_stop_words(&stop_raw),
            lemma_exceptions,
        })
    }

    /// Writes the bundled model into `dir`.
    pub fn install(dir: &Path) -> Result<()> {
        let fetch_err = |source| CorpusError::ModelFetch {
            path: dir.to_path_buf(),
            source,
        };

        fs::create_dir_all(dir).map_err(fetch_err)?;
        fs::write(dir.join(STOP_WORDS_FILE), BUNDLED_STOP_WORDS).map_err(fetch_err)?;
        fs::write(dir.join(LEMMA_EXCEPTIONS_FILE), bundled_lemma_tsv()).map_err(fetch_err)?;

        let meta = Self::bundled().meta;
        let file = File::create(dir.join(META_FILE)).map_err(fetch_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &meta)
            .map_err(|e| fetch_err(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        writer.flush().map_err(fetch_err)?;

        Ok(())
    }

    /// Loads from `dir`, installing the bundled copy first when it is absent.
    pub fn load_or_fetch(dir: &Path) -> Result<Self> {
        if !dir.join(META_FILE).exists() {
            warn!(path = %dir.display(), "language model not found, installing bundled copy");
            Self::install(dir)?;
        }
        Self::load(dir)
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// `lower` must already be lowercased.
    pub fn is_stop(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Exception table first, suffix rules otherwise.
    pub fn lemmatize(&self, lower: &str) -> String {
        match self.lemma_exceptions.get(lower) {
            Some(lemma) => lemma.clone(),
            None => lemma::rule_lemma(lower),
        }
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::bundled()
    }
}

fn bundled_lemma_tsv() -> String {
    let mut out = String::from("# form\tlemma\n");
    for (form, lemma) in LEMMA_EXCEPTIONS {
        out.push_str(form);
        out.push('\t');
        out.push_str(lemma);
        out.push('\n');
    }
    out
}

fn parse_stop_words(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn parse_lemma_exceptions(raw: &str) -> std::result::Result<HashMap<String, String>, String> {
    let mut table = HashMap::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('\t') {
            Some((form, lemma)) if !form.trim().is_empty() && !lemma.trim().is_empty() => {
                table.insert(form.trim().to_lowercase(), lemma.trim().to_lowercase());
            }
            _ => return Err(format!("line {}: expected `form<TAB>lemma`", idx + 1)),
        }
    }
    Ok(table)
}

fn model_load(dir: &Path, reason: String) -> CorpusError {
    CorpusError::ModelLoad {
        path: dir.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resources_parse() {
        let table = parse_lemma_exceptions(&bundled_lemma_tsv()).unwrap();
        assert_eq!(table.len(), LEMMA_EXCEPTIONS.len());
        let model = LanguageModel::bundled();
        assert!(model.stop_word_count() > 300);
        assert!(model.is_stop("the"));
        assert!(model.is_stop("n't"));
        assert!(!model.is_stop("cat"));
        assert_eq!(model.lemmatize("was"), "be");
        assert_eq!(model.lemmatize("cats"), "cat");
    }

    #[test]
    fn test_bad_exception_line() {
        assert!(parse_lemma_exceptions("went go\n").is_err());
        assert_eq!(parse_lemma_exceptions("# c\n\nwent\tgo\n").unwrap().len(), 1);
    }

    #[test]
    fn test_install_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let model_dir = dir.path().join("en");
        let model = LanguageModel::load_or_fetch(&model_dir).unwrap();
        assert!(model_dir.join(META_FILE).exists());
        assert_eq!(model.meta(), LanguageModel::bundled().meta());
        assert_eq!(model.stop_word_count(), LanguageModel::bundled().stop_word_count());
    }

    #[test]
    fn test_load_missing_meta() {
        let dir = tempfile::tempdir().unwrap();
        let err = LanguageModel::load(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::ModelLoad { .. }));
    }

    #[test]
    fn test_fetch_into_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "x").unwrap();

        let err = LanguageModel::load_or_fetch(&file.join("en")).unwrap_err();
        match err {
            CorpusError::ModelFetch { path, .. } => assert_eq!(path, file.join("en")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_corrupt_meta_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        LanguageModel::install(dir.path()).unwrap();
        fs::write(dir.path().join(META_FILE), "{ not json").unwrap();

        let err = LanguageModel::load_or_fetch(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::ModelLoad { .. }));
        assert!(err.to_string().contains(META_FILE));
    }

    #[test]
    fn test_load_rejects_other_language() {
        let dir = tempfile::tempdir().unwrap();
        LanguageModel::install(dir.path()).unwrap();
        fs::write(
            dir.path().join(META_FILE),
            r#"{"name":"pt_core","lang":"pt","version":"1.0.0"}"#,
        )
        .unwrap();
        let err = LanguageModel::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported language"));
    }
}

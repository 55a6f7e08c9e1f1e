// src/data/loader.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bzip2::read::MultiBzDecoder;
use serde::Deserialize;
use tracing::{debug, info};

use super::{labels, DataConfig, DatasetId, Label, LabeledCorpus};
use crate::error::{CorpusError, Result};

const AMAZON_LABEL_PREFIX: &str = "__label__";
const SENTIMENT140_COLUMNS: usize = 6;
const SENTIMENT140_TARGET: usize = 0;
const SENTIMENT140_TEXT: usize = 5;

/// Per-call loader options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep neutral rows for datasets that have a neutral class.
    pub include_neutral: bool,
}

impl LoadOptions {
    pub fn with_neutral() -> Self {
        Self {
            include_neutral: true,
        }
    }
}

/// Loads datasets from the locations in a `DataConfig`.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: DataConfig,
}

impl DatasetLoader {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Parses `name` first, so an unknown identifier never touches the disk.
    pub fn load_by_name(&self, name: &str, options: LoadOptions) -> Result<LabeledCorpus> {
        let dataset: DatasetId = name.parse()?;
        self.load(dataset, options)
    }

    pub fn load(&self, dataset: DatasetId, options: LoadOptions) -> Result<LabeledCorpus> {
        let path = self.config.path_for(dataset);
        ensure_exists(dataset, &path)?;

        if options.include_neutral && dataset.neutral_label().is_none() {
            debug!(%dataset, "dataset has no neutral class, include_neutral ignored");
        }

        info!(%dataset, path = %path.display(), "loading dataset");
        let corpus = match dataset {
            DatasetId::Sentiment140 => load_sentiment140(&path, options)?,
            DatasetId::AmazonReviews => load_amazonreviews(&path)?,
            DatasetId::Imdb50k => load_imdb50k(&path)?,
            DatasetId::Test => load_test(&path, options)?,
        };
        info!(%dataset, records = corpus.len(), "dataset loaded");

        Ok(corpus)
    }
}

/// Loads a dataset by identifier with default locations and options.
pub fn load_data(name: &str) -> Result<(Vec<String>, Vec<Label>)> {
    let dataset: DatasetId = name.parse()?;
    let loader = DatasetLoader::new(DataConfig::from_env());
    Ok(loader.load(dataset, LoadOptions::default())?.into_parts())
}

fn ensure_exists(dataset: DatasetId, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CorpusError::DatasetNotFound {
            dataset,
            path: path.to_path_buf(),
            url: dataset.source_url(),
        })
    }
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> CorpusError + '_ {
    move |source| CorpusError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn keep(dataset: DatasetId, label: Label, options: LoadOptions) -> bool {
    options.include_neutral || dataset.neutral_label() != Some(label)
}

// ============ SENTIMENT140 ============
fn load_sentiment140(path: &Path, options: LoadOptions) -> Result<LabeledCorpus> {
    let dataset = DatasetId::Sentiment140;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error(path))?;

    let mut corpus = LabeledCorpus::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let row = idx + 1;
        let record = record.map_err(csv_error(path))?;

        if record.len() != SENTIMENT140_COLUMNS {
            return Err(malformed(
                path,
                row,
                format!("expected {} columns, got {}", SENTIMENT140_COLUMNS, record.len()),
            ));
        }

        let raw_target = decode_latin1(&record[SENTIMENT140_TARGET]);
        let target: i64 = raw_target.trim().parse().map_err(|_| CorpusError::UnknownLabel {
            dataset,
            row,
            value: raw_target.clone(),
        })?;
        let label = labels::sentiment140(target).ok_or_else(|| CorpusError::UnknownLabel {
            dataset,
            row,
            value: raw_target.clone(),
        })?;

        if keep(dataset, label, options) {
            corpus.push(decode_latin1(&record[SENTIMENT140_TEXT]), label);
        }
    }

    Ok(corpus)
}

// ============ AMAZONREVIEWS ============
fn load_amazonreviews(path: &Path) -> Result<LabeledCorpus> {
    let file = File::open(path).map_err(|source| read_error(path, source))?;
    let reader = BufReader::with_capacity(8 * 1024 * 1024, MultiBzDecoder::new(file));

    let mut corpus = LabeledCorpus::new();
    for (idx, line) in reader.lines().enumerate() {
        let row = idx + 1;
        let line = line.map_err(|source| read_error(path, source))?;
        if line.trim().is_empty() {
            continue;
        }
        let (text, label) = parse_fasttext_line(path, row, &line)?;
        corpus.push(text, label);
    }

    Ok(corpus)
}

/// `__label__2 great product` -> ("great product", 1)
pub(crate) fn parse_fasttext_line(path: &Path, row: usize, line: &str) -> Result<(String, Label)> {
    let (prefix, text) = line
        .split_once(' ')
        .ok_or_else(|| malformed(path, row, "missing label separator".to_string()))?;

    let raw = prefix
        .strip_prefix(AMAZON_LABEL_PREFIX)
        .ok_or_else(|| malformed(path, row, format!("expected `{}N` prefix", AMAZON_LABEL_PREFIX)))?;

    let unknown = || CorpusError::UnknownLabel {
        dataset: DatasetId::AmazonReviews,
        row,
        value: raw.to_string(),
    };
    let n: i64 = raw.parse().map_err(|_| unknown())?;
    let label = labels::amazonreviews(n).ok_or_else(unknown)?;

    Ok((text.to_string(), label))
}

// ============ IMDB50K ============
#[derive(Debug, Deserialize)]
struct ImdbRow {
    review: String,
    sentiment: String,
}

fn load_imdb50k(path: &Path) -> Result<LabeledCorpus> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_error(path))?;

    let mut corpus = LabeledCorpus::new();
    for (idx, row) in reader.deserialize::<ImdbRow>().enumerate() {
        let row_no = idx + 1;
        let row = row.map_err(csv_error(path))?;
        let label = labels::imdb50k(&row.sentiment).ok_or_else(|| CorpusError::UnknownLabel {
            dataset: DatasetId::Imdb50k,
            row: row_no,
            value: row.sentiment.clone(),
        })?;
        corpus.push(row.review, label);
    }

    Ok(corpus)
}

// ============ TEST ============
#[derive(Debug, Deserialize)]
struct TestRow {
    text: String,
    label: i64,
}

fn load_test(path: &Path, options: LoadOptions) -> Result<LabeledCorpus> {
    let dataset = DatasetId::Test;
    let mut reader = csv::Reader::from_path(path).map_err(csv_error(path))?;

    let mut corpus = LabeledCorpus::new();
    for (idx, row) in reader.deserialize::<TestRow>().enumerate() {
        let row_no = idx + 1;
        let row = row.map_err(csv_error(path))?;
        let label = labels::test(row.label).ok_or_else(|| CorpusError::UnknownLabel {
            dataset,
            row: row_no,
            value: row.label.to_string(),
        })?;
        if keep(dataset, label, options) {
            corpus.push(row.text, label);
        }
    }

    Ok(corpus)
}

fn read_error(path: &Path, source: std::io::Error) -> CorpusError {
    CorpusError::FileRead {
        path: PathBuf::from(path),
        source,
    }
}

fn malformed(path: &Path, row: usize, reason: String) -> CorpusError {
    CorpusError::MalformedRow {
        path: path.to_path_buf(),
        row,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasttext_line() {
        let path = Path::new("train.ft.txt.bz2");
        let (text, label) = parse_fasttext_line(path, 1, "__label__2 great product").unwrap();
        assert_eq!(text, "great product");
        assert_eq!(label, 1);

        let (text, label) = parse_fasttext_line(path, 1, "__label__1 broke after a day").unwrap();
        assert_eq!(text, "broke after a day");
        assert_eq!(label, 0);
    }

    #[test]
    fn test_fasttext_rejects_bad_prefix() {
        let path = Path::new("x");
        assert!(matches!(
            parse_fasttext_line(path, 3, "label2 nope"),
            Err(CorpusError::MalformedRow { row: 3, .. })
        ));
        assert!(matches!(
            parse_fasttext_line(path, 4, "__label__2"),
            Err(CorpusError::MalformedRow { row: 4, .. })
        ));
        assert!(matches!(
            parse_fasttext_line(path, 5, "__label__5 too many stars"),
            Err(CorpusError::UnknownLabel { row: 5, .. })
        ));
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(b"caf\xe9"), "café");
        assert_eq!(decode_latin1(b"plain"), "plain");
    }

    #[test]
    fn test_missing_file_names_path_and_url() {
        let loader = DatasetLoader::new(DataConfig::new("/nonexistent/root"));
        let err = loader.load(DatasetId::Imdb50k, LoadOptions::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/root/imdb50k/IMDB Dataset.csv"), "{}", msg);
        assert!(msg.contains(DatasetId::Imdb50k.source_url()));
    }
}

// src/data/dataset.rs

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::CorpusError;

/// Canonical sentiment label.
pub type Label = u8;

/// Supported datasets. Closed set; parse with `str::parse` (exact identifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetId {
    /// Sentiment140 tweets (headerless latin-1 CSV)
    Sentiment140,
    /// Amazon reviews in fastText format, bz2-compressed
    AmazonReviews,
    /// IMDB 50K movie reviews
    Imdb50k,
    /// Tweet sentiment extraction test split
    Test,
}

impl DatasetId {
    pub fn all() -> &'static [DatasetId] {
        &[
            DatasetId::Sentiment140,
            DatasetId::AmazonReviews,
            DatasetId::Imdb50k,
            DatasetId::Test,
        ]
    }

    /// Identifier accepted by `FromStr`.
    pub fn id(&self) -> &'static str {
        match self {
            DatasetId::Sentiment140 => "sentiment140",
            DatasetId::AmazonReviews => "amazonreviews",
            DatasetId::Imdb50k => "imdb50k",
            DatasetId::Test => "test",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetId::Sentiment140 => "Sentiment140",
            DatasetId::AmazonReviews => "Amazonreviews",
            DatasetId::Imdb50k => "IMDB50K",
            DatasetId::Test => "Test",
        }
    }

    /// Every label a load of this dataset can produce.
    pub fn label_set(&self) -> &'static [Label] {
        match self {
            DatasetId::Sentiment140 | DatasetId::Test => &[0, 1, 2],
            DatasetId::AmazonReviews | DatasetId::Imdb50k => &[0, 1],
        }
    }

    /// Label of the neutral class, for datasets that carry one.
    pub fn neutral_label(&self) -> Option<Label> {
        match self {
            DatasetId::Sentiment140 => Some(2),
            DatasetId::Test => Some(1),
            DatasetId::AmazonReviews | DatasetId::Imdb50k => None,
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DatasetId {
    type Err = CorpusError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sentiment140" => Ok(DatasetId::Sentiment140),
            "amazonreviews" => Ok(DatasetId::AmazonReviews),
            "imdb50k" => Ok(DatasetId::Imdb50k),
            "test" => Ok(DatasetId::Test),
            _ => Err(CorpusError::UnknownDataset(s.to_string())),
        }
    }
}

/// Parallel text/label columns of one loaded dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledCorpus {
    texts: Vec<String>,
    labels: Vec<Label>,
}

impl LabeledCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            texts: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, text: String, label: Label) {
        self.texts.push(text);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Label)> {
        self.texts
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().copied())
    }

    /// Record count per label, ordered by label.
    pub fn label_counts(&self) -> BTreeMap<Label, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Deterministic shuffle; texts and labels move together.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(&mut rng);

        let mut texts: Vec<Option<String>> =
            std::mem::take(&mut self.texts).into_iter().map(Some).collect();
        let labels = std::mem::take(&mut self.labels);

        for idx in order {
            if let Some(text) = texts[idx].take() {
                self.texts.push(text);
                self.labels.push(labels[idx]);
            }
        }
    }

    pub fn truncate(&mut self, len: usize) {
        self.texts.truncate(len);
        self.labels.truncate(len);
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Label>) {
        (self.texts, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for id in DatasetId::all() {
            assert_eq!(id.id().parse::<DatasetId>().unwrap(), *id);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        for name in ["IMDB50K", " imdb50k", "Sentiment140", "test "] {
            let err = name.parse::<DatasetId>().unwrap_err();
            assert!(matches!(err, CorpusError::UnknownDataset(ref s) if s == name));
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "yelp".parse::<DatasetId>().unwrap_err();
        assert!(matches!(err, CorpusError::UnknownDataset(ref s) if s == "yelp"));
        assert!(err.to_string().contains("yelp"));
    }

    #[test]
    fn test_neutral_is_in_label_set() {
        for id in DatasetId::all() {
            if let Some(neutral) = id.neutral_label() {
                assert!(id.label_set().contains(&neutral));
            }
        }
    }

    #[test]
    fn test_shuffle_keeps_pairs_aligned() {
        let mut corpus = LabeledCorpus::new();
        for i in 0..50u8 {
            corpus.push(format!("doc {}", i), i % 2);
        }
        corpus.shuffle(7);

        assert_eq!(corpus.len(), 50);
        for (text, label) in corpus.iter() {
            let i: u8 = text.trim_start_matches("doc ").parse().unwrap();
            assert_eq!(label, i % 2);
        }
        assert_ne!(corpus.texts()[0..5], ["doc 0", "doc 1", "doc 2", "doc 3", "doc 4"]);
    }

    #[test]
    fn test_label_counts() {
        let mut corpus = LabeledCorpus::new();
        corpus.push("a".into(), 0);
        corpus.push("b".into(), 1);
        corpus.push("c".into(), 1);
        let counts = corpus.label_counts();
        assert_eq!(counts.get(&0), Some(&1));
        assert_eq!(counts.get(&1), Some(&2));
    }
}

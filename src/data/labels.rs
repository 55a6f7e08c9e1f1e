// src/data/labels.rs
//! Raw label value -> canonical label, one total function per dataset.
//!
//! `None` means the raw value is outside the dataset's label set; callers turn
//! that into `CorpusError::UnknownLabel`.

use super::Label;

/// Sentiment140 `target`: 0 = negative, 2 = neutral, 4 = positive.
pub fn sentiment140(target: i64) -> Option<Label> {
    match target {
        0 => Some(0),
        4 => Some(1),
        2 => Some(2),
        _ => None,
    }
}

/// fastText prefix `__label__N`, 1-indexed.
pub fn amazonreviews(n: i64) -> Option<Label> {
    match n {
        1 => Some(0),
        2 => Some(1),
        _ => None,
    }
}

pub fn imdb50k(sentiment: &str) -> Option<Label> {
    match sentiment.trim() {
        "positive" => Some(1),
        "negative" => Some(0),
        _ => None,
    }
}

/// Test split: 0 = negative, 1 = neutral, 2 = positive (kept as-is).
pub fn test(label: i64) -> Option<Label> {
    match label {
        0 => Some(0),
        1 => Some(1),
        2 => Some(2),
        _ => None,
    }
}

//! Common test utilities and helpers
//!
//! Writes small dataset fixtures in each on-disk format.

#![allow(dead_code)]

use bzip2::write::BzEncoder;
use bzip2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sentiment_corpus::{DataConfig, DatasetId};

/// Writes `bytes` at the dataset's default location under `root`.
pub fn write_fixture(root: &Path, dataset: DatasetId, bytes: &[u8]) -> PathBuf {
    let path = DataConfig::new(root).path_for(dataset);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture dir");
    }
    fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Headerless latin-1 CSV: target, id, date, flag, user, text
pub fn write_sentiment140(root: &Path) -> PathBuf {
    let mut bytes = Vec::new();
    let rows: [(&str, &[u8]); 5] = [
        ("0", b"is upset that he can't update his Facebook"),
        ("4", b"loving the caf\xe9 downstairs"),
        ("2", b"just a regular tuesday"),
        ("4", b"great day, thanks everyone"),
        ("0", b"my whole body feels itchy"),
    ];
    for (i, (target, text)) in rows.iter().enumerate() {
        bytes.extend_from_slice(
            format!(
                "\"{}\",\"{}\",\"Mon Apr 06 22:19:45 PDT 2009\",\"NO_QUERY\",\"user{}\",\"",
                target,
                1467810369 + i,
                i
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(text);
        bytes.extend_from_slice(b"\"\n");
    }
    write_fixture(root, DatasetId::Sentiment140, &bytes)
}

/// bz2-compressed fastText lines
pub fn write_amazonreviews(root: &Path, lines: &[&str]) -> PathBuf {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::best());
    for line in lines {
        writeln!(encoder, "{}", line).expect("Failed to compress line");
    }
    let bytes = encoder.finish().expect("Failed to finish bz2 stream");
    write_fixture(root, DatasetId::AmazonReviews, &bytes)
}

pub fn write_imdb50k(root: &Path) -> PathBuf {
    let csv = "review,sentiment\n\
        \"One of the best films I have seen.<br /><br />Loved it\",positive\n\
        \"Boring, slow and far too long\",negative\n\
        \"The acting was superb\",positive\n";
    write_fixture(root, DatasetId::Imdb50k, csv.as_bytes())
}

pub fn write_test(root: &Path) -> PathBuf {
    let csv = "id,text,label,label_text\n\
        a1,\"I really hate mondays\",0,negative\n\
        a2,\"Going to the store later\",1,neutral\n\
        a3,\"Best concert ever!\",2,positive\n\
        a4,\"It is what it is\",1,neutral\n";
    write_fixture(root, DatasetId::Test, csv.as_bytes())
}

//! Load Command
//!
//! Loads one dataset and reports record count and label distribution.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use sentiment_corpus::utils::{format_number, format_percent};
use sentiment_corpus::{DatasetId, DatasetLoader, Label, LoadOptions, Result};

#[derive(Serialize)]
struct LoadReport {
    dataset: String,
    path: PathBuf,
    include_neutral: bool,
    records: usize,
    label_counts: BTreeMap<Label, usize>,
}

pub fn execute(name: &str, include_neutral: bool, data_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let dataset: DatasetId = name.parse()?;
    let loader = DatasetLoader::new(super::data_config(data_dir));
    let options = LoadOptions { include_neutral };

    let start = Instant::now();
    let corpus = loader.load(dataset, options)?;
    let elapsed = start.elapsed();

    let report = LoadReport {
        dataset: dataset.to_string(),
        path: loader.config().path_for(dataset),
        include_neutral,
        records: corpus.len(),
        label_counts: corpus.label_counts(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════════════════════════");
    println!("  📚 {}", dataset.display_name());
    println!("═══════════════════════════════════════════════════════════");
    println!("  Arquivo: {}", report.path.display());
    println!("  Registros: {}", format_number(report.records));
    for (label, count) in &report.label_counts {
        println!(
            "    label {}: {} ({})",
            label,
            format_number(*count),
            format_percent(*count, report.records)
        );
    }
    println!("  Tempo: {:.1}s", elapsed.as_secs_f64());
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}

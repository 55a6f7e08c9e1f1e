//! Info Command
//!
//! Shows where each dataset is expected and whether it is present.

use std::path::PathBuf;

use sentiment_corpus::{DatasetId, Result};

pub fn execute(data_dir: Option<PathBuf>) -> Result<()> {
    let config = super::data_config(data_dir);

    println!("═══════════════════════════════════════════════════════════");
    println!("  📊 Datasets ({})", config.data_dir().display());
    println!("═══════════════════════════════════════════════════════════");

    for &dataset in DatasetId::all() {
        let path = config.path_for(dataset);
        let status = if path.exists() { "✅" } else { "❌" };
        let labels: Vec<String> = dataset.label_set().iter().map(|l| l.to_string()).collect();

        println!("  {} {}", status, dataset.display_name());
        println!("    id: {}", dataset);
        println!("    arquivo: {}", path.display());
        println!("    labels: {{{}}}", labels.join(", "));
        if let Some(neutral) = dataset.neutral_label() {
            println!("    neutro: {} (removido por padrão)", neutral);
        }
        println!("    origem: {}", dataset.source_url());
        println!();
    }
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}

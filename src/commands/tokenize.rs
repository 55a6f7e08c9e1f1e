//! Tokenize Command
//!
//! Loads a dataset and reduces every text to its content lemmas. Nothing is
//! written to disk; the command reports token statistics and a few samples.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use sentiment_corpus::utils::format_number;
use sentiment_corpus::{DatasetId, DatasetLoader, LoadOptions, Pipeline, PipelineConfig, Result, TokenizeOptions};

pub struct TokenizeArgs {
    pub dataset: String,
    pub include_neutral: bool,
    pub limit: Option<usize>,
    pub seed: Option<u64>,
    pub batch_size: usize,
    pub n_jobs: usize,
    pub threshold: usize,
    pub show_progress: bool,
    pub data_dir: Option<PathBuf>,
    pub model_dir: Option<PathBuf>,
    pub show: usize,
}

const TOP_LEMMAS: usize = 10;

pub fn execute(args: TokenizeArgs) -> Result<()> {
    let dataset: DatasetId = args.dataset.parse()?;
    let options = TokenizeOptions {
        batch_size: args.batch_size,
        n_jobs: args.n_jobs,
        character_threshold: args.threshold,
        show_progress: args.show_progress,
    };
    options.validate()?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  🔢 Tokenizando {}", dataset.display_name());
    println!("═══════════════════════════════════════════════════════════");

    let pipeline_config = match args.model_dir {
        Some(dir) => PipelineConfig::with_model_dir(dir),
        None => PipelineConfig::from_env(),
    };
    let pipeline = Pipeline::init_global(&pipeline_config)?;
    let meta = pipeline.model().meta();
    println!("  Modelo: {} v{}", meta.name, meta.version);

    let loader = DatasetLoader::new(super::data_config(args.data_dir));
    let mut corpus = loader.load(
        dataset,
        LoadOptions {
            include_neutral: args.include_neutral,
        },
    )?;

    if let Some(seed) = args.seed {
        corpus.shuffle(seed);
    }
    if let Some(limit) = args.limit {
        corpus.truncate(limit);
    }
    println!("  Documentos: {}", format_number(corpus.len()));
    println!("  Batch: {} | Jobs: {} | Min chars: {}", options.batch_size, options.n_jobs, options.character_threshold);
    println!();

    let start = Instant::now();
    let tokenized = pipeline.tokenize_batch(corpus.texts(), &options)?;
    let elapsed = start.elapsed();

    let total_tokens: usize = tokenized.iter().map(Vec::len).sum();
    let empty_docs = tokenized.iter().filter(|t| t.is_empty()).count();

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for lemma in tokenized.iter().flatten() {
        *freq.entry(lemma.as_str()).or_insert(0) += 1;
    }
    let mut top: Vec<(&str, usize)> = freq.iter().map(|(k, v)| (*k, *v)).collect();
    top.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!();
    println!("  Tokens: {}", format_number(total_tokens));
    println!("  Vocabulário: {}", format_number(freq.len()));
    println!("  Docs sem tokens: {}", format_number(empty_docs));
    if !tokenized.is_empty() {
        println!("  Média por doc: {:.1}", total_tokens as f64 / tokenized.len() as f64);
    }
    println!("  Tempo: {:.1}s", elapsed.as_secs_f64());

    println!();
    println!("  Lemas mais frequentes:");
    for (lemma, count) in top.iter().take(TOP_LEMMAS) {
        println!("    {:<20} {}", lemma, format_number(*count));
    }

    if args.show > 0 {
        println!();
        println!("  Amostras:");
        for ((text, label), tokens) in corpus.iter().zip(&tokenized).take(args.show) {
            let preview: String = text.chars().take(80).collect();
            println!("    [{}] {}", label, preview);
            println!("        -> {:?}", tokens);
        }
    }
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}

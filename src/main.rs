mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// ============ CLI ============
#[derive(Parser)]
#[command(name = "sentiment-corpus")]
#[command(version = "0.1.0")]
#[command(about = "Carrega datasets de sentimento e gera lemas por documento")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lista datasets, caminhos esperados e origem
    Info {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Carrega um dataset e mostra a distribuição de labels
    Load {
        dataset: String,
        #[arg(long)]
        include_neutral: bool,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },

    /// Carrega um dataset e tokeniza os textos em lemas
    Tokenize {
        dataset: String,
        #[arg(long)]
        include_neutral: bool,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "512")]
        batch_size: usize,
        #[arg(long, default_value = "4")]
        n_jobs: usize,
        #[arg(long, default_value = "2")]
        threshold: usize,
        #[arg(long)]
        no_progress: bool,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        model_dir: Option<PathBuf>,
        #[arg(long, default_value = "3")]
        show: usize,
    },
}

fn main() {
    // Inicializa logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { data_dir } => commands::info::execute(data_dir),
        Commands::Load {
            dataset,
            include_neutral,
            data_dir,
            json,
        } => commands::load::execute(&dataset, include_neutral, data_dir, json),
        Commands::Tokenize {
            dataset,
            include_neutral,
            limit,
            seed,
            batch_size,
            n_jobs,
            threshold,
            no_progress,
            data_dir,
            model_dir,
            show,
        } => commands::tokenize::execute(commands::tokenize::TokenizeArgs {
            dataset,
            include_neutral,
            limit,
            seed,
            batch_size,
            n_jobs,
            threshold,
            show_progress: !no_progress,
            data_dir,
            model_dir,
            show,
        }),
    };

    if let Err(e) = result {
        eprintln!("  ❌ Erro: {}", e);
        std::process::exit(1);
    }
}

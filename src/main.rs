use anyhow::Context;
use chartmatch::prelude::*;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank reference charts by similarity and estimate chart rarity
#[derive(Parser, Debug)]
#[command(name = "chartmatch")]
#[command(about = "Find similar historical charts and estimate chart rarity", long_about = None)]
struct Args {
    /// Path to the chart JSON file
    #[arg(short, long)]
    chart: PathBuf,

    /// Path to the reference corpus JSON file
    #[arg(long)]
    corpus: PathBuf,

    /// Number of matches to return
    #[arg(short, long, default_value_t = 5)]
    top: usize,

    /// Optional JSON factor weight table
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'c> {
    matches: Vec<MatchResult<'c>>,
    stats: MatchStats,
    rarity: RarityResult,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting chartmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Corpus: {:?}", args.corpus);
    info!("Chart: {:?}", args.chart);

    let corpus = Corpus::from_path(&args.corpus)
        .with_context(|| format!("failed to load corpus {:?}", args.corpus))?;

    let chart_json = std::fs::read_to_string(&args.chart)
        .with_context(|| format!("failed to read chart {:?}", args.chart))?;
    let chart: Chart = serde_json::from_str(&chart_json)
        .with_context(|| format!("failed to parse chart {:?}", args.chart))?;

    let ranker = match &args.weights {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read weights {:?}", path))?;
            let weights = FactorWeights::from_json_str(&json)?;
            info!("Using custom factor weights from {:?}", path);
            Ranker::with_weights(&corpus, weights)?
        }
        None => Ranker::new(&corpus),
    };

    let matches = ranker.rank(&chart, args.top);
    let stats = MatchStats::compute(&matches, corpus.len(), ranker.weights());
    let rarity = RarityEstimator::new().estimate(&chart);

    let report = Report { matches, stats, rarity };
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &Report<'_>) {
    println!("Similar charts ({} of {}):", report.stats.results_count, report.stats.corpus_size);
    for (i, m) in report.matches.iter().enumerate() {
        println!(
            "{:>2}. {:<28} {:>3}%  {}",
            i + 1,
            m.person.name,
            m.score,
            m.strength
        );
        for note in &m.commonalities {
            println!("      - {}", note);
        }
    }
    if let Some(factor) = report.stats.top_contributing_factor {
        println!("Strongest factor in top match: {}", factor);
    }

    println!();
    println!("Rarity: {} (1 in {})", report.rarity.label, report.rarity.ratio);
    println!("{}", report.rarity.description);
    for factor in report.rarity.unusual_factors() {
        println!("  * {}: {}", factor.name, factor.description);
    }
}

//! citescan CLI — estimate citation-flag tag totals across a wiki corpus.

mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use citescan_analysis::render_report;
use citescan_core::config::CitescanConfig;
use citescan_core::tracing::init_tracing;
use citescan_core::types::EstimationResult;
use citescan_corpus::{CategorySampler, EstimationPipeline, MediaWikiClient};

use error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "citescan",
    about = "Estimate how many citation-flag tags exist across a wiki corpus"
)]
struct Cli {
    /// Number of documents to sample.
    #[arg(long)]
    sample_size: Option<usize>,

    /// Known population size; skips querying the category size.
    #[arg(long)]
    population: Option<u64>,

    /// Path to a TOML configuration file.
    #[arg(long, env = "CITESCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Collect the sample via random category offsets instead of search.
    #[arg(long)]
    random_offsets: bool,

    /// Emit the result as JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CitescanConfig::load(path)?,
        None => CitescanConfig::default(),
    };
    if cli.sample_size.is_some() {
        config.sampling.sample_size = cli.sample_size;
    }
    if cli.population.is_some() {
        config.sampling.population_override = cli.population;
    }

    let sample_size = config.sampling.effective_sample_size();
    let client = MediaWikiClient::new(&config.corpus)?;

    let result = if cli.random_offsets {
        let pacing = Duration::from_millis(config.corpus.effective_pacing_ms());
        let sampler = CategorySampler::new(client, pacing);
        EstimationPipeline::new(sampler, &config)?
            .run(sample_size)
            .await?
    } else {
        EstimationPipeline::new(client, &config)?
            .run(sample_size)
            .await?
    };

    print_result(&cli, &result)?;
    Ok(())
}

fn print_result(cli: &Cli, result: &EstimationResult) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", render_report(result));
    }
    Ok(())
}

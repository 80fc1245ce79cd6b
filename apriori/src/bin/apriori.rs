//! Mines frequent itemsets and association rules from a CSV table.

use anyhow::Context;
use apriori::{analyze, load_csv, report, MiningConfig};
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file (one column per item)
    #[arg(short, long)]
    input: String,

    /// Cell value that marks an item as present
    #[arg(short, long, default_value = "t")]
    marker: String,

    /// Minimum support for an itemset to be frequent
    #[arg(short = 's', long, default_value = "0.005")]
    min_support: f64,

    /// Minimum confidence for a rule to be kept
    #[arg(short = 'c', long, default_value = "0.6")]
    min_confidence: f64,

    /// Evaluate candidates on a single thread
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "apriori=debug" } else { "apriori=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MiningConfig::new(args.min_support, args.min_confidence)
        .with_parallel(!args.sequential)
        .with_retain_candidates(false);
    config.validate()?;

    let start = Instant::now();
    let table = load_csv(&args.input, &args.marker)
        .with_context(|| format!("loading {}", args.input))?;
    tracing::info!(
        items = table.num_items(),
        transactions = table.num_transactions(),
        "table loaded"
    );

    let analysis = analyze(&table, &config)?;
    print!("{}", report::render(&table, &analysis.mining, &analysis.rules));

    tracing::info!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

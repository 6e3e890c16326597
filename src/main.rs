//! fprules: mine frequent itemsets and association rules from a transactions file

use anyhow::{Context, Result};
use clap::Parser;
use fprules::io::{load_transactions, read_item_names, write_report};
use fprules::{execute_fp_growth, MiningConfig, ProgressEvent};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// FP-Growth association rule mining over comma-delimited transactions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transactions file, one comma-delimited transaction per line
    #[arg(short, long)]
    transactions: PathBuf,

    /// Comma-delimited list of every item name
    #[arg(short, long)]
    items: PathBuf,

    /// Minimum support, a fraction in [0, 1]
    #[arg(long, default_value_t = fprules::config::DEFAULT_MIN_SUPPORT)]
    min_support: f64,

    /// Minimum confidence, a fraction in [0, 1]
    #[arg(long, default_value_t = fprules::config::DEFAULT_MIN_CONFIDENCE)]
    min_confidence: f64,

    /// Write itemsets and rules as JSON here instead of printing the rules
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_progress(event: ProgressEvent) {
    match event {
        ProgressEvent::FrequentItemsetsGenerating => println!("Generating frequent itemsets..."),
        ProgressEvent::FrequentItemsetsGenerated { count, min_support } => {
            println!("✓ Generated {count} frequent itemsets with support >= {min_support}")
        }
        ProgressEvent::RulesGenerating => println!("Generating rules..."),
        ProgressEvent::RulesGenerated { count, min_confidence } => {
            println!("✓ Generated {count} rules with confidence >= {min_confidence}")
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = MiningConfig::new(args.min_support, args.min_confidence);
    config.validate()?;

    println!("Reading item names from {}...", args.items.display());
    let item_names = read_item_names(&args.items)?;
    println!("✓ Read {} item names", item_names.len());

    println!("Reading transactions from {}...", args.transactions.display());
    let (fp_tree, num_transactions) = load_transactions(&args.transactions)?;
    println!("✓ Read {num_transactions} transactions");

    let result = execute_fp_growth(
        &fp_tree,
        &item_names,
        num_transactions,
        &config,
        &mut report_progress,
    )?;

    if args.verbose > 0 {
        for level in result.levels() {
            println!("  {}-itemsets: {}", level.itemset_size, level.len());
        }
    }

    match &args.out {
        Some(out) => {
            println!("Writing output to {}...", out.display());
            write_report(out, &result).with_context(|| format!("writing {}", out.display()))?;
            println!("✓ Wrote results to {}", out.display());
        }
        None => {
            for rule in &result.rules {
                println!("{rule}");
            }
        }
    }

    Ok(())
}

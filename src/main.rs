use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use shamir_recover::{recover_secret, SelectionOrder, ShareSet};

#[derive(Parser, Debug)]
#[command(name = "shamir-recover")]
#[command(about = "recover a threshold-shared secret by exact lagrange interpolation", long_about = None)]
struct Args {
    /// Share documents to process, in order
    #[arg(default_values = ["testcase1.json", "testcase2.json"])]
    files: Vec<PathBuf>,

    /// How to pick k shares when more are present (lexicographic or numeric)
    #[arg(long, default_value_t = SelectionOrder::Lexicographic)]
    order: SelectionOrder,

    /// Log failed documents and continue instead of stopping at the first one
    #[arg(long)]
    keep_going: bool,
}

fn solve(path: &Path, order: SelectionOrder) -> Result<String> {
    let set = ShareSet::load(path)
        .with_context(|| format!("error loading {}", path.display()))?;
    info!(file = %path.display(), n = set.n, k = set.k, "loaded share set");
    let secret = recover_secret(&set, order)
        .with_context(|| format!("error processing {}", path.display()))?;
    Ok(secret.to_string())
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shamir_recover=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("Shamir secret recovery");
    println!("======================");

    let mut failures = 0usize;
    for path in &args.files {
        match solve(path, args.order) {
            Ok(secret) => println!("Secret for {}: {}", path.display(), secret),
            Err(e) if args.keep_going => {
                error!("{e:#}");
                failures += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if failures > 0 {
        error!(failures, total = args.files.len(), "some share sets could not be recovered");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

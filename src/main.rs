//! Quote migration tool - one-shot extraction of hardcoded quote literals
//! into per-category JSON files.
//!
//! Pipeline: source file → regex scan → category buckets → merge into
//! `quotes/categories/*.json`, skipping quotes already persisted.

mod category;
mod extract;
mod store;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use category::Category;
use store::MergeOutcome;

#[derive(Parser)]
#[command(name = "quote_extractor", about = "Extract hardcoded quotes into category JSON files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract quotes from the source file and merge them into the category files
    Run {
        /// Source file containing the hardcoded quote literals
        #[arg(long, default_value = "src/quotes.rs")]
        source: PathBuf,
        /// Directory holding the per-category JSON files
        #[arg(long, default_value = "quotes/categories")]
        out_dir: PathBuf,
    },
    /// Per-category counts of the persisted quote files
    Stats {
        /// Directory holding the per-category JSON files
        #[arg(long, default_value = "quotes/categories")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { source, out_dir } => run_migration(&source, &out_dir),
        Commands::Stats { out_dir } => print_stats(&out_dir),
    }
}

struct MergeCounts {
    created: usize,
    appended: usize,
    skipped: usize,
    written: usize,
}

impl MergeCounts {
    fn print(&self) {
        println!(
            "\n{} file(s) created, {} appended, {} skipped, {} quotes written.",
            self.created, self.appended, self.skipped, self.written,
        );
    }
}

fn run_migration(source: &Path, out_dir: &Path) -> Result<()> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("reading {}", source.display()))?;

    println!("Parsing quotes from {}...", source.display());
    let quotes = extract::scan(&content);
    println!("Found {} quotes", quotes.len());

    let buckets = category::bucket(quotes);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut counts = MergeCounts {
        created: 0,
        appended: 0,
        skipped: 0,
        written: 0,
    };

    for (cat, batch) in &buckets {
        let file = cat.file_name();
        if batch.is_empty() {
            println!("No quotes found for {}, skipping", cat.as_str());
            counts.skipped += 1;
            continue;
        }
        match store::merge(out_dir, *cat, batch)? {
            MergeOutcome::Created { written } => {
                println!("Created {} with {} quotes", file, written);
                counts.created += 1;
                counts.written += written;
            }
            MergeOutcome::Appended { added, total } => {
                println!("Added {} new quotes to {} ({} total)", added, file, total);
                counts.appended += 1;
                counts.written += added;
            }
            MergeOutcome::NoNew => {
                println!("No new quotes for {}, file untouched", cat.as_str());
                counts.skipped += 1;
            }
        }
    }

    counts.print();
    println!("Quote extraction complete.");
    Ok(())
}

fn print_stats(out_dir: &Path) -> Result<()> {
    let mut total = 0;
    for cat in Category::ALL {
        let path = out_dir.join(cat.file_name());
        if !path.exists() {
            println!("{:<16} -", cat.as_str());
            continue;
        }
        let quotes = store::load(&path)?;
        println!("{:<16} {:>4}  {}", cat.as_str(), quotes.len(), path.display());
        total += quotes.len();
    }
    println!("\nTotal: {} quotes", total);
    Ok(())
}

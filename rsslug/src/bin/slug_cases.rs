//! Slug fixture runner
//!
//! Runs CSV fixtures (`kind,input,expected`) through a [`Slugger`] and shows
//! every case in a table, hypothesis in blue when it matches the reference
//! and in red when it does not, followed by per-file and overall accuracy.
//!
//! Usage:
//! - `cargo run --bin slug_cases` - Run every fixture under `data/tests`
//! - `cargo run --bin slug_cases -- --file data/tests/tags-tests.csv` - Run one file
//! - `cargo run --bin slug_cases -- --kind is_utf8_tag` - Only cases of one kind
//! - `cargo run --bin slug_cases -- --ascii-only` - Drop non-ASCII instead of transliterating

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use log::warn;
use rsslug::cases::{load_cases, CaseKind};
use rsslug::Slugger;
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser)]
#[command(name = "slug_cases")]
#[command(about = "Run slug, grammar and tag-list fixtures")]
struct Args {
    /// Directory holding `*.csv` fixtures
    #[arg(short = 'd', long = "dir", default_value = "data/tests")]
    dir: PathBuf,

    /// Run a single fixture file instead of a directory
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Only run cases of this kind (slug, tags or a grammar name)
    #[arg(short = 'k', long = "kind")]
    kind: Option<String>,

    /// Drop non-ASCII characters instead of transliterating them
    #[arg(long)]
    ascii_only: bool,
}

#[derive(Tabled)]
struct CaseRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Hypothesis")]
    hypothesis: String,
    #[tabled(rename = "Reference")]
    reference: String,
}

#[derive(Debug)]
struct FileStats {
    total_items: usize,
    correct_items: usize,
    accuracy: f64,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let kind = args.kind.as_deref().map(CaseKind::parse).transpose()?;
    let slugger = if args.ascii_only {
        Slugger::ascii_only()
    } else {
        Slugger::new()
    };

    let files = match &args.file {
        Some(file) => vec![file.clone()],
        None => fixture_files(&args.dir)?,
    };
    if files.is_empty() {
        bail!("no fixtures found in {}", args.dir.display());
    }

    println!("Running Slug Fixture Suite");
    println!("==========================\n");

    let mut all_stats: BTreeMap<String, FileStats> = BTreeMap::new();
    for file in &files {
        let name = file.display().to_string();
        println!("Fixture: {}", name.bold());
        println!("{}", "=".repeat(50));
        match run_file(&slugger, file, kind) {
            Ok(stats) => {
                all_stats.insert(name, stats);
            }
            Err(e) => {
                eprintln!("Error running {}: {:#}", name, e);
            }
        }
        println!();
    }

    let (total_items, total_correct) = all_stats
        .values()
        .fold((0, 0), |(t, c), s| (t + s.total_items, c + s.correct_items));
    print_summary_statistics(&all_stats, total_items, total_correct);

    if total_correct == total_items {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn fixture_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read fixture directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        } else {
            warn!("skipping non-fixture file {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

fn run_file(slugger: &Slugger, path: &Path, kind: Option<CaseKind>) -> Result<FileStats> {
    let cases = load_cases(path)?;

    let mut rows = Vec::new();
    let mut correct_count = 0;
    for case in cases.iter().filter(|c| kind.is_none_or(|k| c.kind == k)) {
        let outcome = case.evaluate(slugger);
        if outcome.correct {
            correct_count += 1;
        }

        let colored_hypothesis = if outcome.correct {
            outcome.hypothesis.blue().to_string()
        } else {
            outcome.hypothesis.red().to_string()
        };

        rows.push(CaseRow {
            kind: case.kind.to_string(),
            input: format!("{:?}", case.input),
            hypothesis: colored_hypothesis,
            reference: outcome.reference,
        });
    }
    let total_count = rows.len();

    if !rows.is_empty() {
        let table = Table::new(&rows).with(Style::modern()).to_string();
        println!("{}", table);
    }

    let accuracy = if total_count > 0 {
        (correct_count as f64 / total_count as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Items: {} | Correct: {} | Accuracy: {:.2}%",
        total_count, correct_count, accuracy
    );

    Ok(FileStats {
        total_items: total_count,
        correct_items: correct_count,
        accuracy,
    })
}

fn colored_accuracy(accuracy: f64) -> ColoredString {
    let accuracy_str = format!("{:.2}%", accuracy);
    if accuracy >= 100.0 {
        accuracy_str.green()
    } else if accuracy >= 90.0 {
        accuracy_str.yellow()
    } else {
        accuracy_str.red()
    }
}

fn print_summary_statistics(all_stats: &BTreeMap<String, FileStats>, total_items: usize, total_correct: usize) {
    println!("\n{}", "SUMMARY STATISTICS".bold().underline());
    println!("{}", "=".repeat(50));

    println!("\n{}", "Accuracy per fixture:".bold());
    for (name, stats) in all_stats {
        println!(
            "  {}: {} ({}/{})",
            name,
            colored_accuracy(stats.accuracy),
            stats.correct_items,
            stats.total_items
        );
    }

    let overall_accuracy = if total_items > 0 {
        (total_correct as f64 / total_items as f64) * 100.0
    } else {
        0.0
    };

    println!("\n{}", "Overall Statistics:".bold());
    println!("  Total test items: {}", total_items);
    println!("  Total correct: {}", total_correct);

    println!("\n{}: {}", "OVERALL ACCURACY".bold(), colored_accuracy(overall_accuracy).bold());
}

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;

use rsslug::Slugger;
use slugrule::grammar::Grammar;

#[derive(Parser)]
#[command(name = "rsslug", version, about = "Turn text into slugs and check slug/tag grammars")]
struct Cli {
    /// Drop non-ASCII characters instead of transliterating them
    #[arg(long, global = true)]
    ascii_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the slug of each input (one per line from stdin when none are given)
    Slug { text: Vec<String> },

    /// Check each input against a grammar; exits with status 1 if any fails
    Check {
        /// Grammar name, e.g. slug, utf8-tag, item-tag-list-regex
        #[arg(short = 'g', long = "grammar")]
        grammar: Grammar,
        text: Vec<String>,
    },

    /// Split comma-delimited tag lists into tags and deduplicated slugs
    Tags {
        #[arg(required = true)]
        list: Vec<String>,
    },

    /// List the grammar names accepted by `check`
    Grammars,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let slugger = if cli.ascii_only {
        Slugger::ascii_only()
    } else {
        Slugger::new()
    };

    match cli.command {
        Command::Slug { text } => {
            for input in inputs(text)? {
                println!("{}", slugger.slugify(&input));
            }
        }
        Command::Check { grammar, text } => {
            let inputs = inputs(text)?;
            info!("checking {} inputs against {}", inputs.len(), grammar);
            let mut failures = 0;
            for input in &inputs {
                if slugger.check(grammar, input) {
                    println!("{} {}", "valid  ".green(), input);
                } else {
                    failures += 1;
                    println!("{} {}", "invalid".red(), input);
                }
            }
            if failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Tags { list } => {
            for raw in list {
                let result = slugger.tags_and_slugs(&raw);
                println!("{} ({} kept)", raw.bold(), result.len());
                for (tag, slug) in result.pairs() {
                    println!("  {:?} -> {}", tag, slug.purple());
                }
            }
        }
        Command::Grammars => {
            for grammar in Grammar::ALL {
                println!("{}", grammar);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// The inputs given on the command line, or every line of stdin if there are none.
fn inputs(text: Vec<String>) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(text);
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read inputs from stdin")
}

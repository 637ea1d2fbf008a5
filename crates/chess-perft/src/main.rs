//! chess-perft - move generator checks from the command line.
//!
//! Counts move-tree leaves, splits counts per root move, lists legal moves
//! and runs perft suites from `perft.toml`.

mod config;
mod suite;

use anyhow::{bail, Context};
use chess_core::{FenParser, Square};
use chess_engine::{perft, perft_divide, Position};
use clap::{Parser, Subcommand};
use config::SuiteConfig;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-perft")]
#[command(about = "Perft runner and move inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count leaf nodes to the given depth
    Perft {
        /// Search depth in plies
        depth: u32,
        /// Position to search from
        #[arg(long, default_value = FenParser::STARTPOS)]
        fen: String,
    },
    /// Show leaf counts per root move
    Divide {
        /// Search depth in plies
        depth: u32,
        /// Position to search from
        #[arg(long, default_value = FenParser::STARTPOS)]
        fen: String,
    },
    /// List legal moves
    Moves {
        /// Position to list moves for
        #[arg(long, default_value = FenParser::STARTPOS)]
        fen: String,
        /// Only moves of the piece on this square
        #[arg(long)]
        square: Option<String>,
    },
    /// Run a perft suite and compare against expected counts
    Suite {
        /// Suite file; the built-in suite is used if it does not exist
        #[arg(long, default_value_os_t = SuiteConfig::default_path())]
        config: PathBuf,
        /// Skip depths beyond this
        #[arg(long)]
        max_depth: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Perft { depth, fen } => {
            let position = parse_fen(&fen)?;
            let start = Instant::now();
            let nodes = perft(&position, depth);
            let elapsed = start.elapsed();
            println!("Nodes: {}", nodes);
            println!(
                "Time: {:.3}s ({:.0} nps)",
                elapsed.as_secs_f64(),
                nodes as f64 / elapsed.as_secs_f64().max(1e-9)
            );
        }
        Commands::Divide { depth, fen } => {
            let position = parse_fen(&fen)?;
            let results = perft_divide(&position, depth);
            for (uci, nodes) in &results {
                println!("{}: {}", uci, nodes);
            }
            let total: u64 = results.iter().map(|(_, n)| n).sum();
            println!();
            println!("Moves: {}", results.len());
            println!("Nodes: {}", total);
        }
        Commands::Moves { fen, square } => {
            let position = parse_fen(&fen)?;
            let moves = match square {
                Some(name) => {
                    let sq = Square::from_name(&name)
                        .with_context(|| format!("invalid square '{}'", name))?;
                    position.legal_moves_from(sq)
                }
                None => position.legal_moves().to_vec(),
            };
            let mut names: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
            names.sort();
            println!("{}", names.join(" "));
            println!("{} moves, {}", names.len(), position.status());
        }
        Commands::Suite { config, max_depth } => {
            let suite = SuiteConfig::load(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            let results = suite::run_suite(&suite, max_depth).context("running suite")?;

            let mut failures = 0;
            for result in &results {
                let verdict = if result.passed() { "ok" } else { "FAIL" };
                println!(
                    "{:<12} depth {:>2}: {:>10} (expected {:>10}) {:>8.3}s {}",
                    result.name,
                    result.depth,
                    result.actual,
                    result.expected,
                    result.elapsed.as_secs_f64(),
                    verdict
                );
                if !result.passed() {
                    failures += 1;
                }
            }

            if failures > 0 {
                bail!("{} of {} perft checks failed", failures, results.len());
            }
            println!("All {} perft checks passed", results.len());
        }
    }

    Ok(())
}

fn parse_fen(fen: &str) -> anyhow::Result<Position> {
    Position::from_fen(fen).with_context(|| format!("invalid FEN '{}'", fen))
}

//! Runs a perft suite against the move generator.

use chess_engine::{perft, Position, PositionError};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::SuiteConfig;

/// Outcome of one position at one depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteResult {
    pub name: String,
    pub depth: u32,
    pub expected: u64,
    pub actual: u64,
    pub elapsed: Duration,
}

impl SuiteResult {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Runs every position of `config` up to its deepest expected count, capped
/// at `max_depth` when given.
///
/// Positions run in name order. A FEN that does not parse aborts the run.
pub fn run_suite(
    config: &SuiteConfig,
    max_depth: Option<u32>,
) -> Result<Vec<SuiteResult>, PositionError> {
    let mut results = Vec::new();
    for (name, entry) in &config.positions {
        let position = Position::from_fen(&entry.fen)?;
        for (depth, &expected) in (1u32..).zip(&entry.expected) {
            if max_depth.is_some_and(|max| depth > max) {
                break;
            }
            let start = Instant::now();
            let actual = perft(&position, depth);
            let result = SuiteResult {
                name: name.clone(),
                depth,
                expected,
                actual,
                elapsed: start.elapsed(),
            };
            if result.passed() {
                info!(%name, depth, nodes = actual, "perft ok");
            } else {
                warn!(%name, depth, expected, actual, "perft mismatch");
            }
            results.push(result);
        }
    }
    Ok(results)
}

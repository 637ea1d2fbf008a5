//! Perft suite configuration.
//!
//! A suite is a set of named positions, each with the expected leaf counts
//! for depth 1, 2, 3 and so on. Suites are read from `perft.toml` when it
//! exists; otherwise the built-in reference suite is used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One suite entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SuitePosition {
    /// Position to search from.
    pub fen: String,
    /// Expected perft counts; index 0 is depth 1.
    #[serde(default)]
    pub expected: Vec<u64>,
}

/// A perft suite keyed by position name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    #[serde(default)]
    pub positions: BTreeMap<String, SuitePosition>,
}

impl SuiteConfig {
    /// Loads a suite from `path`, or the built-in suite if the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no suite file, using built-in suite");
            Ok(Self::default())
        }
    }

    /// Default suite file name in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("perft.toml")
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        let entries: [(&str, &str, &[u64]); 5] = [
            (
                "startpos",
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                &[20, 400, 8902, 197281][..],
            ),
            (
                "kiwipete",
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
                &[48, 2039, 97862][..],
            ),
            (
                "position3",
                "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
                &[14, 191, 2812][..],
            ),
            (
                "position4",
                "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
                &[6, 264, 9467][..],
            ),
            (
                "position5",
                "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 0 1",
                &[44, 1486, 62379][..],
            ),
        ];

        let positions = entries
            .into_iter()
            .map(|(name, fen, expected)| {
                (
                    name.to_string(),
                    SuitePosition {
                        fen: fen.to_string(),
                        expected: expected.to_vec(),
                    },
                )
            })
            .collect();

        SuiteConfig { positions }
    }
}

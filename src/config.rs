//! Runner configuration.
//!
//! Sources, later ones winning:
//! 1. built-in defaults (4×4 grid, 2 initial cells, random seed)
//! 2. a JSON file passed with `--config <path>`
//! 3. `TUI_2048_SIZE`, `TUI_2048_INITIAL`, `TUI_2048_SEED` environment variables
//!
//! ```json
//! { "grid_size": 5, "initial_cells": 3, "seed": 42 }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::GridConfig;
use crate::types::{DEFAULT_GRID_SIZE, DEFAULT_INITIAL_CELLS};

pub const ENV_SIZE: &str = "TUI_2048_SIZE";
pub const ENV_INITIAL: &str = "TUI_2048_INITIAL";
pub const ENV_SEED: &str = "TUI_2048_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: usize,
    pub initial_cells: usize,
    /// Fixed spawn seed; a random one is drawn when absent.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_cells: DEFAULT_INITIAL_CELLS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid game config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Defaults or file, then process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = lookup(ENV_SIZE) {
            self.grid_size = parse_env(ENV_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_INITIAL) {
            self.initial_cells = parse_env(ENV_INITIAL, &v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &v)?);
        }
        Ok(())
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.grid_size, self.initial_cells)
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| anyhow!("{}={:?}: {}", key, value, e))
}

/// Command-line arguments of the runner.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Default)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
pub struct CliArgs {
    /// JSON game configuration; environment variables override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

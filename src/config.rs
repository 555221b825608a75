use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use selene_chart::{DEFAULT_GLYPH, DEFAULT_WIDTH};
use selene_lunar::SYNODIC_MONTH;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "selene.toml";

/// Top-level selene configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeleneConfig {
    /// Phase calculation settings.
    #[serde(default)]
    pub lunar: LunarToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Chart settings.
    #[serde(default)]
    pub chart: ChartToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunarToml {
    #[serde(default = "default_synodic_month")]
    pub synodic_month: f64,
    /// Reference new moon as `YYYY-MM-DDTHH:MM` UTC.
    #[serde(default)]
    pub epoch: Option<String>,
    #[serde(default = "default_boundaries")]
    pub boundaries: String,
}

impl Default for LunarToml {
    fn default() -> Self {
        Self {
            synodic_month: default_synodic_month(),
            epoch: None,
            boundaries: default_boundaries(),
        }
    }
}

fn default_synodic_month() -> f64 {
    SYNODIC_MONTH
}
fn default_boundaries() -> String {
    "centered".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartToml {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_glyph")]
    pub glyph: char,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            width: default_width(),
            glyph: default_glyph(),
        }
    }
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}
fn default_glyph() -> char {
    DEFAULT_GLYPH
}

/// Loads configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when
/// `path` is `None`.
///
/// A missing default file yields the defaults; a missing explicit file is
/// an error.
pub fn load(path: Option<&Path>) -> Result<SeleneConfig> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SeleneConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

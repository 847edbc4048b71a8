//! Configuration management for the Formica CLI.

use anyhow::{Context, Result};
use formica::prelude::{GifOptions, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "formica.toml";

/// Formica project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Output format for `formica run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Animated GIF
    Gif,
    /// One JSON object per frame
    Jsonl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_frame_delay")]
    pub frame_delay_ms: u32,
}

// Default value functions
fn default_output() -> PathBuf { PathBuf::from("ThreeAnts_OneShot.gif") }
fn default_format() -> OutputFormat { OutputFormat::Gif }
fn default_width() -> u32 { GifOptions::default().width }
fn default_height() -> u32 { GifOptions::default().height }
fn default_frame_delay() -> u32 { GifOptions::default().frame_delay_ms }

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            format: default_format(),
            width: default_width(),
            height: default_height(),
            frame_delay_ms: default_frame_delay(),
        }
    }
}

impl RenderConfig {
    pub fn gif_options(&self) -> GifOptions {
        GifOptions {
            width: self.width,
            height: self.height,
            frame_delay_ms: self.frame_delay_ms,
        }
    }
}

impl Config {
    /// Load config from formica.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::engine::Rules;

pub const CONFIG_PATH: &str = "snake_config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Side of one grid cell in pixels.
    pub cell_size: f32,
    /// Extra room around the board for the HUD, in pixels.
    pub margin: f32,
}

impl Default for Display {
    fn default() -> Self {
        Self { cell_size: 20.0, margin: 200.0 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: Rules,
    pub display: Display,
}

impl Config {
    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("malformed config")?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but never fails: problems are logged and the
    /// defaults are used instead.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("config: {:?}", config);
                config
            }
            Err(err) => {
                error!("{err:#}, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        let d = &self.display;
        if !(4.0..=200.0).contains(&d.cell_size) {
            bail!("cell_size must be between 4 and 200px, got {}", d.cell_size);
        }
        if !(0.0..=2000.0).contains(&d.margin) {
            bail!("margin must be between 0 and 2000px, got {}", d.margin);
        }
        Ok(())
    }

    pub fn window_size(&self) -> (i32, i32) {
        let d = &self.display;
        (
            (self.rules.grid_width as f32 * d.cell_size + d.margin) as i32,
            (self.rules.grid_height as f32 * d.cell_size + d.margin) as i32,
        )
    }
}

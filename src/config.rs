use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::classify::{Bin, BinTable};
use crate::error::{ConfigurationError, DomainError};
use crate::translate::RangeMap;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub hue: HueConfig,
    pub step: StepConfig,
}

/// Interval mapping from summed band power to light hue.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HueConfig {
    pub source_min: f64,
    pub source_max: f64,
    pub target_min: f64,
    pub target_max: f64,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            source_min: 0.0,
            source_max: 200.0,
            target_min: 0.0,
            target_max: u16::MAX as f64,
        }
    }
}

/// Built-in step ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StepPreset {
    FourLevel,
    #[default]
    TwoLevel,
}

impl StepPreset {
    pub fn table(self) -> BinTable<u32> {
        match self {
            StepPreset::FourLevel => BinTable::four_level_steps(),
            StepPreset::TwoLevel => BinTable::two_level_steps(),
        }
    }
}

/// Score-to-step ladder. Explicit `bins` take precedence over `preset`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepConfig {
    pub preset: StepPreset,
    pub bins: Option<Vec<Bin<u32>>>,
    pub default_level: u32,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn hue_map(&self) -> Result<RangeMap, DomainError> {
        let hue = &self.hue;
        RangeMap::new(hue.source_min, hue.source_max, hue.target_min, hue.target_max)
    }

    pub fn step_table(&self) -> Result<BinTable<u32>, ConfigurationError> {
        let bins = match &self.step.bins {
            Some(bins) => bins.clone(),
            None => self.step.preset.table().bins().to_vec(),
        };
        BinTable::new(bins, self.step.default_level)
    }
}

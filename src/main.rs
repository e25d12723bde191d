mod bands;
mod classify;
mod config;
mod error;
mod hue;
mod replay;
mod shared;
mod translate;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::bands::{Band, BandPowers};
use crate::config::{Config, StepPreset};
use crate::hue::LightHue;

#[derive(Parser, Debug)]
#[command(author, version, about = "Maps EEG band powers and scores to light hues and step sizes")]
struct Args {
    /// TOML file with the hue interval and step ladder
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in step ladder, overriding the config's preset
    #[arg(long, global = true, value_enum)]
    ladder: Option<StepPreset>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum theta, alpha and beta power and map the total to a light hue
    #[command(allow_negative_numbers = true)]
    Hue { theta: f64, alpha: f64, beta: f64 },

    /// Classify a score into a step size
    #[command(allow_negative_numbers = true)]
    Step { score: f64 },

    /// Map a value between two intervals
    #[command(allow_negative_numbers = true)]
    Translate {
        value: f64,
        source_min: f64,
        source_max: f64,
        target_min: f64,
        target_max: f64,
    },

    /// Read scores from stdin and poll them at a fixed interval
    Replay {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
}

fn main() -> Result<()> {
    // RUST_LOG=brainlight=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(preset) = args.ladder {
        config.step.preset = preset;
    }

    match args.command {
        Command::Hue { theta, alpha, beta } => {
            let powers = BandPowers::new(theta, alpha, beta);
            for band in Band::ALL {
                let (low, high) = band.range_hz();
                info!("{} ({low}-{high} Hz): {}", band.name(), powers.get(band));
            }

            let map = config.hue_map()?;
            info!(
                "total {} mapped {:?} -> {:?}: {}",
                powers.total(),
                map.source(),
                map.target(),
                map.apply(powers.total())
            );
            let hue = LightHue::from_band_powers(&powers, &map);
            let (r, g, b) = hue.to_rgb();
            println!("hue {hue} rgb ({r}, {g}, {b})");
        }
        Command::Step { score } => {
            let table = config.step_table()?;
            println!("step {}", classify::classify(score, &table));
        }
        Command::Translate {
            value,
            source_min,
            source_max,
            target_min,
            target_max,
        } => {
            let mapped = translate::translate(value, source_min, source_max, target_min, target_max)?;
            println!("{mapped}");
        }
        Command::Replay { interval_ms } => {
            let table = config.step_table()?;
            let summary = replay::run(
                io::BufReader::new(io::stdin()),
                &table,
                Duration::from_millis(interval_ms),
            )?;
            println!("step {}", summary.last_step);
        }
    }

    Ok(())
}

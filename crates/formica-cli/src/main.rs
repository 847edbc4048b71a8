//! Formica CLI - run and render one-shot learning colonies.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - one-shot trail learning in an ant colony", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default formica.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Plan a run and print what each ant did
    Plan {
        #[command(flatten)]
        sim: SimArgs,

        /// Write the full plan as JSON to this file
        #[arg(short, long)]
        json: Option<PathBuf>,
    },

    /// Plan a run and render it
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Overrides for the [simulation] section of formica.toml.
#[derive(Args)]
struct SimArgs {
    /// Random search steps per leg
    #[arg(long)]
    steps: Option<usize>,

    /// Distance per search step
    #[arg(long)]
    step_size: Option<f64>,

    /// Points on homing paths and the memorised trail
    #[arg(long)]
    homing_samples: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Let the third ant read the trail
    #[arg(long, conflicts_with = "sensor_failure")]
    sensors_ok: bool,

    /// Force the third ant to search from scratch
    #[arg(long)]
    sensor_failure: bool,
}

impl SimArgs {
    fn apply(&self, config: &mut Config) {
        let sim = &mut config.simulation;
        if let Some(steps) = self.steps {
            sim.step_count = steps;
        }
        if let Some(size) = self.step_size {
            sim.step_size = size;
        }
        if let Some(samples) = self.homing_samples {
            sim.homing_samples = samples;
        }
        if self.seed.is_some() {
            sim.random_seed = self.seed;
        }
        if self.sensors_ok {
            sim.sensor_failure = false;
        }
        if self.sensor_failure {
            sim.sensor_failure = true;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Plan { sim, json } => {
            let mut config = Config::load()?;
            sim.apply(&mut config);
            commands::plan::run(&config, json.as_deref())
        }
        Commands::Run { sim, output, format } => {
            let mut config = Config::load()?;
            sim.apply(&mut config);
            if let Some(output) = output {
                config.render.output = output;
            }
            if let Some(format) = format {
                config.render.format = format;
            }
            commands::run::run(&config, cli.verbose)
        }
    }
}

//! Plan a run and render it frame by frame.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::commands::plan::print_summary;
use crate::config::{Config, OutputFormat};

/// Wraps a sink and ticks a progress bar for every rendered frame.
struct ProgressSink<S> {
    inner: S,
    bar: ProgressBar,
    verbose: bool,
}

impl<S: RenderSink> RenderSink for ProgressSink<S> {
    type Error = S::Error;

    fn begin(&mut self, scene: &Scene, total_frames: usize) -> Result<(), S::Error> {
        self.bar.set_length(total_frames as u64);
        self.inner.begin(scene, total_frames)
    }

    fn frame(&mut self, state: &FrameState<'_>) -> Result<(), S::Error> {
        self.inner.frame(state)?;
        if self.verbose && state.agent(state.active).drawn.len() == 1 {
            self.bar
                .println(format!("  {} starts at frame {}", state.active, state.frame));
        }
        self.bar.inc(1);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), S::Error> {
        self.inner.finish()?;
        self.bar.finish_with_message("done");
        Ok(())
    }
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

fn render<S>(sim: &Simulation, sink: S, verbose: bool) -> Result<S>
where
    S: RenderSink,
    S::Error: Send + Sync,
{
    let mut sink = ProgressSink {
        inner: sink,
        bar: progress_bar(sim.total_frames()),
        verbose,
    };
    let result = sim.play(&mut sink);
    if result.is_err() {
        sink.bar.abandon();
    }
    result.context("Playback failed")?;
    Ok(sink.inner)
}

pub fn run(config: &Config, verbose: bool) -> Result<()> {
    let output = &config.render.output;

    println!("{} Planning colony...", "→".blue());
    let sim = Simulation::plan(config.simulation.clone()).context("Failed to plan colony")?;
    print_summary(&sim.stats());

    println!(
        "{} Rendering {} frames to {}...",
        "→".blue(),
        sim.total_frames().to_string().cyan(),
        output.display()
    );

    match config.render.format {
        OutputFormat::Gif => {
            let sink = GifSink::new(output, config.render.gif_options());
            render(&sim, sink, verbose)?;
        }
        OutputFormat::Jsonl => {
            let file = File::create(output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let sink = JsonLinesSink::new(BufWriter::new(file));
            render(&sim, sink, verbose)?
                .into_inner()
                .flush()
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
    }

    println!();
    println!("{} Animation complete!", "✓".green().bold());
    println!("  Output: {}", output.display().to_string().green());

    Ok(())
}

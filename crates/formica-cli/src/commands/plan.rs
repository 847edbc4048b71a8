//! Plan a run and report each ant's outcome.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use std::path::Path;

use crate::config::Config;

pub fn run(config: &Config, json: Option<&Path>) -> Result<()> {
    let sim = Simulation::plan(config.simulation.clone()).context("Failed to plan colony")?;
    print_summary(&sim.stats());

    if let Some(path) = json {
        let snapshot = PlanSnapshot::capture(&sim);
        let content = snapshot.to_json().context("Failed to serialize plan")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  {} Plan written to {}", "✓".green(), path.display());
    }

    Ok(())
}

pub fn print_summary(stats: &SimulationStats) {
    println!("{} Colony planned (seed {})", "✓".green().bold(), stats.seed.to_string().cyan());
    println!(
        "  Food at ({}, {}), trail of {} points",
        format!("{:.2}", stats.resource.x).yellow(),
        format!("{:.2}", stats.resource.y).yellow(),
        stats.trail_points.to_string().cyan()
    );
    for agent in &stats.agents {
        let outcome = match agent.outcome {
            AgentOutcome::Searched => agent.outcome.to_string().blue(),
            AgentOutcome::ReusedMemory => agent.outcome.to_string().green(),
            AgentOutcome::ForcedSearch => agent.outcome.to_string().red(),
        };
        println!(
            "  {:<16} {:<14} {} points",
            agent.role.label(),
            outcome,
            agent.points.to_string().cyan()
        );
    }
    println!("  Total frames: {}", stats.total_frames.to_string().cyan());
}

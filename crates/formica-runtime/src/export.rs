//! Plan and frame export.
//!
//! [`PlanSnapshot`] captures everything needed to inspect or replay a run
//! without re-planning it. [`JsonLinesSink`] is a [`RenderSink`] that
//! writes one JSON object per frame.

use crate::playback::RenderSink;
use crate::scene::Scene;
use crate::scheduler::FrameState;
use crate::simulation::{Simulation, SimulationStats};
use formica_core::config::SimulationConfig;
use formica_core::types::{AgentPlan, Path};
use serde::Serialize;
use std::io::Write;

/// A serializable record of a planned run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSnapshot {
    pub config: SimulationConfig,
    pub stats: SimulationStats,
    pub scene: Scene,
    /// The memorised nest-to-resource trail.
    pub trail: Option<Path>,
    pub agents: Vec<AgentPlan>,
}

impl PlanSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let mut config = sim.config().clone();
        config.random_seed = Some(sim.seed());
        Self {
            config,
            stats: sim.stats(),
            scene: sim.scene().clone(),
            trail: sim.colony().memory().read().cloned(),
            agents: sim.colony().agents().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
struct Header<'a> {
    scene: &'a Scene,
    total_frames: usize,
}

/// Writes the scene, then each frame, as newline-delimited JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line<T: Serialize>(&mut self, value: &T) -> serde_json::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    type Error = serde_json::Error;

    fn begin(&mut self, scene: &Scene, total_frames: usize) -> serde_json::Result<()> {
        self.line(&Header {
            scene,
            total_frames,
        })
    }

    fn frame(&mut self, state: &FrameState<'_>) -> serde_json::Result<()> {
        self.line(state)
    }

    fn finish(&mut self) -> serde_json::Result<()> {
        self.writer.flush().map_err(serde_json::Error::io)
    }
}

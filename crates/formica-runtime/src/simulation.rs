//! Simulation — one colony run, planned up front.
//!
//! All randomness is spent in [`Simulation::plan`]: the scout's walk, the
//! trail, and (if its sensors fail) the third ant's walk. What is left is
//! an immutable timeline that can be replayed into any number of sinks.

use crate::playback::{play, PlaybackError, RenderSink};
use crate::scene::Scene;
use crate::scheduler::FrameScheduler;
use formica_agents::composer::{compose, ColonyPlan};
use formica_core::config::SimulationConfig;
use formica_core::error::Result;
use formica_core::types::{AgentOutcome, AgentRole, Point2D};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

/// A planned colony run, ready for playback.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    seed: u64,
    plan: ColonyPlan,
    scheduler: FrameScheduler,
    scene: Scene,
}

/// Per-agent line of [`SimulationStats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentStats {
    pub role: AgentRole,
    pub outcome: AgentOutcome,
    pub points: usize,
    /// First frame of this agent's phase.
    pub first_frame: usize,
}

/// Summary of a planned run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStats {
    pub seed: u64,
    pub step_count: usize,
    pub step_size: f64,
    pub sensor_failure: bool,
    pub resource: Point2D,
    pub trail_points: usize,
    pub total_frames: usize,
    pub agents: Vec<AgentStats>,
}

impl Simulation {
    /// Plan a run.
    ///
    /// Without a configured seed one is drawn from the thread RNG and
    /// recorded, so [`Simulation::seed`] can always reproduce the run.
    pub fn plan(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let seed = config
            .random_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        debug!(seed, "seeding colony");

        info!("initializing colony simulation");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let plan = compose(&config, &mut rng)?;

        let scheduler = FrameScheduler::from_plan(&plan);
        let scene = Scene::new(&scheduler, plan.resource());
        info!(total_frames = scheduler.total_frames(), "colony planned");

        Ok(Self {
            config,
            seed,
            plan,
            scheduler,
            scene,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The seed actually used, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn colony(&self) -> &ColonyPlan {
        &self.plan
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn total_frames(&self) -> usize {
        self.scheduler.total_frames()
    }

    /// Replay the timeline into `sink`.
    pub fn play<S: RenderSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> std::result::Result<usize, PlaybackError<S::Error>> {
        info!(frames = self.total_frames(), "generating animation");
        play(&self.scheduler, &self.scene, sink)
    }

    pub fn stats(&self) -> SimulationStats {
        let agents = self
            .plan
            .agents()
            .iter()
            .map(|agent| AgentStats {
                role: agent.role,
                outcome: agent.outcome,
                points: agent.path.len(),
                first_frame: self.scheduler.phase_range(agent.role).start,
            })
            .collect();

        SimulationStats {
            seed: self.seed,
            step_count: self.config.step_count,
            step_size: self.config.step_size,
            sensor_failure: self.config.sensor_failure,
            resource: self.plan.resource(),
            trail_points: self.plan.memory().read().map_or(0, |trail| trail.len()),
            total_frames: self.total_frames(),
            agents,
        }
    }
}

//! The behaviour every colony member implements.

use formica_core::config::SimulationConfig;
use formica_core::error::Result;
use formica_core::memory::PheromoneMemory;
use formica_core::synth::{homing_path, random_search};
use formica_core::types::{AgentPlan, AgentRole, Path, Point2D};
use rand::RngCore;

/// One ant's planning step.
///
/// A forager reads (and, for the scout, writes) the colony's pheromone
/// memory and draws from the shared random source, then returns its
/// complete path. Foragers run strictly one after another; the random
/// source must never be shared across threads.
pub trait Forager {
    /// Which colony member this is.
    fn role(&self) -> AgentRole;

    /// Produce this agent's full path.
    fn forage(&self, memory: &mut PheromoneMemory, rng: &mut dyn RngCore) -> Result<AgentPlan>;
}

/// How an ant searches and how finely it samples straight lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    pub step_count: usize,
    pub step_size: f64,
    pub homing_samples: usize,
}

impl From<&SimulationConfig> for SearchParams {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            step_count: config.step_count,
            step_size: config.step_size,
            homing_samples: config.homing_samples,
        }
    }
}

impl SearchParams {
    /// Same checks as [`SimulationConfig::validate`], so a bad value is
    /// caught before any randomness is consumed.
    pub fn validate(&self) -> Result<()> {
        SimulationConfig {
            step_count: self.step_count,
            step_size: self.step_size,
            homing_samples: self.homing_samples,
            ..SimulationConfig::default()
        }
        .validate()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from(&SimulationConfig::default())
    }
}

/// Random search out, straight line home.
///
/// Returns the joined path and the point where the search ended. The
/// search's last point and the homing path's first point are the same
/// location and both are kept.
pub(crate) fn search_and_return(
    params: &SearchParams,
    rng: &mut dyn RngCore,
) -> Result<(Path, Point2D)> {
    params.validate()?;
    let (outward, found) = random_search(params.step_count, params.step_size, rng)?;
    let homing = homing_path(found, Point2D::NEST, params.homing_samples)?;
    Ok((outward.concat(&homing), found))
}

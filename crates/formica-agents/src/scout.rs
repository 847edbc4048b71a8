//! Scout — the ant that finds the food.
//!
//! The scout has no trail to follow. It wanders out from the nest at
//! random until its step budget runs out, declares the spot it reached to
//! be the resource, and walks straight home. Once home it lays a direct
//! nest-to-resource trail in pheromone memory. The trail is a clean
//! straight line sampled at the homing resolution, not a copy of the
//! noisy outward walk.

use crate::forager::{search_and_return, Forager, SearchParams};
use formica_core::error::Result;
use formica_core::memory::PheromoneMemory;
use formica_core::synth::homing_path;
use formica_core::types::{AgentOutcome, AgentPlan, AgentRole, Point2D};
use rand::RngCore;
use tracing::{debug, info};

/// The trail-laying forager.
#[derive(Debug, Clone, Default)]
pub struct Scout {
    params: SearchParams,
}

impl Scout {
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

impl Forager for Scout {
    fn role(&self) -> AgentRole {
        AgentRole::Scout
    }

    fn forage(&self, memory: &mut PheromoneMemory, rng: &mut dyn RngCore) -> Result<AgentPlan> {
        info!(role = %self.role(), "scouting");
        let (path, resource) = search_and_return(&self.params, rng)?;

        let trail = homing_path(Point2D::NEST, resource, self.params.homing_samples)?;
        memory.write(trail)?;
        info!(
            x = resource.x,
            y = resource.y,
            "food found, trail saved to pheromone memory"
        );
        debug!(points = path.len(), "scout path complete");

        Ok(AgentPlan {
            role: self.role(),
            outcome: AgentOutcome::Searched,
            path,
        })
    }
}

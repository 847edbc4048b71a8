//! The ant that follows the trail.
//!
//! A learner that finds a trail walks it verbatim: one exposure to the
//! scout's discovery is enough. Without a trail it falls back to a plain
//! random search from the nest (no homing leg).

use crate::forager::{Forager, SearchParams};
use formica_core::error::Result;
use formica_core::memory::PheromoneMemory;
use formica_core::synth::random_search;
use formica_core::types::{AgentOutcome, AgentPlan, AgentRole};
use rand::RngCore;
use tracing::info;

/// The trail-following forager.
#[derive(Debug, Clone, Default)]
pub struct Learner {
    fallback: SearchParams,
}

impl Learner {
    /// `fallback` is only used when there is no trail to follow.
    pub fn new(fallback: SearchParams) -> Self {
        Self { fallback }
    }
}

impl Forager for Learner {
    fn role(&self) -> AgentRole {
        AgentRole::Learner
    }

    fn forage(&self, memory: &mut PheromoneMemory, rng: &mut dyn RngCore) -> Result<AgentPlan> {
        info!(role = %self.role(), "checking memory");
        if let Some(trail) = memory.read() {
            info!("trail found, executing one-shot direct path");
            return Ok(AgentPlan {
                role: self.role(),
                outcome: AgentOutcome::ReusedMemory,
                path: trail.clone(),
            });
        }

        info!("no trail, searching");
        let (path, _) = random_search(self.fallback.step_count, self.fallback.step_size, rng)?;
        Ok(AgentPlan {
            role: self.role(),
            outcome: AgentOutcome::Searched,
            path,
        })
    }
}

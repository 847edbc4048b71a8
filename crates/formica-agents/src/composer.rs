//! Composer — plan the whole colony in one pass.
//!
//! Runs scout, learner and unreliable learner in that order against a
//! fresh pheromone memory and a single random source. Draw order is
//! fixed (scout first, then the unreliable learner if it has to search),
//! so a seed fully determines the plan.

use crate::forager::{Forager, SearchParams};
use crate::learner::Learner;
use crate::scout::Scout;
use crate::unreliable::UnreliableLearner;
use formica_core::config::SimulationConfig;
use formica_core::error::{FormicaError, MemoryStateError, Result};
use formica_core::memory::PheromoneMemory;
use formica_core::types::{AgentOutcome, AgentPlan, AgentRole, Path, Point2D};
use rand::RngCore;
use serde::Serialize;

/// The finished plan for all three agents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColonyPlan {
    agents: [AgentPlan; 3],
    memory: PheromoneMemory,
    resource: Point2D,
}

impl ColonyPlan {
    /// Plans in playback order: scout, learner, unreliable learner.
    pub fn agents(&self) -> &[AgentPlan; 3] {
        &self.agents
    }

    pub fn agent(&self, role: AgentRole) -> &AgentPlan {
        &self.agents[role.index()]
    }

    pub fn path(&self, role: AgentRole) -> &Path {
        &self.agent(role).path
    }

    pub fn outcome(&self, role: AgentRole) -> AgentOutcome {
        self.agent(role).outcome
    }

    /// The memory as the scout left it.
    pub fn memory(&self) -> &PheromoneMemory {
        &self.memory
    }

    /// Where the scout found food.
    pub fn resource(&self) -> Point2D {
        self.resource
    }

    /// Clone the three paths out, in playback order.
    pub fn paths(&self) -> [Path; 3] {
        self.agents.clone().map(|plan| plan.path)
    }
}

/// Plan a colony run.
///
/// The configuration is validated before any path is synthesised.
pub fn compose(config: &SimulationConfig, rng: &mut dyn RngCore) -> Result<ColonyPlan> {
    config.validate()?;
    let params = SearchParams::from(config);

    let scout = Scout::new(params);
    let learner = Learner::new(params);
    let unreliable = UnreliableLearner::new(params, config.sensor_failure);

    let foragers: [&dyn Forager; 3] = [&scout, &learner, &unreliable];
    compose_with(foragers, rng)
}

/// Plan a run with custom foragers, each given the same memory in turn.
///
/// The foragers must be listed in playback order, one per role.
pub fn compose_with(foragers: [&dyn Forager; 3], rng: &mut dyn RngCore) -> Result<ColonyPlan> {
    for (forager, expected) in foragers.iter().zip(AgentRole::ALL) {
        if forager.role() != expected {
            return Err(FormicaError::invalid_parameter(
                "foragers",
                format!("expected {expected} in slot {}, got {}", expected.index(), forager.role()),
            ));
        }
    }

    let mut memory = PheromoneMemory::new();
    let [first, second, third] = foragers;
    let scout = first.forage(&mut memory, rng)?;
    let resource = memory
        .resource()
        .ok_or(FormicaError::MemoryState(MemoryStateError::Unmarked))?;
    let learner = second.forage(&mut memory, rng)?;
    let unreliable = third.forage(&mut memory, rng)?;

    Ok(ColonyPlan {
        agents: [scout, learner, unreliable],
        memory,
        resource,
    })
}

//! Unreliable learner — a learner whose trail sensors may be broken.
//!
//! With working sensors it behaves exactly like [`Learner`](crate::learner::Learner).
//! If its sensors fail, or there is no trail, it repeats the scout's full
//! search-and-return from scratch with its own random draws.

use crate::forager::{search_and_return, Forager, SearchParams};
use formica_core::error::Result;
use formica_core::memory::PheromoneMemory;
use formica_core::types::{AgentOutcome, AgentPlan, AgentRole};
use rand::RngCore;
use tracing::{info, warn};

/// A learner with an explicit sensor-failure switch.
#[derive(Debug, Clone)]
pub struct UnreliableLearner {
    params: SearchParams,
    sensor_failure: bool,
}

impl UnreliableLearner {
    pub fn new(params: SearchParams, sensor_failure: bool) -> Self {
        Self {
            params,
            sensor_failure,
        }
    }

    pub fn sensor_failure(&self) -> bool {
        self.sensor_failure
    }
}

impl Forager for UnreliableLearner {
    fn role(&self) -> AgentRole {
        AgentRole::UnreliableLearner
    }

    fn forage(&self, memory: &mut PheromoneMemory, rng: &mut dyn RngCore) -> Result<AgentPlan> {
        info!(role = %self.role(), "checking memory");
        if !self.sensor_failure {
            if let Some(trail) = memory.read() {
                info!("trail found, executing one-shot direct path");
                return Ok(AgentPlan {
                    role: self.role(),
                    outcome: AgentOutcome::ReusedMemory,
                    path: trail.clone(),
                });
            }
        }

        if self.sensor_failure {
            warn!("read failed, forced to stochastic search");
        } else {
            info!("no trail, forced to stochastic search");
        }
        let (path, _) = search_and_return(&self.params, rng)?;
        Ok(AgentPlan {
            role: self.role(),
            outcome: AgentOutcome::ForcedSearch,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::types::{Path, Point2D};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn marked() -> PheromoneMemory {
        let trail: Path = vec![Point2D::NEST, Point2D::new(2.0, 0.0)].into();
        let mut memory = PheromoneMemory::new();
        memory.write(trail).unwrap();
        memory
    }

    #[test]
    fn healthy_sensors_follow_the_trail() {
        let mut memory = marked();
        let plan = UnreliableLearner::new(SearchParams::default(), false)
            .forage(&mut memory, &mut ChaCha8Rng::seed_from_u64(1))
            .unwrap();
        assert_eq!(plan.outcome, AgentOutcome::ReusedMemory);
        assert_eq!(Some(&plan.path), memory.read());
    }

    #[test]
    fn failed_sensors_ignore_the_trail() {
        let params = SearchParams {
            step_count: 10,
            step_size: 1.0,
            homing_samples: 20,
        };
        let mut memory = marked();
        let plan = UnreliableLearner::new(params, true)
            .forage(&mut memory, &mut ChaCha8Rng::seed_from_u64(1))
            .unwrap();
        assert_eq!(plan.outcome, AgentOutcome::ForcedSearch);
        assert_eq!(plan.path.len(), 10 + 1 + 20);
        assert_eq!(plan.path.last(), Some(Point2D::NEST));
    }

    #[test]
    fn missing_trail_forces_search_even_with_working_sensors() {
        let mut memory = PheromoneMemory::new();
        let plan = UnreliableLearner::new(SearchParams::default(), false)
            .forage(&mut memory, &mut ChaCha8Rng::seed_from_u64(4))
            .unwrap();
        assert_eq!(plan.outcome, AgentOutcome::ForcedSearch);
        assert_eq!(plan.path.len(), 150 + 1 + 50);
    }
}

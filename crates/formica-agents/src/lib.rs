//! # Formica Agents
//!
//! The three foragers of a Formica colony and the composer that runs
//! them in order against one pheromone memory.
//!
//! - [`Scout`](scout::Scout) always searches, then lays the trail
//! - [`Learner`](learner::Learner) follows the trail when one exists
//! - [`UnreliableLearner`](unreliable::UnreliableLearner) follows it
//!   unless its sensors fail

pub mod composer;
pub mod forager;
pub mod learner;
pub mod prelude;
pub mod scout;
pub mod unreliable;

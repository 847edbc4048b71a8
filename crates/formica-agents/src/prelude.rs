//! Formica Agents Prelude - convenient imports for common usage.

pub use crate::composer::{compose, ColonyPlan};
pub use crate::forager::Forager;
pub use crate::learner::Learner;
pub use crate::scout::Scout;
pub use crate::unreliable::UnreliableLearner;

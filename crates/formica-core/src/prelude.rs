//! Formica Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

pub use crate::types::{AgentOutcome, AgentPlan, AgentRole, Path, Point2D};

pub use crate::config::SimulationConfig;

pub use crate::memory::PheromoneMemory;

pub use crate::synth::{homing_path, random_search};

pub use crate::error::{FormicaError, MemoryStateError, Result};

//! # Formica
//!
//! One-shot trail learning in a three-ant foraging colony.
//!
//! A scout wanders out of the nest at random, finds food, walks home and
//! lays a straight pheromone trail. A learner reads the trail and walks it
//! directly. A third ant reads it too, unless its sensors fail, in which
//! case it has to search from scratch.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! let config = SimulationConfig::default().with_seed(42);
//! let sim = Simulation::plan(config).unwrap();
//!
//! let stats = sim.stats();
//! assert_eq!(stats.agents[1].outcome, AgentOutcome::ReusedMemory);
//!
//! // The last frame shows all three paths in full.
//! let last = sim.scheduler().state_at(sim.total_frames() - 1).unwrap();
//! assert_eq!(last.active, AgentRole::UnreliableLearner);
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - points, paths, path synthesis, pheromone memory, errors
//! - [`formica_agents`] - the three foragers and the composer that runs them
//! - [`formica_runtime`] - simulation, frame scheduler, playback, export
//! - `formica_viz` - animated GIF sink (feature `viz`)
//!
//! ## Playback
//!
//! | Frames | Animating |
//! |--------|-----------|
//! | `0 .. len1` | Ant 1 (Scout) |
//! | `len1 .. len1+len2` | Ant 2 (Learner) |
//! | `len1+len2 .. total` | Ant 3 (Lost) |

pub use formica_agents;
pub use formica_core;
pub use formica_runtime;
#[cfg(feature = "viz")]
pub use formica_viz;

pub mod prelude {
    //! Everything needed to plan and replay a run.

    pub use formica_core::prelude::*;

    pub use formica_agents::prelude::*;

    pub use formica_runtime::export::{JsonLinesSink, PlanSnapshot};
    pub use formica_runtime::playback::{play, PlaybackError, RenderSink};
    pub use formica_runtime::scene::{Bounds, Scene};
    pub use formica_runtime::scheduler::{AgentFrame, FrameScheduler, FrameState};
    pub use formica_runtime::simulation::{AgentStats, Simulation, SimulationStats};

    #[cfg(feature = "viz")]
    pub use formica_viz::{GifOptions, GifSink, RenderError};
}

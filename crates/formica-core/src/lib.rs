//! # Formica Core
//!
//! Core types and leaf operations for a three-ant foraging colony that
//! learns a trail in one shot.
//!
//! - **types** - points, paths, agent roles and outcomes
//! - **synth** - random search and straight-line homing paths
//! - **memory** - the single-slot pheromone trail
//! - **config** - run parameters shared by every crate
//! - **error** - the error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let trail = homing_path(Point2D::NEST, Point2D::new(3.0, 4.0), 5).unwrap();
//! let mut memory = PheromoneMemory::new();
//! memory.write(trail).unwrap();
//! assert_eq!(memory.resource(), Some(Point2D::new(3.0, 4.0)));
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod synth;
pub mod types;

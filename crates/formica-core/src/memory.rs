//! Pheromone memory — the trail one ant lays and the others follow.
//!
//! Ants coordinate through the environment rather than through each
//! other: the scout that finds food marks a trail, and later foragers
//! read the mark instead of searching. Here the mark is a single cached
//! path from the nest to the resource.
//!
//! The slot is write-once. A second write is rejected with
//! [`MemoryStateError::AlreadyWritten`] and the original trail is kept.

use crate::error::{FormicaError, MemoryStateError, Result};
use crate::types::{Path, Point2D};
use serde::{Deserialize, Serialize};

/// A single-slot store for a discovered trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PheromoneMemory {
    trail: Option<Path>,
}

impl PheromoneMemory {
    pub fn new() -> Self {
        Self { trail: None }
    }

    /// Lay the trail. Fails if one is already present or `path` is empty.
    pub fn write(&mut self, path: Path) -> Result<()> {
        if self.trail.is_some() {
            return Err(MemoryStateError::AlreadyWritten.into());
        }
        if path.is_empty() {
            return Err(FormicaError::invalid_parameter(
                "trail",
                "cannot memorise an empty path",
            ));
        }
        self.trail = Some(path);
        Ok(())
    }

    /// The stored trail, if any.
    pub fn read(&self) -> Option<&Path> {
        self.trail.as_ref()
    }

    pub fn is_marked(&self) -> bool {
        self.trail.is_some()
    }

    /// Where the trail leads: its last point.
    pub fn resource(&self) -> Option<Point2D> {
        self.trail.as_ref().and_then(Path::last)
    }
}

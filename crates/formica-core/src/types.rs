//! Shared types used across all Formica crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the foraging plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The nest every agent starts from.
    pub const NEST: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points; index order is traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Point2D>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn points(&self) -> &[Point2D] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Point2D> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Point2D> {
        self.0.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.0.get(index).copied()
    }

    /// The first `count` points, clamped to the path length.
    pub fn prefix(&self, count: usize) -> &[Point2D] {
        &self.0[..count.min(self.0.len())]
    }

    /// Append `other` after this path. Shared endpoints are kept, not merged.
    pub fn concat(mut self, other: &Path) -> Path {
        self.0.extend_from_slice(&other.0);
        self
    }

    pub(crate) fn push(&mut self, point: Point2D) {
        self.0.push(point);
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.0
    }
}

impl From<Vec<Point2D>> for Path {
    fn from(points: Vec<Point2D>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point2D> for Path {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Which of the three colony members an agent is.
///
/// The ordering is also the playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentRole {
    /// Always searches; lays the trail.
    Scout,
    /// Follows the trail when there is one.
    Learner,
    /// Follows the trail unless its sensors fail.
    UnreliableLearner,
}

impl AgentRole {
    pub const ALL: [AgentRole; 3] = [
        AgentRole::Scout,
        AgentRole::Learner,
        AgentRole::UnreliableLearner,
    ];

    /// Position in the playback order.
    pub fn index(self) -> usize {
        match self {
            AgentRole::Scout => 0,
            AgentRole::Learner => 1,
            AgentRole::UnreliableLearner => 2,
        }
    }

    /// Legend label used by renderers.
    pub fn label(self) -> &'static str {
        match self {
            AgentRole::Scout => "Ant 1 (Scout)",
            AgentRole::Learner => "Ant 2 (Learner)",
            AgentRole::UnreliableLearner => "Ant 3 (Lost)",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an agent's path came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentOutcome {
    /// Explored on its own.
    Searched,
    /// Walked the cached trail.
    ReusedMemory,
    /// Had to explore because the trail could not be read.
    ForcedSearch,
}

impl fmt::Display for AgentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentOutcome::Searched => "searched",
            AgentOutcome::ReusedMemory => "reused memory",
            AgentOutcome::ForcedSearch => "forced search",
        };
        f.write_str(name)
    }
}

/// The finished plan for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPlan {
    pub role: AgentRole,
    pub outcome: AgentOutcome,
    pub path: Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(n: usize) -> Path {
        (0..n).map(|i| Point2D::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn prefix_clamps_to_length() {
        let path = path_of(3);
        assert_eq!(path.prefix(0).len(), 0);
        assert_eq!(path.prefix(2).len(), 2);
        assert_eq!(path.prefix(10).len(), 3);
    }

    #[test]
    fn concat_keeps_shared_endpoint() {
        let a = path_of(3);
        let b: Path = vec![Point2D::new(2.0, 0.0), Point2D::NEST].into();
        let joined = a.concat(&b);
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.get(2), joined.get(3));
        assert_eq!(joined.last(), Some(Point2D::NEST));
    }

    #[test]
    fn roles_are_ordered_for_playback() {
        for (i, role) in AgentRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
        assert!(AgentRole::Scout < AgentRole::UnreliableLearner);
    }

    #[test]
    fn path_serializes_as_plain_list() {
        let path: Path = vec![Point2D::new(1.0, 2.0)].into();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);
    }
}

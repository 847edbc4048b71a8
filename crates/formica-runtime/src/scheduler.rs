//! Frame scheduler — one timeline, three agents.
//!
//! The timeline is split into three back-to-back phases, one per agent,
//! each as long as that agent's path:
//!
//! ```text
//! frame:  0 ........ len1-1 | len1 ... len1+len2-1 | ... total-1
//! phase:  scout             | learner              | unreliable learner
//! ```
//!
//! During its phase an agent's path is revealed one point per frame.
//! Agents whose phase is over stay fully drawn with their marker parked
//! on the last point; agents whose phase has not started are not drawn.

use formica_agents::composer::ColonyPlan;
use formica_core::error::{FormicaError, Result};
use formica_core::types::{AgentRole, Path, Point2D};
use serde::Serialize;
use std::cmp::Ordering;

/// What one agent looks like in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentFrame<'a> {
    pub role: AgentRole,
    /// The revealed part of the path, from its first point.
    pub drawn: &'a [Point2D],
    /// Current position, if the agent is on screen.
    pub marker: Option<Point2D>,
}

/// The full picture at one frame index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState<'a> {
    pub frame: usize,
    /// The agent currently animating.
    pub active: AgentRole,
    /// One entry per agent, in playback order.
    pub agents: [AgentFrame<'a>; 3],
}

impl<'a> FrameState<'a> {
    pub fn agent(&self, role: AgentRole) -> &AgentFrame<'a> {
        &self.agents[role.index()]
    }
}

/// Maps frame indices to [`FrameState`]s. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScheduler {
    paths: [Path; 3],
    /// First frame of each phase.
    starts: [usize; 3],
    total: usize,
}

impl FrameScheduler {
    /// Paths in playback order: scout, learner, unreliable learner.
    pub fn new(paths: [Path; 3]) -> Self {
        let lens = [paths[0].len(), paths[1].len(), paths[2].len()];
        let starts = [0, lens[0], lens[0] + lens[1]];
        let total = starts[2] + lens[2];
        Self {
            paths,
            starts,
            total,
        }
    }

    pub fn from_plan(plan: &ColonyPlan) -> Self {
        Self::new(plan.paths())
    }

    /// Sum of the three path lengths.
    pub fn total_frames(&self) -> usize {
        self.total
    }

    pub fn path(&self, role: AgentRole) -> &Path {
        &self.paths[role.index()]
    }

    /// Frame range during which `role` is animating.
    pub fn phase_range(&self, role: AgentRole) -> std::ops::Range<usize> {
        let start = self.starts[role.index()];
        start..start + self.paths[role.index()].len()
    }

    /// Which agent is animating at `frame`, or `None` past the end.
    pub fn phase_at(&self, frame: usize) -> Option<AgentRole> {
        AgentRole::ALL
            .into_iter()
            .find(|role| self.phase_range(*role).contains(&frame))
    }

    /// Render state for `frame`.
    ///
    /// Pure: the same index always yields the same state, so frames may be
    /// requested in any order and any number of times.
    pub fn state_at(&self, frame: usize) -> Result<FrameState<'_>> {
        let active = self.phase_at(frame).ok_or(FormicaError::FrameOutOfRange {
            frame,
            total: self.total,
        })?;
        let local = frame - self.starts[active.index()];

        let agents = AgentRole::ALL.map(|role| {
            let path = self.path(role);
            match role.cmp(&active) {
                Ordering::Less => AgentFrame {
                    role,
                    drawn: path.points(),
                    marker: path.last(),
                },
                Ordering::Equal => AgentFrame {
                    role,
                    drawn: path.prefix(local + 1),
                    marker: path.get(local),
                },
                Ordering::Greater => AgentFrame {
                    role,
                    drawn: &[],
                    marker: None,
                },
            }
        });

        Ok(FrameState {
            frame,
            active,
            agents,
        })
    }

    /// Every frame, in order.
    pub fn frames(&self) -> impl Iterator<Item = FrameState<'_>> + '_ {
        (0..self.total).filter_map(move |frame| self.state_at(frame).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, y: f64) -> Path {
        (0..n).map(|i| Point2D::new(i as f64, y)).collect()
    }

    fn scheduler() -> FrameScheduler {
        FrameScheduler::new([line(4, 0.0), line(2, 1.0), line(3, 2.0)])
    }

    #[test]
    fn total_is_sum_of_lengths() {
        assert_eq!(scheduler().total_frames(), 9);
    }

    #[test]
    fn phases_follow_path_lengths() {
        let s = scheduler();
        let phases: Vec<_> = (0..9).map(|i| s.phase_at(i).unwrap()).collect();
        use AgentRole::*;
        assert_eq!(
            phases,
            vec![Scout, Scout, Scout, Scout, Learner, Learner, UnreliableLearner, UnreliableLearner, UnreliableLearner]
        );
        assert_eq!(s.phase_at(9), None);
    }

    #[test]
    fn first_frame_shows_only_the_scouts_first_point() {
        let s = scheduler();
        let state = s.state_at(0).unwrap();
        assert_eq!(state.active, AgentRole::Scout);
        assert_eq!(state.agent(AgentRole::Scout).drawn, &[Point2D::new(0.0, 0.0)]);
        assert_eq!(state.agent(AgentRole::Scout).marker, Some(Point2D::new(0.0, 0.0)));
        assert!(state.agent(AgentRole::Learner).drawn.is_empty());
        assert_eq!(state.agent(AgentRole::Learner).marker, None);
        assert!(state.agent(AgentRole::UnreliableLearner).drawn.is_empty());
    }

    #[test]
    fn entering_a_phase_parks_the_previous_agent() {
        let s = scheduler();
        let state = s.state_at(4).unwrap();
        let scout = state.agent(AgentRole::Scout);
        assert_eq!(scout.drawn.len(), 4);
        assert_eq!(scout.marker, Some(Point2D::new(3.0, 0.0)));

        let learner = state.agent(AgentRole::Learner);
        assert_eq!(learner.drawn, &[Point2D::new(0.0, 1.0)]);
        assert_eq!(learner.marker, Some(Point2D::new(0.0, 1.0)));
    }

    #[test]
    fn last_frame_shows_everything() {
        let s = scheduler();
        let state = s.state_at(8).unwrap();
        for role in AgentRole::ALL {
            let agent = state.agent(role);
            assert_eq!(agent.drawn, s.path(role).points());
            assert_eq!(agent.marker, s.path(role).last());
        }
    }

    #[test]
    fn out_of_range_frame_is_an_error() {
        let err = scheduler().state_at(9).unwrap_err();
        assert_eq!(err, FormicaError::FrameOutOfRange { frame: 9, total: 9 });
    }

    #[test]
    fn empty_middle_path_is_skipped() {
        let s = FrameScheduler::new([line(2, 0.0), Path::new(), line(2, 2.0)]);
        assert_eq!(s.total_frames(), 4);
        assert_eq!(s.phase_at(2), Some(AgentRole::UnreliableLearner));
        let state = s.state_at(2).unwrap();
        assert!(state.agent(AgentRole::Learner).drawn.is_empty());
        assert_eq!(state.agent(AgentRole::Learner).marker, None);
    }

    #[test]
    fn frames_iterates_whole_timeline() {
        let s = scheduler();
        let frames: Vec<_> = s.frames().collect();
        assert_eq!(frames.len(), 9);
        assert_eq!(frames[5], s.state_at(5).unwrap());
    }
}

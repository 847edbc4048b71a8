//! Timeline integration tests, planning through playback.

use formica_core::config::SimulationConfig;
use formica_core::types::*;
use formica_runtime::playback::{play, PlaybackError, RenderSink};
use formica_runtime::scene::Scene;
use formica_runtime::scheduler::FrameState;
use formica_runtime::simulation::Simulation;
use std::fmt;

fn planned(step_count: usize, sensor_failure: bool, seed: u64) -> Simulation {
    Simulation::plan(SimulationConfig {
        step_count,
        step_size: 1.0,
        sensor_failure,
        random_seed: Some(seed),
        homing_samples: 50,
    })
    .unwrap()
}

/// Keeps a summary of every call it receives.
#[derive(Default)]
struct RecordingSink {
    began_with: Option<usize>,
    frames: Vec<(usize, AgentRole, [usize; 3])>,
    finished: bool,
}

impl RenderSink for RecordingSink {
    type Error = fmt::Error;

    fn begin(&mut self, _scene: &Scene, total_frames: usize) -> Result<(), fmt::Error> {
        self.began_with = Some(total_frames);
        Ok(())
    }

    fn frame(&mut self, state: &FrameState<'_>) -> Result<(), fmt::Error> {
        let drawn = AgentRole::ALL.map(|role| state.agent(role).drawn.len());
        self.frames.push((state.frame, state.active, drawn));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), fmt::Error> {
        self.finished = true;
        Ok(())
    }
}

/// Fails on a chosen frame.
struct FailingSink {
    fail_at: usize,
    seen: usize,
}

impl RenderSink for FailingSink {
    type Error = fmt::Error;

    fn begin(&mut self, _scene: &Scene, _total_frames: usize) -> Result<(), fmt::Error> {
        Ok(())
    }

    fn frame(&mut self, state: &FrameState<'_>) -> Result<(), fmt::Error> {
        self.seen += 1;
        if state.frame == self.fail_at {
            return Err(fmt::Error);
        }
        Ok(())
    }
}

#[test]
fn reference_scenario_frame_count() {
    let sim = planned(10, true, 42);
    let stats = sim.stats();

    assert_eq!(stats.agents[0].points, 61);
    assert_eq!(stats.agents[1].points, 50);
    assert_eq!(stats.agents[2].points, 61);
    assert_eq!(stats.agents[2].outcome, AgentOutcome::ForcedSearch);
    assert_eq!(sim.total_frames(), 172);
    assert_eq!(stats.agents[1].first_frame, 61);
    assert_eq!(stats.agents[2].first_frame, 111);
}

#[test]
fn healthy_sensors_give_equal_learner_paths() {
    let sim = planned(10, false, 42);
    let plan = sim.colony();
    assert_eq!(plan.path(AgentRole::Learner), plan.path(AgentRole::UnreliableLearner));
    assert_eq!(sim.total_frames(), 61 + 50 + 50);
}

#[test]
fn state_at_is_pure() {
    let sim = planned(20, true, 5);
    let scheduler = sim.scheduler();
    for frame in [0, 7, 20, 21, 70, sim.total_frames() - 1] {
        assert_eq!(scheduler.state_at(frame).unwrap(), scheduler.state_at(frame).unwrap());
    }
    // Out of order requests see the same thing.
    let late = scheduler.state_at(100).unwrap();
    let _ = scheduler.state_at(3).unwrap();
    assert_eq!(scheduler.state_at(100).unwrap(), late);
}

#[test]
fn reveal_never_shrinks() {
    let sim = planned(15, true, 9);
    let mut previous = [0usize; 3];
    for state in sim.scheduler().frames() {
        for role in AgentRole::ALL {
            let drawn = state.agent(role).drawn.len();
            assert!(drawn >= previous[role.index()], "frame {} undrew {role}", state.frame);
            previous[role.index()] = drawn;
        }
    }
}

#[test]
fn at_most_one_agent_is_partially_drawn() {
    let sim = planned(15, true, 10);
    let scheduler = sim.scheduler();
    for state in scheduler.frames() {
        let animating = AgentRole::ALL
            .iter()
            .filter(|role| {
                let drawn = state.agent(**role).drawn.len();
                drawn > 0 && drawn < scheduler.path(**role).len()
            })
            .count();
        assert!(animating <= 1, "frame {}", state.frame);
        for role in AgentRole::ALL {
            if role != state.active {
                let drawn = state.agent(role).drawn.len();
                assert!(drawn == 0 || drawn == scheduler.path(role).len());
            }
        }
    }
}

#[test]
fn boundary_frames() {
    let sim = planned(12, true, 11);
    let scheduler = sim.scheduler();

    let first = scheduler.state_at(0).unwrap();
    assert_eq!(first.agent(AgentRole::Scout).drawn, &[Point2D::NEST]);
    assert_eq!(first.agent(AgentRole::Scout).marker, Some(Point2D::NEST));
    assert!(first.agent(AgentRole::Learner).marker.is_none());
    assert!(first.agent(AgentRole::UnreliableLearner).marker.is_none());

    let last = scheduler.state_at(sim.total_frames() - 1).unwrap();
    assert_eq!(last.active, AgentRole::UnreliableLearner);
    for role in AgentRole::ALL {
        let path = scheduler.path(role);
        assert_eq!(last.agent(role).drawn, path.points());
        assert_eq!(last.agent(role).marker, path.last());
    }
}

#[test]
fn markers_track_the_active_point() {
    let sim = planned(8, true, 12);
    let scheduler = sim.scheduler();
    for state in scheduler.frames() {
        let active = state.agent(state.active);
        assert_eq!(active.marker, active.drawn.last().copied());
    }
}

#[test]
fn sink_sees_every_frame_in_order() {
    let sim = planned(6, true, 13);
    let mut sink = RecordingSink::default();
    let rendered = sim.play(&mut sink).unwrap();

    assert_eq!(rendered, sim.total_frames());
    assert_eq!(sink.began_with, Some(sim.total_frames()));
    assert!(sink.finished);
    let order: Vec<usize> = sink.frames.iter().map(|(frame, _, _)| *frame).collect();
    assert_eq!(order, (0..sim.total_frames()).collect::<Vec<_>>());

    let (_, active, drawn) = sink.frames[sim.total_frames() - 1];
    assert_eq!(active, AgentRole::UnreliableLearner);
    assert_eq!(drawn, [57, 50, 57]);
}

#[test]
fn sink_error_stops_playback_unchanged() {
    let sim = planned(6, true, 14);
    let mut sink = FailingSink { fail_at: 10, seen: 0 };
    let err = play(sim.scheduler(), sim.scene(), &mut sink).unwrap_err();

    assert!(matches!(err, PlaybackError::Sink(fmt::Error)));
    assert_eq!(err.sink_error(), Some(&fmt::Error));
    assert_eq!(sink.seen, 11, "no frames after the failure, no retries");
}

#[test]
fn planning_is_reproducible_from_the_recorded_seed() {
    let first = Simulation::plan(SimulationConfig {
        step_count: 30,
        ..Default::default()
    })
    .unwrap();
    let again = Simulation::plan(first.config().clone().with_seed(first.seed())).unwrap();
    assert_eq!(first.colony(), again.colony());
}

#[test]
fn invalid_config_is_rejected() {
    let err = Simulation::plan(SimulationConfig {
        step_size: 0.0,
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.is_invalid_parameter());
}

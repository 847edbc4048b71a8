//! The static parts of every frame.

use crate::scheduler::FrameScheduler;
use formica_core::types::{AgentRole, Point2D};
use serde::Serialize;

/// Margin added around the outermost coordinates.
pub const SCENE_PADDING: f64 = 2.0;

/// Axis-aligned plot extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, grown by `padding` on each side.
    ///
    /// With no points the box is centred on the nest.
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Point2D>, padding: f64) -> Self {
        let mut bounds = Bounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        if bounds.min_x > bounds.max_x {
            bounds = Bounds {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
            };
        }
        Bounds {
            min_x: bounds.min_x - padding,
            max_x: bounds.max_x + padding,
            min_y: bounds.min_y - padding,
            max_y: bounds.max_y + padding,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: &Point2D) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

/// Fixed markers and plot extent shared by all frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub nest: Point2D,
    pub resource: Point2D,
    pub bounds: Bounds,
    /// Legend labels in playback order.
    pub labels: [&'static str; 3],
}

impl Scene {
    /// Fit the scene to every path the scheduler will draw.
    pub fn new(scheduler: &FrameScheduler, resource: Point2D) -> Self {
        let nest = Point2D::NEST;
        let fixed = [nest, resource];
        let points = AgentRole::ALL
            .iter()
            .flat_map(|role| scheduler.path(*role).points())
            .chain(fixed.iter());
        Self {
            nest,
            resource,
            bounds: Bounds::around(points, SCENE_PADDING),
            labels: AgentRole::ALL.map(AgentRole::label),
        }
    }
}

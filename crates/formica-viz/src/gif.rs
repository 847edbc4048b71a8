//! GIF render sink.
//!
//! Each frame is drawn from scratch onto a white canvas fitted to the
//! scene bounds, then appended to the animation. No text is drawn, so no
//! font backend is needed.

use crate::style::{agent_style, nest_style, resource_style};
use formica_core::types::Point2D;
use formica_runtime::playback::RenderSink;
use formica_runtime::scene::Scene;
use formica_runtime::scheduler::FrameState;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while drawing or encoding the animation.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// The drawing backend or GIF encoder failed.
    #[error("GIF backend error: {0}")]
    Backend(String),
    /// A frame arrived before `begin` or after `finish`.
    #[error("GIF sink is not open")]
    NotStarted,
}

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Canvas size and playback speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GifOptions {
    pub width: u32,
    pub height: u32,
    /// Delay between frames; 50 ms is 20 fps.
    pub frame_delay_ms: u32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 640,
            frame_delay_ms: 50,
        }
    }
}

/// Writes every frame it receives into an animated GIF file.
pub struct GifSink {
    path: PathBuf,
    options: GifOptions,
    scene: Option<Scene>,
    area: Option<DrawingArea<BitMapBackend<'static>, Shift>>,
    frames_written: usize,
}

impl GifSink {
    pub fn new(path: impl Into<PathBuf>, options: GifOptions) -> Self {
        Self {
            path: path.into(),
            options,
            scene: None,
            area: None,
            frames_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

fn coord(p: &Point2D) -> (f64, f64) {
    (p.x, p.y)
}

impl RenderSink for GifSink {
    type Error = RenderError;

    fn begin(&mut self, scene: &Scene, total_frames: usize) -> Result<(), RenderError> {
        let backend_area = BitMapBackend::gif(
            self.path.clone(),
            (self.options.width, self.options.height),
            self.options.frame_delay_ms,
        )
        .map_err(backend)?
        .into_drawing_area();

        info!(path = %self.path.display(), total_frames, "writing animation");
        self.area = Some(backend_area);
        self.scene = Some(scene.clone());
        self.frames_written = 0;
        Ok(())
    }

    fn frame(&mut self, state: &FrameState<'_>) -> Result<(), RenderError> {
        let (Some(area), Some(scene)) = (self.area.as_ref(), self.scene.as_ref()) else {
            return Err(RenderError::NotStarted);
        };

        area.fill(&WHITE).map_err(backend)?;
        let b = scene.bounds;
        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .build_cartesian_2d(b.min_x..b.max_x, b.min_y..b.max_y)
            .map_err(backend)?;

        let (nest, nest_size) = nest_style();
        let (food, food_size) = resource_style();
        chart
            .draw_series(std::iter::once(Circle::new(coord(&scene.nest), nest_size, nest)))
            .map_err(backend)?;
        chart
            .draw_series(std::iter::once(Circle::new(coord(&scene.resource), food_size, food)))
            .map_err(backend)?;

        for agent in &state.agents {
            let style = agent_style(agent.role);
            if !agent.drawn.is_empty() {
                chart
                    .draw_series(LineSeries::new(agent.drawn.iter().map(coord), style.line))
                    .map_err(backend)?;
            }
            if let Some(marker) = agent.marker {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        coord(&marker),
                        style.marker_size,
                        style.marker,
                    )))
                    .map_err(backend)?;
            }
        }

        area.present().map_err(backend)?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let area = self.area.take().ok_or(RenderError::NotStarted)?;
        // Dropping the backend writes the GIF trailer.
        drop(area);
        self.scene = None;
        debug!(frames = self.frames_written, "animation closed");
        Ok(())
    }
}

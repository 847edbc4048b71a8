//! Playback: feed the timeline to a renderer.
//!
//! The runtime never draws anything itself. A [`RenderSink`] receives the
//! scene once, then every frame in order, then a final `finish` call. Its
//! errors come back to the caller untouched inside
//! [`PlaybackError::Sink`]; playback stops at the first one and does not
//! retry.

use crate::scene::Scene;
use crate::scheduler::{FrameScheduler, FrameState};
use formica_core::error::FormicaError;
use thiserror::Error;
use tracing::debug;

/// Something that turns frames into output.
pub trait RenderSink {
    type Error: std::error::Error + 'static;

    /// Called once before the first frame.
    fn begin(&mut self, scene: &Scene, total_frames: usize) -> Result<(), Self::Error>;

    /// Called once per frame, in frame order.
    fn frame(&mut self, state: &FrameState<'_>) -> Result<(), Self::Error>;

    /// Called after the last frame. Flush and close here.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Why playback stopped early.
#[derive(Debug, Error)]
pub enum PlaybackError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Core(#[from] FormicaError),
    #[error("render sink failed: {0}")]
    Sink(#[source] E),
}

impl<E: std::error::Error + 'static> PlaybackError<E> {
    /// The sink's own error, if that is what stopped playback.
    pub fn sink_error(&self) -> Option<&E> {
        match self {
            PlaybackError::Sink(e) => Some(e),
            PlaybackError::Core(_) => None,
        }
    }
}

/// Drive `sink` through every frame. Returns the number of frames rendered.
pub fn play<S: RenderSink + ?Sized>(
    scheduler: &FrameScheduler,
    scene: &Scene,
    sink: &mut S,
) -> Result<usize, PlaybackError<S::Error>> {
    let total = scheduler.total_frames();
    debug!(total, "starting playback");
    sink.begin(scene, total).map_err(PlaybackError::Sink)?;

    for frame in 0..total {
        let state = scheduler.state_at(frame)?;
        sink.frame(&state).map_err(PlaybackError::Sink)?;
    }

    sink.finish().map_err(PlaybackError::Sink)?;
    Ok(total)
}

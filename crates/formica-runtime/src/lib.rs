//! # Formica Runtime
//!
//! Turns a colony plan into something that can be watched.
//!
//! Planning happens once, up front, in [`simulation`]. The
//! [`scheduler`] then maps a single global frame counter onto the three
//! agents' paths, one agent animating at a time, and [`playback`] feeds
//! those frames to whatever [`RenderSink`](playback::RenderSink) the
//! caller provides.

pub mod export;
pub mod playback;
pub mod scene;
pub mod scheduler;
pub mod simulation;

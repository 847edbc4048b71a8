//! # Formica Viz
//!
//! Renders a colony run as an animated GIF: the nest and the food as
//! fixed markers, each ant's path as a polyline that grows during its
//! phase, and a dot at each ant's current position.

pub mod gif;
pub mod style;

pub use gif::{GifOptions, GifSink, RenderError};

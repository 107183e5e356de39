//! Timeline rendering.
//!
//! `ScanOutcome` -> `Scene` (pure geometry, bottom layer first) -> `svg::Document`.
//!
//! Layers, bottom to top: canvas, grid, compaction marks, rebalance starts,
//! rebalance ends. End markers go last so nothing can hide them.

mod config;
mod error;
mod scale;
mod scene;
mod timeline;

#[cfg(test)]
mod tests;

pub use config::{Palette, TimelineConfig};
pub use error::RenderError;
pub use scale::TimeScale;
pub use scene::{Layer, Scene, Shape};
pub use timeline::TimelineRenderer;

//! Core geometry and renderer-facing data types
//!
//! Everything the plot types need to describe geometry to the hosting
//! renderer: vertices, bounds, convex hulls, and render batches.

pub mod geometry;
pub mod hull;
pub mod render_data;

pub use geometry::{vertex_utils, BoundingBox, Vertex};
pub use hull::{convex_hull_ccw, HullContour};
pub use render_data::{DrawCall, Material, PipelineType, RenderData};

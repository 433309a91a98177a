//! # bagplot
//!
//! Core of a bagplot (bivariate box plot) chart layer: given 2D points with
//! per-point density estimates, it computes a 50%-density ("median") convex
//! hull and a 99%-density outer hull, and exposes them — along with the
//! underlying point markers — as CPU-side render batches for a hosting
//! charting framework to draw.
//!
//! The pipeline is `sort by density desc → cumulative-mass partition →
//! convex hull ×2 → cache`. Density estimation, axis handling, and actual
//! rendering are the host's concern; this crate only turns bound columns
//! into deterministic geometry.
//!
//! ```
//! use bagplot::data::Table;
//! use bagplot::plots::BagPlot;
//!
//! let table = Table::new()
//!     .with_column("x", vec![0.0, 4.0, 4.0, 0.0, 2.0])
//!     .with_column("y", vec![0.0, 0.0, 4.0, 4.0, 2.0])
//!     .with_column("density", vec![1.0, 1.0, 1.0, 1.0, 1.0]);
//!
//! let mut bag = BagPlot::new();
//! bag.set_input(table, "x", "y", "density");
//! assert!(bag.recompute());
//! let outer = bag.outer_contour().unwrap();
//! assert!(outer.is_closed());
//! ```

pub mod core;
pub mod data;
pub mod plots;
pub mod styling;

pub use crate::core::{BoundingBox, HullContour, PipelineType, RenderData, Vertex};
pub use crate::data::Table;
pub use crate::plots::{BagCache, BagInputError, BagPlot, Figure, MarkerStyle, ScatterPlot};
pub use crate::styling::{Brush, Pen};

//! High-level plot type implementations
//!
//! This module contains the bag plot, the base scatter series it composes,
//! and the figure that hosts them.

pub mod bag;
pub mod figure;
pub mod scatter;
pub mod tooltip;

pub use bag::{BagCache, BagInputError, BagPlot, CacheState};
pub use figure::{Figure, LegendEntry, PlotElement, PlotType};
pub use scatter::{MarkerStyle, ScatterPlot};
pub use tooltip::{expand_format, TooltipRow};

//! Figure management for multiple overlaid plots
//!
//! A figure holds plots in one coordinate system and hands the renderer
//! their batches in order. Plot caches are brought up to date here, before
//! any draw data is emitted, which is what makes the single-threaded cache
//! handoff safe.

use crate::core::{BoundingBox, RenderData};
use crate::plots::{BagPlot, ScatterPlot};
use glam::Vec4;

/// A figure that can contain multiple overlaid plots
#[derive(Debug, Clone)]
pub struct Figure {
    plots: Vec<PlotElement>,

    /// Figure-level settings
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend_enabled: bool,
    pub grid_enabled: bool,
    pub background_color: Vec4,

    /// Cached data
    bounds: Option<BoundingBox>,
    dirty: bool,
}

/// A plot element that can be any type of plot
#[derive(Debug, Clone)]
pub enum PlotElement {
    Scatter(ScatterPlot),
    Bag(BagPlot),
}

/// Legend entry for a plot
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: Vec4,
    pub plot_type: PlotType,
}

/// Type of plot for legend rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotType {
    Scatter,
    Bag,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create a new empty figure
    pub fn new() -> Self {
        Self {
            plots: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            legend_enabled: true,
            grid_enabled: true,
            background_color: Vec4::new(1.0, 1.0, 1.0, 1.0), // White background
            bounds: None,
            dirty: true,
        }
    }

    /// Set the figure title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.set_title(title);
        self
    }

    /// Set the figure title in-place
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = Some(title.into());
        self.dirty = true;
    }

    /// Set axis labels
    pub fn with_labels<S: Into<String>>(mut self, x_label: S, y_label: S) -> Self {
        self.set_axis_labels(x_label, y_label);
        self
    }

    /// Set axis labels in-place
    pub fn set_axis_labels<S: Into<String>>(&mut self, x_label: S, y_label: S) {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self.dirty = true;
    }

    /// Enable or disable the legend
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.legend_enabled = enabled;
        self
    }

    pub fn set_grid(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
        self.dirty = true;
    }

    fn push_plot(&mut self, element: PlotElement) -> usize {
        self.plots.push(element);
        self.dirty = true;
        self.plots.len() - 1
    }

    /// Add a scatter plot to the figure
    pub fn add_scatter_plot(&mut self, plot: ScatterPlot) -> usize {
        self.push_plot(PlotElement::Scatter(plot))
    }

    /// Add a bag plot to the figure
    pub fn add_bag_plot(&mut self, plot: BagPlot) -> usize {
        self.push_plot(PlotElement::Bag(plot))
    }

    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    pub fn plots(&self) -> &[PlotElement] {
        &self.plots
    }

    pub fn plots_mut(&mut self) -> &mut [PlotElement] {
        self.dirty = true;
        &mut self.plots
    }

    /// Union bounding box of all plots
    pub fn bounds(&mut self) -> BoundingBox {
        if self.dirty || self.bounds.is_none() {
            let mut union: Option<BoundingBox> = None;
            for plot in &mut self.plots {
                let b = match plot {
                    PlotElement::Scatter(p) => p.bounds(),
                    PlotElement::Bag(p) => p.bounds(),
                };
                union = Some(match union {
                    Some(u) => u.union(&b),
                    None => b,
                });
            }
            self.bounds = Some(union.unwrap_or_default());
            self.dirty = false;
        }
        self.bounds.unwrap()
    }

    /// Render batches for all plots in insertion order.
    ///
    /// Updates (including bag cache recomputes) happen here, before draw
    /// data leaves the figure.
    pub fn render_data(&mut self) -> Vec<RenderData> {
        let mut out = Vec::new();
        for plot in &mut self.plots {
            match plot {
                PlotElement::Scatter(p) => {
                    if p.visible {
                        out.push(p.render_data());
                    }
                }
                PlotElement::Bag(p) => out.extend(p.render_data()),
            }
        }
        out
    }

    /// Legend entries for all labeled plots
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let mut entries = Vec::new();
        for plot in &self.plots {
            match plot {
                PlotElement::Scatter(p) => {
                    if let Some(label) = &p.label {
                        entries.push(LegendEntry {
                            label: label.clone(),
                            color: p.color,
                            plot_type: PlotType::Scatter,
                        });
                    }
                }
                PlotElement::Bag(p) => {
                    if let Some(label) = p.series_label() {
                        entries.push(LegendEntry {
                            label,
                            color: p.brush.color,
                            plot_type: PlotType::Bag,
                        });
                    }
                }
            }
        }
        entries
    }
}

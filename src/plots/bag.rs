//! Bag plot implementation (bivariate bagplot)
//!
//! A bagplot generalizes the box plot to bivariate data: points are ordered
//! by descending density, accumulated until 50% and 99% of the total density
//! mass, and each subset is wrapped in a convex hull. The inner ("median")
//! and outer hulls are drawn as nested filled contours under the raw point
//! markers.
//!
//! Density values are supplied by the caller as a table column; no density
//! estimation happens here.

use crate::core::{vertex_utils, BoundingBox, HullContour, Material, PipelineType, RenderData};
use crate::data::Table;
use crate::plots::scatter::ScatterPlot;
use crate::plots::tooltip::{expand_format, TooltipRow};
use crate::styling::{Brush, Pen};
use glam::{DVec2, Vec3, Vec4};
use log::{debug, warn};
use thiserror::Error;

const DEFAULT_TOOLTIP_FORMAT: &str = "%C, %l (%x, %y): %z";

/// Errors produced while binding or recomputing bag plot input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BagInputError {
    #[error("no input table bound")]
    MissingTable,
    #[error("column '{0}' not found in input table")]
    MissingColumn(String),
    #[error("column length mismatch: '{left}' has {left_len} rows, '{right}' has {right_len}")]
    ColumnLengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },
    #[error("invalid density {value} at row {row}: densities must be finite and non-negative")]
    InvalidDensity { row: usize, value: f64 },
}

/// Freshness of the computed bag geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Stale,
    Fresh,
}

/// The two bag contours plus freshness tracking
///
/// Owned and mutated only by [`BagPlot`]; the renderer reads it after
/// observing [`BagCache::is_fresh`]. A successful recompute replaces the
/// whole cache in one assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct BagCache {
    median: HullContour,
    outer: HullContour,
    state: CacheState,
    build_count: u64,
}

impl BagCache {
    fn new() -> Self {
        Self {
            median: HullContour::empty(),
            outer: HullContour::empty(),
            state: CacheState::Stale,
            build_count: 0,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.state == CacheState::Fresh
    }

    /// Median (50% density mass) hull contour
    pub fn median(&self) -> &HullContour {
        &self.median
    }

    /// Outer (99% density mass) hull contour
    pub fn outer(&self) -> &HullContour {
        &self.outer
    }

    /// Incremented on every successful rebuild
    pub fn build_count(&self) -> u64 {
        self.build_count
    }

    fn invalidate(&mut self) {
        self.state = CacheState::Stale;
    }
}

/// A density value paired with its source row
#[derive(Debug, Clone, Copy)]
struct DensityVal {
    density: f64,
    id: usize,
}

/// Pair densities with their row ids, ordered by density descending.
/// Ties keep no particular order.
fn sort_by_density_desc(densities: &[f64]) -> Vec<DensityVal> {
    let mut ids: Vec<DensityVal> = densities
        .iter()
        .enumerate()
        .map(|(id, &density)| DensityVal { density, id })
        .collect();
    ids.sort_unstable_by(|a, b| b.density.total_cmp(&a.density));
    ids
}

/// Split density-sorted points at the 50% and 99% cumulative-mass cutoffs.
///
/// The running sum is updated before each inclusion test, and the walk stops
/// entirely once the outer threshold is reached; both sets accumulate
/// independently rather than one filtering the other.
fn partition_by_mass(
    xs: &[f64],
    ys: &[f64],
    order: &[DensityVal],
    density_sum: f64,
) -> (Vec<DVec2>, Vec<DVec2>) {
    let median_threshold = 0.5 * density_sum;
    let outer_threshold = 0.99 * density_sum;

    let mut median_points = Vec::new();
    let mut outer_points = Vec::new();
    let mut sum = 0.0;
    for dv in order {
        let p = DVec2::new(xs[dv.id], ys[dv.id]);
        sum += dv.density;
        if sum < median_threshold {
            median_points.push(p);
        }
        if sum < outer_threshold {
            outer_points.push(p);
        } else {
            break;
        }
    }
    (median_points, outer_points)
}

/// Bag plot: nested 50%/99% density hulls over a base point series
#[derive(Debug, Clone)]
pub struct BagPlot {
    table: Option<Table>,
    x_column: Option<String>,
    y_column: Option<String>,
    density_column: Option<String>,
    category_column: Option<String>,
    use_index_for_x: bool,

    /// Whether the two hull fills are drawn at all
    pub bag_visible: bool,
    /// Fill for the bags; the outer bag uses a darkened, opaque copy and the
    /// median bag a half-opacity copy
    pub brush: Brush,
    /// Point marker styling
    pub pen: Pen,
    /// Hull outline styling
    pub line_pen: Pen,

    pub label: Option<String>,
    pub visible: bool,
    pub tooltip_format: Option<String>,
    pub indexed_labels: Option<Vec<String>>,

    points: Option<ScatterPlot>,
    cache: BagCache,
}

impl Default for BagPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl BagPlot {
    pub fn new() -> Self {
        Self {
            table: None,
            x_column: None,
            y_column: None,
            density_column: None,
            category_column: None,
            use_index_for_x: false,
            bag_visible: true,
            brush: Brush::new(Vec4::new(1.0, 0.0, 0.0, 1.0)),
            pen: Pen::new(Vec4::new(0.0, 0.0, 0.0, 1.0), 5.0),
            line_pen: Pen::new(Vec4::new(0.0, 0.0, 0.0, 1.0), 1.0),
            label: None,
            visible: true,
            tooltip_format: None,
            indexed_labels: None,
            points: None,
            cache: BagCache::new(),
        }
    }

    /// Bind an input table with explicit x, y, and density columns.
    ///
    /// Column existence and row alignment are checked at recompute time.
    pub fn set_input(
        &mut self,
        table: Table,
        x_column: &str,
        y_column: &str,
        density_column: &str,
    ) {
        self.table = Some(table);
        self.x_column = Some(x_column.to_string());
        self.y_column = Some(y_column.to_string());
        self.density_column = Some(density_column.to_string());
        self.use_index_for_x = false;
        self.cache.invalidate();
    }

    /// Convenience binding: y and density columns only, x = row index.
    ///
    /// Rejected before anything is bound when either column is absent or
    /// their lengths differ; previously bound input is left untouched.
    pub fn set_input_y_density(
        &mut self,
        table: Table,
        y_column: &str,
        density_column: &str,
    ) -> Result<(), BagInputError> {
        let y = table
            .column(y_column)
            .ok_or_else(|| BagInputError::MissingColumn(y_column.to_string()))?;
        let density = table
            .column(density_column)
            .ok_or_else(|| BagInputError::MissingColumn(density_column.to_string()))?;
        if y.len() != density.len() {
            let err = BagInputError::ColumnLengthMismatch {
                left: y_column.to_string(),
                left_len: y.len(),
                right: density_column.to_string(),
                right_len: density.len(),
            };
            warn!("bag plot input rejected: {err}");
            return Err(err);
        }

        self.table = Some(table);
        self.x_column = None;
        self.y_column = Some(y_column.to_string());
        self.density_column = Some(density_column.to_string());
        self.use_index_for_x = true;
        self.cache.invalidate();
        Ok(())
    }

    /// Replace a numeric column in the bound table, invalidating the cache
    pub fn update_column(&mut self, name: &str, values: Vec<f64>) -> Result<(), BagInputError> {
        let table = self.table.as_mut().ok_or(BagInputError::MissingTable)?;
        table.set_column(name, values);
        self.cache.invalidate();
        Ok(())
    }

    /// Bind the text column consumed by the `%C` tooltip tag
    pub fn set_category_column(&mut self, name: &str) {
        self.category_column = Some(name.to_string());
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Read-only cache access for the renderer
    pub fn cache(&self) -> &BagCache {
        &self.cache
    }

    /// True once the contours reflect the currently bound input
    pub fn is_ready(&self) -> bool {
        self.cache.is_fresh()
    }

    /// Median contour, available only while the cache is fresh
    pub fn median_contour(&self) -> Option<&HullContour> {
        self.cache.is_fresh().then(|| self.cache.median())
    }

    /// Outer contour, available only while the cache is fresh
    pub fn outer_contour(&self) -> Option<&HullContour> {
        self.cache.is_fresh().then(|| self.cache.outer())
    }

    /// Series label: explicit label, else the density column name
    pub fn series_label(&self) -> Option<String> {
        self.label.clone().or_else(|| self.density_column.clone())
    }

    fn resolved_xy(&self) -> Result<(Vec<f64>, Vec<f64>), BagInputError> {
        let table = self.table.as_ref().ok_or(BagInputError::MissingTable)?;
        let y_name = self
            .y_column
            .as_deref()
            .ok_or_else(|| BagInputError::MissingColumn("y".to_string()))?;
        let ys = table
            .column(y_name)
            .ok_or_else(|| BagInputError::MissingColumn(y_name.to_string()))?;

        let xs: Vec<f64> = if self.use_index_for_x {
            (0..ys.len()).map(|i| i as f64).collect()
        } else {
            let x_name = self
                .x_column
                .as_deref()
                .ok_or_else(|| BagInputError::MissingColumn("x".to_string()))?;
            let xs = table
                .column(x_name)
                .ok_or_else(|| BagInputError::MissingColumn(x_name.to_string()))?;
            if xs.len() != ys.len() {
                return Err(BagInputError::ColumnLengthMismatch {
                    left: x_name.to_string(),
                    left_len: xs.len(),
                    right: y_name.to_string(),
                    right_len: ys.len(),
                });
            }
            xs.to_vec()
        };
        Ok((xs, ys.to_vec()))
    }

    fn update_cache(&mut self) -> Result<(), BagInputError> {
        let (xs, ys) = self.resolved_xy()?;

        // Refresh the base point series first so markers stay drawable even
        // when the density step below fails.
        // Lengths are already validated, so construction cannot fail here
        self.points = match ScatterPlot::new(xs.clone(), ys.clone()) {
            Ok(mut points) => {
                points.set_color(self.pen.color);
                points.set_marker_size(self.pen.width.max(1.0));
                Some(points)
            }
            Err(_) => None,
        };

        let table = self.table.as_ref().ok_or(BagInputError::MissingTable)?;
        let density_name = self
            .density_column
            .as_deref()
            .ok_or_else(|| BagInputError::MissingColumn("density".to_string()))?;
        let density = table
            .column(density_name)
            .ok_or_else(|| BagInputError::MissingColumn(density_name.to_string()))?;
        if density.len() != ys.len() {
            return Err(BagInputError::ColumnLengthMismatch {
                left: self.y_column.clone().unwrap_or_default(),
                left_len: ys.len(),
                right: density_name.to_string(),
                right_len: density.len(),
            });
        }
        for (row, &value) in density.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BagInputError::InvalidDensity { row, value });
            }
        }

        let order = sort_by_density_desc(density);
        let density_sum: f64 = density.iter().sum();
        let (median_points, outer_points) = partition_by_mass(&xs, &ys, &order, density_sum);

        self.cache = BagCache {
            median: HullContour::from_points(&median_points),
            outer: HullContour::from_points(&outer_points),
            state: CacheState::Fresh,
            build_count: self.cache.build_count + 1,
        };
        Ok(())
    }

    /// Run the full pipeline (sort, partition, two hulls) and publish the
    /// cache. Failures are reported as diagnostics; the cache stays stale
    /// and no error crosses this boundary.
    pub fn recompute(&mut self) -> bool {
        match self.update_cache() {
            Ok(()) => true,
            Err(err @ (BagInputError::MissingTable | BagInputError::MissingColumn(_))) => {
                debug!("bag plot recompute skipped: {err}");
                false
            }
            Err(err) => {
                warn!("bag plot recompute failed: {err}");
                false
            }
        }
    }

    /// Data bounds of the underlying point series
    pub fn bounds(&mut self) -> BoundingBox {
        if !self.cache.is_fresh() {
            let _ = self.recompute();
        }
        self.points
            .as_mut()
            .map(|p| p.bounds())
            .unwrap_or_default()
    }

    /// Tooltip label for an interacted point, expanded from the configured
    /// format (or the `"%C, %l (%x, %y): %z"` default)
    pub fn tooltip_label(&self, plot_pos: DVec2, series_index: usize) -> String {
        let format = self
            .tooltip_format
            .as_deref()
            .unwrap_or(DEFAULT_TOOLTIP_FORMAT);
        let table = self.table.as_ref();
        let density = table
            .zip(self.density_column.as_deref())
            .and_then(|(t, name)| t.column(name))
            .and_then(|col| col.get(series_index))
            .copied();
        let category = table
            .zip(self.category_column.as_deref())
            .and_then(|(t, name)| t.text_column(name))
            .and_then(|col| col.get(series_index))
            .map(|s| s.as_str());
        let series_label = self.series_label().unwrap_or_default();
        let indexed_label = self
            .indexed_labels
            .as_ref()
            .and_then(|labels| labels.get(series_index))
            .map(|s| s.as_str());

        expand_format(
            format,
            &TooltipRow {
                x: plot_pos.x,
                y: plot_pos.y,
                density,
                series_index,
                series_label: &series_label,
                indexed_label,
                category,
            },
        )
    }

    /// Render batches in draw order: outer bag, median bag, point markers.
    ///
    /// Recomputes first if stale (scene update precedes draw). If the cache
    /// cannot be made fresh the bag overlay is skipped entirely and only the
    /// markers are emitted.
    pub fn render_data(&mut self) -> Vec<RenderData> {
        if !self.visible {
            return Vec::new();
        }
        if !self.cache.is_fresh() {
            let _ = self.recompute();
        }

        let mut out = Vec::new();
        if self.bag_visible && self.cache.is_fresh() {
            let outer_brush = self.brush.darkened().with_opacity(1.0);
            let median_brush = self.brush.with_opacity(0.5);
            // Local copies; stored styles are never mutated during paint
            Self::contour_render_data(&mut out, self.cache.outer(), &outer_brush, &self.line_pen);
            Self::contour_render_data(&mut out, self.cache.median(), &median_brush, &self.line_pen);
        } else if self.bag_visible {
            debug!("bag cache not ready, skipping bag overlay");
        }

        if let Some(points) = self.points.as_mut() {
            out.push(points.render_data());
        }
        out
    }

    fn contour_render_data(
        out: &mut Vec<RenderData>,
        contour: &HullContour,
        brush: &Brush,
        pen: &Pen,
    ) {
        let to_vec3 = |p: &DVec2| Vec3::new(p.x as f32, p.y as f32, 0.0);
        if contour.is_closed() {
            let ring: Vec<Vec3> = contour.ring().iter().map(to_vec3).collect();
            let fill = vertex_utils::create_convex_fill(&ring, brush.effective_color());
            out.push(RenderData::non_indexed(
                PipelineType::Triangles,
                fill,
                Material {
                    albedo: brush.effective_color(),
                    ..Default::default()
                },
            ));
            let loop_points: Vec<Vec3> = contour.points().iter().map(to_vec3).collect();
            let outline = vertex_utils::create_polyline(&loop_points, pen.color);
            out.push(RenderData::non_indexed(
                PipelineType::Lines,
                outline,
                Material {
                    albedo: pen.color,
                    roughness: pen.width, // stash line width
                    ..Default::default()
                },
            ));
        } else if contour.len() == 2 {
            let segment: Vec<Vec3> = contour.points().iter().map(to_vec3).collect();
            let verts = vertex_utils::create_polyline(&segment, pen.color);
            out.push(RenderData::non_indexed(
                PipelineType::Lines,
                verts,
                Material {
                    albedo: pen.color,
                    roughness: pen.width,
                    ..Default::default()
                },
            ));
        }
        // 0- and 1-point contours draw nothing
    }
}

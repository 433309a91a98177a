//! Vertex and bounding-box primitives shared by all plot types

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Vertex data for rendering points, lines, and triangles
///
/// Layout matches what the hosting renderer uploads verbatim; `normal.z`
/// carries the per-point marker size for the point pipeline.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            normal: [0.0, 0.0, 1.0], // Default normal
            tex_coords: [0.0, 0.0],  // Default UV
        }
    }
}

/// Axis-aligned bounding box in data space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight box around a point set; empty input yields the zero box
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            min = min.min(*p);
            max = max.max(*p);
        }
        if !min.x.is_finite() {
            return Self::default();
        }
        Self { min, max }
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Utility functions for creating common vertex patterns
pub mod vertex_utils {
    use super::*;

    /// One vertex per (x, y) sample at z = 0
    pub fn create_scatter_plot(x_data: &[f64], y_data: &[f64], color: Vec4) -> Vec<Vertex> {
        x_data
            .iter()
            .zip(y_data.iter())
            .map(|(&x, &y)| Vertex::new(Vec3::new(x as f32, y as f32, 0.0), color))
            .collect()
    }

    /// Line-list vertices tracing a point loop segment by segment
    pub fn create_polyline(points: &[Vec3], color: Vec4) -> Vec<Vertex> {
        let mut verts = Vec::new();
        if points.len() < 2 {
            return verts;
        }
        for pair in points.windows(2) {
            verts.push(Vertex::new(pair[0], color));
            verts.push(Vertex::new(pair[1], color));
        }
        verts
    }

    /// Triangle-fan fill of a convex polygon, emitted as a triangle list
    ///
    /// `ring` is the polygon boundary without a closure point; convexity is
    /// the caller's invariant.
    pub fn create_convex_fill(ring: &[Vec3], color: Vec4) -> Vec<Vertex> {
        let mut verts = Vec::new();
        if ring.len() < 3 {
            return verts;
        }
        let anchor = ring[0];
        for pair in ring[1..].windows(2) {
            verts.push(Vertex::new(anchor, color));
            verts.push(Vertex::new(pair[0], color));
            verts.push(Vertex::new(pair[1], color));
        }
        verts
    }
}

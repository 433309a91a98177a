//! CPU-side render batches handed to the hosting renderer
//!
//! The bagplot core never owns a GPU device. Plots emit `RenderData`
//! batches and the hosting charting framework uploads and draws them in
//! whatever pipelines it maintains.

use glam::Vec4;

use crate::core::geometry::Vertex;

/// Rendering pipeline types the host is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineType {
    Points,
    Lines,
    Triangles,
}

/// Material parameters for a render batch
///
/// `emissive` and `roughness` double as stash slots for marker edge color
/// and line/edge width, matching the point-pipeline convention of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub albedo: Vec4,
    pub emissive: Vec4,
    pub roughness: f32,
    pub metallic: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec4::ONE,
            emissive: Vec4::ZERO,
            roughness: 0.0,
            metallic: 0.0,
        }
    }
}

/// A single draw invocation within a render batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub vertex_offset: usize,
    pub vertex_count: usize,
    pub index_offset: Option<usize>,
    pub index_count: Option<usize>,
    pub instance_count: usize,
}

/// Complete geometry + material payload for one draw pass
#[derive(Debug, Clone)]
pub struct RenderData {
    pub pipeline_type: PipelineType,
    pub vertices: Vec<Vertex>,
    pub indices: Option<Vec<u32>>,
    pub material: Material,
    pub draw_calls: Vec<DrawCall>,
}

impl RenderData {
    /// Convenience constructor for a non-indexed single-draw batch
    pub fn non_indexed(pipeline_type: PipelineType, vertices: Vec<Vertex>, material: Material) -> Self {
        let draw_call = DrawCall {
            vertex_offset: 0,
            vertex_count: vertices.len(),
            index_offset: None,
            index_count: None,
            instance_count: 1,
        };
        Self {
            pipeline_type,
            vertices,
            indices: None,
            material,
            draw_calls: vec![draw_call],
        }
    }
}

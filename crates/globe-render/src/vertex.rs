//! Interleaved vertex format for the globe mesh.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x2 | uv       |

use std::mem;

use bytemuck::{Pod, Zeroable};
use globe_cubesphere::SphereMesh;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// One globe vertex: position and normal on the unit sphere plus face UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Vertex attributes matching [`GlobeVertex`].
pub const GLOBE_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout for globe render pipelines.
pub const GLOBE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<GlobeVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &GLOBE_VERTEX_ATTRIBUTES,
};

const _: () = assert!(
    mem::size_of::<GlobeVertex>() == 32,
    "GlobeVertex size changed, update GLOBE_VERTEX_LAYOUT"
);
const _: () = assert!(mem::offset_of!(GlobeVertex, normal) == 12);
const _: () = assert!(mem::offset_of!(GlobeVertex, uv) == 24);

/// Interleave the separate attribute arrays of a merged sphere mesh.
#[must_use]
pub fn interleave(mesh: &SphereMesh) -> Vec<GlobeVertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .zip(&mesh.uvs)
        .map(|((p, n), uv)| GlobeVertex {
            position: p.to_array(),
            normal: n.to_array(),
            uv: uv.to_array(),
        })
        .collect()
}

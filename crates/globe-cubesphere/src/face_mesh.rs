//! Tessellation of a single cube face into a warped spherical grid.

use glam::{Vec2, Vec3};

use crate::error::{MeshError, check_resolution};
use crate::projection::{ProjectionMethod, face_point_on_cube, project};
use crate::CubeFace;

/// Geometry for one face of the cube sphere.
///
/// Holds `n²` vertices laid out row-major (`i = x + y * n`) and
/// `2 * (n - 1)²` triangles as a flat index list. Positions lie on the unit
/// sphere, so each normal equals its position.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceMesh {
    /// Face this grid was generated for.
    pub face: CubeFace,
    /// Samples per side.
    pub resolution: u32,
    /// Vertex positions on the unit sphere.
    pub positions: Vec<Vec3>,
    /// Outward unit normals.
    pub normals: Vec<Vec3>,
    /// Grid parameters in \[0, 1\]².
    pub uvs: Vec<Vec2>,
    /// Triangle list, three indices per triangle, local to this face.
    pub indices: Vec<u32>,
}

impl FaceMesh {
    /// Number of vertices (`n²`).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles (`2 (n - 1)²`).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Tessellate `face` into an `resolution × resolution` grid projected onto the unit sphere.
///
/// Returns [`MeshError::InvalidArgument`] if `resolution` is out of range.
pub fn generate_face(
    resolution: u32,
    face: CubeFace,
    projection: ProjectionMethod,
) -> Result<FaceMesh, MeshError> {
    check_resolution(resolution)?;

    let n = resolution as usize;
    let num_vertices = n * n;
    let num_indices = (n - 1) * (n - 1) * 6;
    let last = (n - 1) as f64;

    let mut positions = Vec::with_capacity(num_vertices);
    let mut normals = Vec::with_capacity(num_vertices);
    let mut uvs = Vec::with_capacity(num_vertices);
    let mut indices = Vec::with_capacity(num_indices);

    let stride = resolution;
    for y in 0..resolution {
        let ty = y as f64 / last;
        for x in 0..resolution {
            let tx = x as f64 / last;
            let i = x + y * stride;

            let on_sphere = project(face_point_on_cube(face, tx, ty), projection).as_vec3();
            positions.push(on_sphere);
            normals.push(on_sphere);
            uvs.push(Vec2::new(tx as f32, ty as f32));

            if x + 1 < resolution && y + 1 < resolution {
                indices.extend_from_slice(&[i, i + stride + 1, i + stride]);
                indices.extend_from_slice(&[i, i + 1, i + stride + 1]);
            }
        }
    }

    debug_assert_eq!(positions.len(), num_vertices);
    debug_assert_eq!(indices.len(), num_indices);

    Ok(FaceMesh {
        face,
        resolution,
        positions,
        normals,
        uvs,
        indices,
    })
}

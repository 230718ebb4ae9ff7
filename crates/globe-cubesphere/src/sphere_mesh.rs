//! Six-face generation and merging into a single globe mesh.

use glam::{Vec2, Vec3};

use crate::error::{MeshError, check_resolution};
use crate::face_mesh::{FaceMesh, generate_face};
use crate::projection::ProjectionMethod;
use crate::CubeFace;

/// Generate all six faces at `resolution` using the Everitt warp.
///
/// Faces are returned in [`CubeFace::ALL`] order. Fails with
/// [`MeshError::InvalidArgument`] when `resolution < 2`.
pub fn generate(resolution: u32) -> Result<[FaceMesh; 6], MeshError> {
    generate_with(resolution, ProjectionMethod::Everitt)
}

/// Generate all six faces at `resolution` with an explicit projection.
pub fn generate_with(
    resolution: u32,
    projection: ProjectionMethod,
) -> Result<[FaceMesh; 6], MeshError> {
    check_resolution(resolution)?;
    let [f0, f1, f2, f3, f4, f5] = CubeFace::ALL;
    Ok([
        generate_face(resolution, f0, projection)?,
        generate_face(resolution, f1, projection)?,
        generate_face(resolution, f2, projection)?,
        generate_face(resolution, f3, projection)?,
        generate_face(resolution, f4, projection)?,
        generate_face(resolution, f5, projection)?,
    ])
}

/// A generated cube sphere: six face grids sharing one resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeSphere {
    resolution: u32,
    projection: ProjectionMethod,
    faces: [FaceMesh; 6],
}

impl CubeSphere {
    /// Build a cube sphere with the default (Everitt) projection.
    pub fn new(resolution: u32) -> Result<Self, MeshError> {
        Self::with_projection(resolution, ProjectionMethod::Everitt)
    }

    /// Build a cube sphere with the given projection.
    pub fn with_projection(
        resolution: u32,
        projection: ProjectionMethod,
    ) -> Result<Self, MeshError> {
        let faces = generate_with(resolution, projection)?;
        log::debug!(
            "Generated cube sphere: resolution={resolution}, projection={projection:?}, vertices={}",
            6 * resolution as usize * resolution as usize
        );
        Ok(Self {
            resolution,
            projection,
            faces,
        })
    }

    /// Samples per face side.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Projection used to warp the faces.
    #[must_use]
    pub fn projection(&self) -> ProjectionMethod {
        self.projection
    }

    /// All faces in canonical order.
    #[must_use]
    pub fn faces(&self) -> &[FaceMesh; 6] {
        &self.faces
    }

    /// The grid for a single face.
    #[must_use]
    pub fn face(&self, face: CubeFace) -> &FaceMesh {
        &self.faces[face.index()]
    }

    /// Concatenate the faces into one indexed mesh.
    #[must_use]
    pub fn merge(&self) -> SphereMesh {
        SphereMesh::from_faces(&self.faces)
    }

    /// Consume the cube sphere, returning the face grids.
    #[must_use]
    pub fn into_faces(self) -> [FaceMesh; 6] {
        self.faces
    }
}

/// The six faces concatenated into a single vertex/index buffer.
///
/// Seam vertices are duplicated, not welded: adjacent faces meet at
/// coincident positions but keep their own normals and UVs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions on the unit sphere.
    pub positions: Vec<Vec3>,
    /// Outward unit normals.
    pub normals: Vec<Vec3>,
    /// Per-face grid parameters in \[0, 1\]².
    pub uvs: Vec<Vec2>,
    /// Triangle list indexing the combined vertex arrays.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Merge face grids in order, offsetting each face's indices by the
    /// number of vertices that precede it.
    #[must_use]
    pub fn from_faces(faces: &[FaceMesh]) -> Self {
        let vertex_total: usize = faces.iter().map(FaceMesh::vertex_count).sum();
        let index_total: usize = faces.iter().map(|f| f.indices.len()).sum();

        let mut mesh = SphereMesh {
            positions: Vec::with_capacity(vertex_total),
            normals: Vec::with_capacity(vertex_total),
            uvs: Vec::with_capacity(vertex_total),
            indices: Vec::with_capacity(index_total),
        };

        for face in faces {
            let offset = mesh.positions.len() as u32;
            mesh.positions.extend_from_slice(&face.positions);
            mesh.normals.extend_from_slice(&face.normals);
            mesh.uvs.extend_from_slice(&face.uvs);
            mesh.indices.extend(face.indices.iter().map(|&i| i + offset));
        }

        mesh
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_face_order() {
        let faces = generate(3).unwrap();
        for (mesh, face) in faces.iter().zip(CubeFace::ALL) {
            assert_eq!(mesh.face, face);
            assert_eq!(mesh.resolution, 3);
        }
    }

    #[test]
    fn test_generate_rejects_small_resolution() {
        assert!(matches!(
            generate(0),
            Err(MeshError::InvalidArgument { resolution: 0, .. })
        ));
        assert!(matches!(
            generate(1),
            Err(MeshError::InvalidArgument { resolution: 1, .. })
        ));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let n = 4u32;
        let sphere = CubeSphere::new(n).unwrap();
        let merged = sphere.merge();
        let per_face = (n * n) as usize;
        let per_face_indices = 6 * ((n - 1) * (n - 1)) as usize;

        assert_eq!(merged.vertex_count(), 6 * per_face);
        assert_eq!(merged.indices.len(), 6 * per_face_indices);

        for (fi, face) in sphere.faces().iter().enumerate() {
            let slice = &merged.indices[fi * per_face_indices..(fi + 1) * per_face_indices];
            for (&merged_i, &local_i) in slice.iter().zip(&face.indices) {
                assert_eq!(merged_i, local_i + (fi * per_face) as u32);
            }
            assert_eq!(
                &merged.positions[fi * per_face..(fi + 1) * per_face],
                face.positions.as_slice()
            );
        }
    }

    #[test]
    fn test_face_lookup() {
        let sphere = CubeSphere::new(2).unwrap();
        for face in CubeFace::ALL {
            assert_eq!(sphere.face(face).face, face);
        }
        assert_eq!(sphere.resolution(), 2);
        assert_eq!(sphere.projection(), ProjectionMethod::Everitt);
    }

    #[test]
    fn test_merge_empty() {
        let mesh = SphereMesh::from_faces(&[]);
        assert_eq!(mesh, SphereMesh::default());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CubeSphere>();
        assert_send_sync::<SphereMesh>();
        assert_send_sync::<FaceMesh>();
    }
}

//! Quality statistics for a merged globe mesh.

use globe_cubesphere::SphereMesh;

/// Summary of a merged mesh, logged after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    /// Largest `| |p| - 1 |` over all positions.
    pub max_radius_error: f32,
    pub min_triangle_area: f32,
    pub max_triangle_area: f32,
}

impl MeshStats {
    /// Compute statistics over every vertex and triangle.
    #[must_use]
    pub fn measure(mesh: &SphereMesh) -> Self {
        let max_radius_error = mesh
            .positions
            .iter()
            .map(|p| (p.length() - 1.0).abs())
            .fold(0.0f32, f32::max);

        let (min_triangle_area, max_triangle_area) = mesh
            .triangles()
            .map(|[a, b, c]| {
                let a = mesh.positions[a as usize];
                let b = mesh.positions[b as usize];
                let c = mesh.positions[c as usize];
                0.5 * (b - a).cross(c - a).length()
            })
            .fold((f32::INFINITY, 0.0f32), |(lo, hi), area| {
                (lo.min(area), hi.max(area))
            });

        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            max_radius_error,
            min_triangle_area,
            max_triangle_area,
        }
    }

    /// Ratio of the largest to the smallest triangle area.
    #[must_use]
    pub fn area_ratio(&self) -> f32 {
        if self.min_triangle_area > 0.0 {
            self.max_triangle_area / self.min_triangle_area
        } else {
            f32::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_cubesphere::{CubeSphere, ProjectionMethod};

    #[test]
    fn test_counts_match_mesh() {
        let mesh = CubeSphere::new(5).unwrap().merge();
        let stats = MeshStats::measure(&mesh);
        assert_eq!(stats.vertices, 150);
        assert_eq!(stats.triangles, 6 * 2 * 16);
        assert!(stats.max_radius_error < 1e-5);
        assert!(stats.min_triangle_area > 0.0);
    }

    #[test]
    fn test_everitt_ratio_below_normalize() {
        let everitt = MeshStats::measure(&CubeSphere::new(21).unwrap().merge());
        let normalize = MeshStats::measure(
            &CubeSphere::with_projection(21, ProjectionMethod::Normalize)
                .unwrap()
                .merge(),
        );
        assert!(everitt.area_ratio() < normalize.area_ratio());
    }

    #[test]
    fn test_empty_mesh_ratio() {
        let stats = MeshStats::measure(&SphereMesh::default());
        assert_eq!(stats.triangles, 0);
        assert!(stats.area_ratio().is_infinite());
    }
}

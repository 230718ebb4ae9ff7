//! Cube-to-sphere projection methods.
//!
//! Provides two projection approaches:
//! - **Everitt**: closed-form warp with low area distortion, used for the globe.
//! - **Normalize**: plain radial projection, kept for comparison and debugging.

use glam::DVec3;

use crate::CubeFace;

/// Selects which cube-to-sphere projection method to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProjectionMethod {
    /// Everitt/Mathworld analytic warp: near-uniform cell areas.
    #[default]
    Everitt,
    /// Radial normalization of the cube point: cells shrink toward face corners.
    Normalize,
}

/// Map grid parameters `(tx, ty)` in \[0, 1\] onto the surface of the `[-1, 1]` cube.
///
/// `(0.5, 0.5)` maps to the face normal.
#[inline]
#[must_use]
pub fn face_point_on_cube(face: CubeFace, tx: f64, ty: f64) -> DVec3 {
    face.normal() + face.axis_a() * (2.0 * tx - 1.0) + face.axis_b() * (2.0 * ty - 1.0)
}

/// Analytic cube-to-sphere using the Everitt/Mathworld mapping.
///
/// Given a point on the cube surface (one coordinate is `±1`), compute the
/// corresponding unit sphere point:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
///
/// Radicands are clamped at zero so rounding at the cube corners never yields NaN.
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(p: DVec3) -> DVec3 {
    let xx = p.x * p.x;
    let yy = p.y * p.y;
    let zz = p.z * p.z;
    let x2 = xx / 2.0;
    let y2 = yy / 2.0;
    let z2 = zz / 2.0;

    DVec3::new(
        p.x * (1.0 - y2 - z2 + yy * zz / 3.0).max(0.0).sqrt(),
        p.y * (1.0 - z2 - x2 + xx * zz / 3.0).max(0.0).sqrt(),
        p.z * (1.0 - x2 - y2 + xx * yy / 3.0).max(0.0).sqrt(),
    )
}

/// Project a cube surface point onto the unit sphere using the specified method.
#[inline]
#[must_use]
pub fn project(cube_point: DVec3, method: ProjectionMethod) -> DVec3 {
    match method {
        ProjectionMethod::Everitt => cube_to_sphere_everitt(cube_point),
        ProjectionMethod::Normalize => cube_point.normalize_or_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_face_center_maps_to_normal() {
        for face in CubeFace::ALL {
            let cube_pt = face_point_on_cube(face, 0.5, 0.5);
            assert!((cube_pt - face.normal()).length() < EPSILON);
            let sphere_pt = cube_to_sphere_everitt(cube_pt);
            assert!(
                (sphere_pt - face.normal()).length() < EPSILON,
                "Face center of {face:?} did not map to normal: got {sphere_pt:?}"
            );
        }
    }

    #[test]
    fn test_everitt_outputs_on_unit_sphere() {
        for face in CubeFace::ALL {
            for i in 0..=16 {
                for j in 0..=16 {
                    let tx = i as f64 / 16.0;
                    let ty = j as f64 / 16.0;
                    let p = cube_to_sphere_everitt(face_point_on_cube(face, tx, ty));
                    assert!(
                        (p.length() - 1.0).abs() < 1e-10,
                        "Not on unit sphere for {face:?} at ({tx}, {ty}): length = {}",
                        p.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_cube_corner_is_finite() {
        let s = 1.0 / 3.0_f64.sqrt();
        let p = cube_to_sphere_everitt(DVec3::new(1.0, -1.0, 1.0));
        assert!(p.is_finite());
        assert!((p - DVec3::new(s, -s, s)).length() < EPSILON);
    }

    #[test]
    fn test_radicand_clamped_outside_cube() {
        // Slightly outside the cube drives the radicand negative; the result must stay finite.
        let p = cube_to_sphere_everitt(DVec3::new(0.0, 1.5, 1.5));
        assert!(p.is_finite());
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn test_grid_corners_on_cube_corners() {
        for face in CubeFace::ALL {
            for (tx, ty) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
                let p = face_point_on_cube(face, tx, ty);
                assert_eq!(p.abs(), DVec3::ONE, "{face:?} ({tx}, {ty}) -> {p:?}");
            }
        }
    }

    #[test]
    fn test_project_dispatches_correctly() {
        let cube_pt = face_point_on_cube(CubeFace::PosX, 0.3, 0.7);
        assert_eq!(
            project(cube_pt, ProjectionMethod::Everitt),
            cube_to_sphere_everitt(cube_pt)
        );
        assert_eq!(
            project(cube_pt, ProjectionMethod::Normalize),
            cube_pt.normalize()
        );
    }

    #[test]
    fn test_methods_differ_off_center() {
        let cube_pt = face_point_on_cube(CubeFace::PosZ, 0.8, 0.1);
        let a = project(cube_pt, ProjectionMethod::Everitt);
        let b = project(cube_pt, ProjectionMethod::Normalize);
        assert!((a - b).length() > 1e-3);
    }

    #[test]
    fn test_default_projection_method_is_everitt() {
        assert_eq!(ProjectionMethod::default(), ProjectionMethod::Everitt);
    }
}

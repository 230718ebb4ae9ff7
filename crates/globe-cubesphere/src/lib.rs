//! Cube-sphere globe geometry: face bases, cube-to-sphere projection, and
//! tessellation of the six faces into position/normal/UV/index buffers.
//!
//! The crate is pure numeric code with no rendering dependency; uploading the
//! result to the GPU lives in `globe-render`.

mod cube_face;
mod error;
mod face_mesh;
mod projection;
mod sphere_mesh;

pub use cube_face::CubeFace;
pub use error::{MAX_RESOLUTION, MIN_RESOLUTION, MeshError};
pub use face_mesh::{FaceMesh, generate_face};
pub use projection::{ProjectionMethod, cube_to_sphere_everitt, face_point_on_cube, project};
pub use sphere_mesh::{CubeSphere, SphereMesh, generate, generate_with};

//! GPU adapter for the globe mesh: interleaved vertex format and buffer upload.
//!
//! Keeps `globe-cubesphere` free of any rendering dependency.

pub mod buffer;
pub mod gpu;
pub mod vertex;

pub use buffer::{BufferAllocator, IndexData, MeshBuffer, index_data_for};
pub use gpu::create_headless_device;
pub use vertex::{GLOBE_VERTEX_ATTRIBUTES, GLOBE_VERTEX_LAYOUT, GlobeVertex, interleave};

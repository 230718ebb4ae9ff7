//! Vertex and index buffer upload for the globe mesh.

use globe_cubesphere::SphereMesh;
use wgpu::util::DeviceExt;

use crate::vertex::interleave;

/// A globe mesh resident on the GPU.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
}

impl MeshBuffer {
    /// Bind vertex and index buffers to a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), self.index_format);
    }

    /// Draw the entire mesh using indexed rendering.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Index data that can be either u16 or u32 format.
#[derive(Debug, PartialEq)]
pub enum IndexData {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexData {
    /// Narrow `indices` to `u16` when every value fits, otherwise keep `u32`.
    #[must_use]
    pub fn from_u32(indices: &[u32]) -> Self {
        if indices.iter().all(|&i| i <= u16::MAX as u32) {
            IndexData::U16(indices.iter().map(|&i| i as u16).collect())
        } else {
            IndexData::U32(indices.to_vec())
        }
    }

    /// Get the appropriate wgpu index format for this data.
    pub fn format(&self) -> wgpu::IndexFormat {
        match self {
            IndexData::U16(_) => wgpu::IndexFormat::Uint16,
            IndexData::U32(_) => wgpu::IndexFormat::Uint32,
        }
    }

    /// Get the number of indices.
    pub fn count(&self) -> u32 {
        match self {
            IndexData::U16(data) => data.len() as u32,
            IndexData::U32(data) => data.len() as u32,
        }
    }

    /// Get the raw byte slice for buffer creation.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IndexData::U16(data) => bytemuck::cast_slice(data),
            IndexData::U32(data) => bytemuck::cast_slice(data),
        }
    }
}

/// Index data for a merged sphere, using `u16` when the mesh is small enough.
#[must_use]
pub fn index_data_for(mesh: &SphereMesh) -> IndexData {
    IndexData::from_u32(&mesh.indices)
}

/// GPU buffer allocator for globe meshes.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    /// Create a new buffer allocator with the given device.
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Create a complete mesh buffer from raw vertex bytes and index data.
    pub fn create_mesh(
        &self,
        label: &str,
        vertices: &[u8],
        vertex_count: u32,
        indices: &IndexData,
    ) -> MeshBuffer {
        let vertex_buffer = self.create_buffer(
            &format!("{label}-vertices"),
            vertices,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        let index_buffer = self.create_buffer(
            &format!("{label}-indices"),
            indices.as_bytes(),
            wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        );

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            vertex_count,
            index_count: indices.count(),
            index_format: indices.format(),
        }
    }

    /// Interleave and upload a merged sphere mesh.
    pub fn upload_sphere(&self, label: &str, mesh: &SphereMesh) -> MeshBuffer {
        let vertices = interleave(mesh);
        let indices = index_data_for(mesh);
        log::debug!(
            "Uploading {label}: {} vertices, {} indices ({:?})",
            vertices.len(),
            indices.count(),
            indices.format()
        );
        self.create_mesh(
            label,
            bytemuck::cast_slice(&vertices),
            vertices.len() as u32,
            &indices,
        )
    }

    fn create_buffer(&self, label: &str, data: &[u8], usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: data,
                usage,
            })
    }
}

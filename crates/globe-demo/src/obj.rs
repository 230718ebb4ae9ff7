//! Wavefront OBJ export of a merged globe mesh.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use globe_cubesphere::SphereMesh;

/// Write `mesh` as OBJ text: `v`, `vn`, `vt` per vertex, then one `f` line per triangle.
///
/// OBJ indices are 1-based and the same index is used for all three attributes.
pub fn write_obj<W: Write>(mesh: &SphereMesh, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "# cube-sphere globe: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

/// Export `mesh` to an OBJ file, creating parent directories as needed.
pub fn export_obj(mesh: &SphereMesh, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    writer.flush()
}

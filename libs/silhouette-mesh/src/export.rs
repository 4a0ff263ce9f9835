//! # STL Export
//!
//! Binary STL output for extruded meshes. Facet normals are recomputed from
//! the triangle winding; smoothed vertex normals are not part of the format.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use log::debug;
use stl_io::{Normal, Triangle, Vertex};

use crate::error::Result;
use crate::mesh::Mesh;

fn to_f32(v: DVec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

/// Converts `mesh` into STL facets.
pub fn stl_triangles(mesh: &Mesh) -> Vec<Triangle> {
    (0..mesh.triangle_count())
        .map(|index| {
            let [a, b, c] = mesh.triangle_corners(index);
            Triangle {
                normal: Normal::new(to_f32(mesh.facet_normal(index))),
                vertices: [
                    Vertex::new(to_f32(a)),
                    Vertex::new(to_f32(b)),
                    Vertex::new(to_f32(c)),
                ],
            }
        })
        .collect()
}

/// Writes `mesh` as binary STL to `writer`.
pub fn write_stl<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    let triangles = stl_triangles(mesh);
    stl_io::write_stl(writer, triangles.iter())?;
    Ok(())
}

/// Writes `mesh` as binary STL to `path`, creating parent directories.
pub fn save_stl(mesh: &Mesh, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(mesh, &mut writer)?;
    writer.flush()?;

    debug!(
        "wrote {} triangles to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}

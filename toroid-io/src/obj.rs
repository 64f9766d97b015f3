//! OBJ format support
//!
//! Strips and faces are triangulated on export. Every triangle is written
//! counter-clockwise towards its vertex normals, so the files need no
//! per-group culling state.

use crate::MeshWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use toroid_core::{MeshBuffer, Result, TriangleMesh};

pub struct ObjWriter;

impl ObjWriter {
    /// Write a mesh buffer with one `g` group per primitive
    pub fn write_mesh_buffer<P: AsRef<Path>>(buffer: &MeshBuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_mesh_buffer_to(buffer, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_mesh_buffer_to<W: Write>(buffer: &MeshBuffer, writer: &mut W) -> Result<()> {
        writeln!(writer, "# toroid mesh buffer")?;
        writeln!(
            writer,
            "# {} primitives, {} vertices",
            buffer.primitive_count(),
            buffer.vertex_count()
        )?;

        for primitive in &buffer.primitives {
            for v in &primitive.vertices {
                writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
            }
        }
        for primitive in &buffer.primitives {
            for v in &primitive.vertices {
                writeln!(writer, "vt {} {}", v.tex_coord.x, v.tex_coord.y)?;
            }
        }
        for primitive in &buffer.primitives {
            for v in &primitive.vertices {
                writeln!(writer, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
            }
        }

        // OBJ indices are 1-based and global
        let mut offset = 1;
        for primitive in &buffer.primitives {
            writeln!(writer, "g {}", primitive.part.name())?;
            for [a, b, c] in primitive.triangles() {
                let (a, b, c) = (a + offset, b + offset, c + offset);
                writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
            }
            offset += primitive.vertex_count();
        }
        Ok(())
    }

    pub fn write_triangle_mesh_to<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> Result<()> {
        for v in &mesh.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        if let Some(tex_coords) = &mesh.tex_coords {
            for t in tex_coords {
                writeln!(writer, "vt {} {}", t.x, t.y)?;
            }
        }
        if let Some(normals) = &mesh.normals {
            for n in normals {
                writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
            }
        }

        let has_uv = mesh.tex_coords.is_some();
        let has_normals = mesh.normals.is_some();
        for face in &mesh.faces {
            let refs: Vec<String> = face
                .iter()
                .map(|&i| {
                    let i = i + 1;
                    match (has_uv, has_normals) {
                        (true, true) => format!("{i}/{i}/{i}"),
                        (true, false) => format!("{i}/{i}"),
                        (false, true) => format!("{i}//{i}"),
                        (false, false) => format!("{i}"),
                    }
                })
                .collect();
            writeln!(writer, "f {}", refs.join(" "))?;
        }
        Ok(())
    }
}

impl MeshWriter for ObjWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_triangle_mesh_to(mesh, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::{Point3f, TorusSpec};

    fn count(text: &str, prefix: &str) -> usize {
        text.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_mesh_buffer_export() {
        let spec = TorusSpec::from_degrees(50.0, 30.0, 10.0, 0.0, 270.0, 5, 4);
        let buffer = toroid_mesh::build(&spec).unwrap();

        let mut out = Vec::new();
        ObjWriter::write_mesh_buffer_to(&buffer, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let vertices = buffer.vertex_count();
        assert_eq!(count(&text, "v "), vertices);
        assert_eq!(count(&text, "vt "), vertices);
        assert_eq!(count(&text, "vn "), vertices);
        assert_eq!(count(&text, "g "), 4);
        assert_eq!(count(&text, "f "), buffer.to_triangle_mesh().face_count());
        assert!(text.contains("g inner_tube"));

        // every index is in range
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for index in line[2..].split(' ').map(|r| r.split('/').next().unwrap().parse::<usize>().unwrap()) {
                assert!(index >= 1 && index <= vertices);
            }
        }
    }

    #[test]
    fn test_triangle_mesh_without_attributes() {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 0.0, 0.0), Point3f::new(0.0, 1.0, 0.0)],
            vec![[0, 1, 2]],
        );
        let mut out = Vec::new();
        ObjWriter::write_triangle_mesh_to(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(count(&text, "v "), 3);
        assert_eq!(count(&text, "vn "), 0);
        assert!(text.lines().any(|l| l == "f 1 2 3"));
    }

    #[test]
    fn test_write_mesh_to_file() {
        let spec = TorusSpec::ring(10.0, 2.0).with_subdivisions(6, 4);
        let mesh = toroid_mesh::build(&spec).unwrap().to_triangle_mesh();
        let path = std::env::temp_dir().join("toroid_test_ring.obj");

        ObjWriter::write_mesh(&mesh, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&text, "f "), mesh.face_count());
        assert!(text.lines().any(|l| l.starts_with("f 1/1/1 ")));

        let _ = std::fs::remove_file(&path);
    }
}

//! Output adapters for toroid
//!
//! This crate writes torus tessellations for external consumers: Wavefront
//! OBJ files, delimited vertex dumps, and JSON spec files.

pub mod obj;
pub mod csv;
pub mod spec_file;

pub use csv::{CsvOptions, Delimiter, VertexCsvWriter};
pub use obj::ObjWriter;
pub use spec_file::{parse_spec, read_spec, write_spec};

use toroid_core::{MeshBuffer, Result, TriangleMesh};

/// Trait for writing meshes to files
pub trait MeshWriter {
    fn write_mesh<P: AsRef<std::path::Path>>(mesh: &TriangleMesh, path: P) -> Result<()>;
}

/// Auto-detect format and write a mesh buffer
pub fn write_mesh_buffer<P: AsRef<std::path::Path>>(buffer: &MeshBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match extension.as_deref() {
        Some("obj") => ObjWriter::write_mesh_buffer(buffer, path),
        Some("csv") => VertexCsvWriter::write_vertices(buffer, path, &CsvOptions::default()),
        Some("xyz") | Some("txt") => VertexCsvWriter::write_vertices(buffer, path, &CsvOptions::xyz()),
        _ => Err(toroid_core::Error::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use toroid_core::TorusSpec;

    #[test]
    fn test_dispatch_by_extension() {
        let buffer = toroid_mesh::build(&TorusSpec::ring(10.0, 2.0).with_subdivisions(4, 3)).unwrap();
        let dir = std::env::temp_dir();

        for (name, marker) in [
            ("toroid_dispatch.obj", "g outer_tube"),
            ("toroid_dispatch.csv", "x,y,z"),
            ("toroid_dispatch.XYZ", " "),
        ] {
            let path = dir.join(name);
            write_mesh_buffer(&buffer, &path).unwrap();
            let content = fs::read_to_string(&path).unwrap();
            assert!(content.contains(marker), "{name}");
            let _ = fs::remove_file(&path);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let buffer = MeshBuffer::new();
        let err = write_mesh_buffer(&buffer, std::env::temp_dir().join("toroid_dispatch.stl")).unwrap_err();
        assert!(matches!(err, toroid_core::Error::UnsupportedFormat(_)));

        let err = write_mesh_buffer(&buffer, "no_extension").unwrap_err();
        assert!(matches!(err, toroid_core::Error::UnsupportedFormat(_)));
    }
}

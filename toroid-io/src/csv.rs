//! Delimited vertex dumps
//!
//! Writes every emitted vertex of a [`MeshBuffer`] as one text row, in
//! emission order. With [`CsvOptions::positions_only`] the output is a bare
//! `x,y,z` list suitable for scatter-plotting the tessellation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use toroid_core::{MeshBuffer, MeshVertex, Part, Result};

/// Supported delimiters for vertex dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Space,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Get the character representation of the delimiter
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }
}

/// Which columns to write and how
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
    pub include_header: bool,
    /// Append `nx, ny, nz`
    pub include_normals: bool,
    /// Append `u, v`
    pub include_tex_coords: bool,
    /// Append the name of the primitive the vertex belongs to
    pub include_part: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            include_header: true,
            include_normals: true,
            include_tex_coords: true,
            include_part: true,
        }
    }
}

impl CsvOptions {
    /// Bare comma-separated positions, no header
    pub fn positions_only() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            include_header: false,
            include_normals: false,
            include_tex_coords: false,
            include_part: false,
        }
    }

    /// Space-separated positions and normals, no header
    pub fn xyz() -> Self {
        Self {
            delimiter: Delimiter::Space,
            include_header: false,
            include_normals: true,
            include_tex_coords: false,
            include_part: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn header(&self) -> Vec<&'static str> {
        let mut columns = vec!["x", "y", "z"];
        if self.include_normals {
            columns.extend(["nx", "ny", "nz"]);
        }
        if self.include_tex_coords {
            columns.extend(["u", "v"]);
        }
        if self.include_part {
            columns.push("part");
        }
        columns
    }

    fn format_vertex(&self, vertex: &MeshVertex, part: Part) -> String {
        let mut fields = vec![
            vertex.position.x.to_string(),
            vertex.position.y.to_string(),
            vertex.position.z.to_string(),
        ];
        if self.include_normals {
            fields.extend(vertex.normal.iter().map(|c| c.to_string()));
        }
        if self.include_tex_coords {
            fields.push(vertex.tex_coord.x.to_string());
            fields.push(vertex.tex_coord.y.to_string());
        }
        if self.include_part {
            fields.push(part.name().to_string());
        }
        let sep = self.delimiter.as_char().to_string();
        fields.join(sep.as_str())
    }
}

/// Vertex dump writer
pub struct VertexCsvWriter;

impl VertexCsvWriter {
    /// Write a buffer's vertices to a file
    pub fn write_vertices<P: AsRef<Path>>(buffer: &MeshBuffer, path: P, options: &CsvOptions) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(buffer, &mut writer, options)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a buffer's vertices to any writer
    pub fn write_to<W: Write>(buffer: &MeshBuffer, writer: &mut W, options: &CsvOptions) -> Result<()> {
        if options.include_header {
            let sep = options.delimiter.as_char().to_string();
            writeln!(writer, "{}", options.header().join(sep.as_str()))?;
        }

        for primitive in &buffer.primitives {
            for vertex in &primitive.vertices {
                writeln!(writer, "{}", options.format_vertex(vertex, primitive.part))?;
            }
        }
        Ok(())
    }
}

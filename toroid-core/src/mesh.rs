//! Mesh data structures and functionality
//!
//! A [`MeshBuffer`] is the output of a torus build: an ordered list of
//! [`Primitive`] groups, each a run-length encoded set of triangle strips or
//! polygon faces, the way retained-mode scene graphs consume them. A
//! [`TriangleMesh`] is the flattened, indexed form used for file export.

use crate::point::*;
use serde::{Deserialize, Serialize};

/// How the vertices of a run are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Each vertex after the second forms a triangle with the previous two
    TriangleStrip,
    /// A single convex polygon
    Face,
}

/// Which part of the torus a primitive belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    OuterTube,
    InnerTube,
    StartCap,
    EndCap,
}

impl Part {
    pub fn is_cap(self) -> bool {
        matches!(self, Part::StartCap | Part::EndCap)
    }

    pub fn is_tube(self) -> bool {
        !self.is_cap()
    }

    pub fn name(self) -> &'static str {
        match self {
            Part::OuterTube => "outer_tube",
            Part::InnerTube => "inner_tube",
            Part::StartCap => "start_cap",
            Part::EndCap => "end_cap",
        }
    }
}

/// Vertex ordering of a primitive's first triangle, as seen from the side its
/// normals point to. Consumers use it to set face culling per primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// `CounterClockwise` when `ccw` holds, `Clockwise` otherwise
    pub fn from_ccw(ccw: bool) -> Self {
        if ccw {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

/// One group of strips or faces sharing a kind, a part and a winding.
///
/// `vertices` is the concatenation of all runs; `vertex_counts` holds the
/// length of each run in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub part: Part,
    pub winding: Winding,
    pub vertex_counts: Vec<usize>,
    pub vertices: Vec<MeshVertex>,
}

impl Primitive {
    /// Create an empty primitive with room for `capacity` vertices
    pub fn with_capacity(kind: PrimitiveKind, part: Part, winding: Winding, capacity: usize) -> Self {
        Self {
            kind,
            part,
            winding,
            vertex_counts: Vec::new(),
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Append one run of vertices
    pub fn push_run<I: IntoIterator<Item = MeshVertex>>(&mut self, run: I) {
        let before = self.vertices.len();
        self.vertices.extend(run);
        self.vertex_counts.push(self.vertices.len() - before);
    }

    /// Total number of vertices over all runs
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of strips or faces
    pub fn run_count(&self) -> usize {
        self.vertex_counts.len()
    }

    /// Iterate over the vertex slice of each run
    pub fn runs(&self) -> impl Iterator<Item = &[MeshVertex]> + '_ {
        self.vertex_counts.iter().scan(0usize, move |start, &count| {
            let run = &self.vertices[*start..*start + count];
            *start += count;
            Some(run)
        })
    }

    /// Triangle indices into `vertices`, each counter-clockwise when viewed
    /// from the side the vertex normals point to.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let mut triangles = Vec::new();
        let mut start = 0;
        for &count in &self.vertex_counts {
            if count >= 3 {
                match self.kind {
                    PrimitiveKind::TriangleStrip => {
                        for k in 0..count - 2 {
                            let tri = if k % 2 == 0 { [k, k + 1, k + 2] } else { [k + 1, k, k + 2] };
                            triangles.push(self.orient([start + tri[0], start + tri[1], start + tri[2]]));
                        }
                    }
                    PrimitiveKind::Face => {
                        for k in 1..count - 1 {
                            triangles.push(self.orient([start, start + k, start + k + 1]));
                        }
                    }
                }
            }
            start += count;
        }
        triangles
    }

    fn orient(&self, tri: [usize; 3]) -> [usize; 3] {
        match self.winding {
            Winding::CounterClockwise => tri,
            Winding::Clockwise => [tri[1], tri[0], tri[2]],
        }
    }

    /// Raw vertex bytes, ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Ordered primitives produced by one torus build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffer {
    pub primitives: Vec<Primitive>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Total number of vertices over all primitives
    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(Primitive::vertex_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.iter().all(|p| p.vertices.is_empty())
    }

    pub fn tubes(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(|p| p.part.is_tube())
    }

    pub fn caps(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(|p| p.part.is_cap())
    }

    /// The primitive for a given part, if it was emitted
    pub fn part(&self, part: Part) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.part == part)
    }

    /// Flatten into an indexed triangle mesh with per-vertex normals and
    /// texture coordinates. Vertices are not welded across primitives.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        let mut normals = Vec::with_capacity(self.vertex_count());
        let mut tex_coords = Vec::with_capacity(self.vertex_count());

        for primitive in &self.primitives {
            let offset = mesh.vertices.len();
            for vertex in &primitive.vertices {
                mesh.vertices.push(vertex.position);
                normals.push(vertex.normal);
                tex_coords.push(vertex.tex_coord);
            }
            mesh.faces.extend(
                primitive
                    .triangles()
                    .into_iter()
                    .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
            );
        }

        mesh.set_normals(normals);
        mesh.set_tex_coords(tex_coords);
        mesh
    }
}

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    pub tex_coords: Option<Vec<Point2f>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
            tex_coords: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
            tex_coords: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Calculate face normals
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                let v1 = self.vertices[face[1]];
                let v2 = self.vertices[face[2]];

                let edge1 = v1 - v0;
                let edge2 = v2 - v0;

                edge1.cross(&edge2).normalize()
            })
            .collect()
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Set vertex texture coordinates
    pub fn set_tex_coords(&mut self, tex_coords: Vec<Point2f>) {
        if tex_coords.len() == self.vertices.len() {
            self.tex_coords = Some(tex_coords);
        }
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

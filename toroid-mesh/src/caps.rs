//! End caps closing a torus segment
//!
//! A solid tube is closed with one polygon per end; a bored tube with one
//! annular triangle strip per end. Both ends are always built together.

use crate::surface::{trace_vertex, Subdivisions, SurfaceEvaluator};
use toroid_core::{MeshVertex, Part, Primitive, PrimitiveKind, TorusSpec, Winding};

/// How the ends of a segment are closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapKind {
    /// Full ring, nothing to close
    None,
    /// Disk of `minor` vertices
    Solid,
    /// Annulus between the outer radius and the bore
    Hollow { inner_radius: f64 },
}

impl CapKind {
    /// Cap policy for a spec. A full sweep never needs caps.
    pub fn for_spec(spec: &TorusSpec) -> Self {
        if spec.is_full_sweep() {
            CapKind::None
        } else if spec.has_inner_tube() {
            CapKind::Hollow {
                inner_radius: spec.inner_radius,
            }
        } else {
            CapKind::Solid
        }
    }

    /// Vertices in a single cap of this kind
    pub fn cap_len(self, subdivisions: Subdivisions) -> usize {
        let minor = subdivisions.minor as usize;
        match self {
            CapKind::None => 0,
            CapKind::Solid => minor,
            CapKind::Hollow { .. } => 2 * minor + 2,
        }
    }
}

/// Which end of the segment a cap closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapEnd {
    Start,
    End,
}

impl CapEnd {
    pub fn part(self) -> Part {
        match self {
            CapEnd::Start => Part::StartCap,
            CapEnd::End => Part::EndCap,
        }
    }

    pub fn major_index(self, subdivisions: Subdivisions) -> u32 {
        match self {
            CapEnd::Start => 0,
            CapEnd::End => subdivisions.major,
        }
    }

    /// The start cap faces against the sweep direction, the end cap along it
    fn invert(self, eval: &SurfaceEvaluator) -> bool {
        match self {
            CapEnd::Start => eval.is_counter_clockwise(),
            CapEnd::End => !eval.is_counter_clockwise(),
        }
    }
}

/// Build both caps for `kind`; empty for [`CapKind::None`]
pub fn build_caps(
    eval: &SurfaceEvaluator,
    outer_radius: f64,
    kind: CapKind,
    subdivisions: Subdivisions,
) -> Vec<Primitive> {
    [CapEnd::Start, CapEnd::End]
        .into_iter()
        .filter_map(|end| build_cap(eval, outer_radius, kind, end, subdivisions))
        .collect()
}

/// Build the cap closing one end of the segment
pub fn build_cap(
    eval: &SurfaceEvaluator,
    outer_radius: f64,
    kind: CapKind,
    end: CapEnd,
    subdivisions: Subdivisions,
) -> Option<Primitive> {
    let cap = match kind {
        CapKind::None => return None,
        CapKind::Solid => solid_cap(eval, outer_radius, end, subdivisions),
        CapKind::Hollow { inner_radius } => hollow_cap(eval, outer_radius, inner_radius, end, subdivisions),
    };

    for (i, vertex) in cap.vertices.iter().enumerate() {
        trace_vertex(cap.part, 0, i, vertex);
    }
    Some(cap)
}

// Polygon vertices run with increasing minor angle. Seen from the side the
// sweep tangent points to, that order is clockwise, so the polygon reads
// counter-clockwise exactly when the cap normal is the reversed tangent.
fn solid_cap(eval: &SurfaceEvaluator, radius: f64, end: CapEnd, subdivisions: Subdivisions) -> Primitive {
    let major = end.major_index(subdivisions);
    let normal = eval.cap_normal(major, subdivisions.major, end.invert(eval));
    let winding = Winding::from_ccw(end.invert(eval));

    let mut cap = Primitive::with_capacity(
        PrimitiveKind::Face,
        end.part(),
        winding,
        CapKind::Solid.cap_len(subdivisions),
    );
    cap.push_run((0..subdivisions.minor).map(|minor| eval.cap_vertex(radius, minor, major, subdivisions, &normal)));
    cap
}

// The strip alternates outer and inner ring, then repeats the first pair to
// close the annulus. Its first triangle reads counter-clockwise seen from the
// side the sweep tangent points to, the opposite of the solid polygon.
fn hollow_cap(
    eval: &SurfaceEvaluator,
    outer_radius: f64,
    inner_radius: f64,
    end: CapEnd,
    subdivisions: Subdivisions,
) -> Primitive {
    let major = end.major_index(subdivisions);
    let normal = eval.cap_normal(major, subdivisions.major, end.invert(eval));
    let winding = Winding::from_ccw(!end.invert(eval));

    let pair = |minor: u32| -> [MeshVertex; 2] {
        [
            eval.cap_vertex(outer_radius, minor, major, subdivisions, &normal),
            eval.cap_vertex(inner_radius, minor, major, subdivisions, &normal),
        ]
    };

    let mut cap = Primitive::with_capacity(
        PrimitiveKind::TriangleStrip,
        end.part(),
        winding,
        CapKind::Hollow { inner_radius }.cap_len(subdivisions),
    );
    cap.push_run((0..subdivisions.minor).chain(std::iter::once(0)).flat_map(pair));
    cap
}

//! Tube walls as closed loops of triangle strips
//!
//! One strip per minor subdivision. Strip `s` zig-zags between cross-section
//! rings `s + 1` and `s` over major indices `0..=major`, so every strip holds
//! `2 * (major + 1)` vertices. On a full sweep the last column lands on the
//! first one and the loop closes; on a segment it ends exactly at the sweep end.

use crate::surface::{trace_vertex, Subdivisions, SurfaceEvaluator};
use toroid_core::{Part, Primitive, PrimitiveKind, Winding};

/// Which wall of the tube is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeWall {
    /// Faces away from the tube centerline
    Outer,
    /// Bore wall, faces towards the tube centerline
    Inner,
}

impl TubeWall {
    pub fn part(self) -> Part {
        match self {
            TubeWall::Outer => Part::OuterTube,
            TubeWall::Inner => Part::InnerTube,
        }
    }

    fn inverts_normals(self) -> bool {
        self == TubeWall::Inner
    }

    /// Strips read counter-clockwise from outside the tube when the sweep
    /// runs counter-clockwise; the bore wall is seen from the other side.
    pub fn winding(self, eval: &SurfaceEvaluator) -> Winding {
        Winding::from_ccw(eval.is_counter_clockwise() != self.inverts_normals())
    }
}

/// Number of vertices in one tube strip
pub fn strip_len(subdivisions: Subdivisions) -> usize {
    2 * (subdivisions.major as usize + 1)
}

/// Build the strips of one tube wall at cross-section radius `radius`
pub fn build_tube(
    eval: &SurfaceEvaluator,
    radius: f64,
    subdivisions: Subdivisions,
    wall: TubeWall,
) -> Primitive {
    let per_strip = strip_len(subdivisions);
    let invert = wall.inverts_normals();
    let mut tube = Primitive::with_capacity(
        PrimitiveKind::TriangleStrip,
        wall.part(),
        wall.winding(eval),
        per_strip * subdivisions.minor as usize,
    );

    for strip in 0..subdivisions.minor {
        let run = (0..=subdivisions.major).flat_map(|major| {
            [strip + 1, strip]
                .into_iter()
                .map(move |minor| eval.tube_vertex(radius, minor, major, subdivisions, invert))
        });
        tube.push_run(run);

        let start = tube.vertex_count() - per_strip;
        for (i, vertex) in tube.vertices[start..].iter().enumerate() {
            trace_vertex(wall.part(), strip as usize, i, vertex);
        }
    }

    tube
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;
    use toroid_core::TorusSpec;

    fn setup(sweep: f64, major: u32, minor: u32) -> (SurfaceEvaluator, Subdivisions) {
        let spec = TorusSpec::new(50.0, 30.0, 10.0, 0.0, sweep, major, minor);
        (SurfaceEvaluator::new(&spec), Subdivisions::from(&spec))
    }

    #[test]
    fn test_strip_counts() {
        let (eval, subdivisions) = setup(TAU, 50, 20);
        let tube = build_tube(&eval, 30.0, subdivisions, TubeWall::Outer);
        assert_eq!(tube.run_count(), 20);
        assert!(tube.vertex_counts.iter().all(|&c| c == 102));
        assert_eq!(tube.vertex_count(), 2040);
        assert_eq!(tube.kind, PrimitiveKind::TriangleStrip);
        assert_eq!(tube.part, Part::OuterTube);
    }

    #[test]
    fn test_strip_zig_zags_between_rings() {
        let (eval, subdivisions) = setup(TAU, 4, 4);
        let tube = build_tube(&eval, 30.0, subdivisions, TubeWall::Outer);
        let strip = tube.runs().next().unwrap();

        // ring 1 (top of the cross-section) first, then ring 0 (outer equator)
        assert_relative_eq!(strip[0].position.z, 30.0, epsilon = 1e-4);
        assert_relative_eq!(strip[1].position.x, 80.0, epsilon = 1e-4);
        assert_relative_eq!(strip[1].position.z, 0.0, epsilon = 1e-4);
        assert_relative_eq!(strip[0].tex_coord.x, 0.25);
        assert_relative_eq!(strip[1].tex_coord.x, 0.0);
        assert_relative_eq!(strip[2].tex_coord.y, 0.75);
    }

    #[test]
    fn test_last_strip_wraps_to_first_ring() {
        let (eval, subdivisions) = setup(TAU, 6, 5);
        let tube = build_tube(&eval, 30.0, subdivisions, TubeWall::Outer);
        let first = tube.runs().next().unwrap();
        let last = tube.runs().last().unwrap();
        // ring `minor` coincides with ring 0
        assert_relative_eq!(last[0].position, first[1].position, epsilon = 1e-4);
        assert_relative_eq!(last[0].tex_coord.x, 1.0);
    }

    #[test]
    fn test_inner_wall_inverts_and_flips_winding() {
        let (eval, subdivisions) = setup(TAU, 8, 6);
        let outer = build_tube(&eval, 10.0, subdivisions, TubeWall::Outer);
        let inner = build_tube(&eval, 10.0, subdivisions, TubeWall::Inner);
        assert_eq!(outer.winding, Winding::CounterClockwise);
        assert_eq!(inner.winding, Winding::Clockwise);
        assert_eq!(inner.part, Part::InnerTube);

        for (o, i) in outer.vertices.iter().zip(&inner.vertices) {
            assert_eq!(o.position, i.position);
            assert_eq!(o.normal, -i.normal);
        }
    }

    #[test]
    fn test_negative_sweep_flips_winding() {
        let (eval, _) = setup(-TAU / 2.0, 8, 6);
        assert_eq!(TubeWall::Outer.winding(&eval), Winding::Clockwise);
        assert_eq!(TubeWall::Inner.winding(&eval), Winding::CounterClockwise);
    }
}

//! Surface evaluation
//!
//! Maps (cross-section radius, minor index, major index) to positions,
//! normals and texture coordinates on the torus surface. The major index
//! walks along the sweep, the minor index around the tube cross-section.
//! Indices may equal their count, which lands on the closing ring.

use log::{log_enabled, trace, Level};
use nalgebra::{Point3, Vector3};
use std::f64::consts::TAU;
use toroid_core::{MeshVertex, Part, TorusSpec};

/// Tessellation resolution of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivisions {
    /// Segments along the sweep
    pub major: u32,
    /// Segments around the cross-section
    pub minor: u32,
}

impl From<&TorusSpec> for Subdivisions {
    fn from(spec: &TorusSpec) -> Self {
        Self {
            major: spec.major_subdivisions,
            minor: spec.minor_subdivisions,
        }
    }
}

/// Evaluates the torus surface for one spec
#[derive(Debug, Clone, Copy)]
pub struct SurfaceEvaluator {
    major_radius: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl SurfaceEvaluator {
    pub fn new(spec: &TorusSpec) -> Self {
        Self {
            major_radius: spec.major_radius,
            start_angle: spec.start_angle,
            sweep_angle: spec.sweep_angle,
        }
    }

    /// Whether the sweep runs counter-clockwise about +z
    pub fn is_counter_clockwise(&self) -> bool {
        self.sweep_angle > 0.0
    }

    /// Angle along the sweep for a major index
    pub fn sweep_angle_at(&self, major_index: u32, major_count: u32) -> f64 {
        debug_assert!(major_count > 0);
        self.start_angle + self.sweep_angle * f64::from(major_index) / f64::from(major_count)
    }

    /// Position of a surface vertex at cross-section radius `cross_radius`
    pub fn position(
        &self,
        cross_radius: f64,
        minor_index: u32,
        minor_count: u32,
        major_index: u32,
        major_count: u32,
    ) -> Point3<f64> {
        debug_assert!(minor_count > 0);
        let angle = self.sweep_angle_at(major_index, major_count);
        let minor_angle = TAU * f64::from(minor_index) / f64::from(minor_count);

        // distance from the revolution axis
        let offset = self.major_radius + cross_radius * minor_angle.cos();

        Point3::new(
            offset * angle.cos(),
            offset * angle.sin(),
            cross_radius * minor_angle.sin(),
        )
    }

    /// Texture coordinate: u runs around the cross-section, v down the sweep
    pub fn tex_coord(minor_index: u32, minor_count: u32, major_index: u32, major_count: u32) -> (f64, f64) {
        debug_assert!(minor_count > 0 && major_count > 0);
        (
            f64::from(minor_index) / f64::from(minor_count),
            1.0 - f64::from(major_index) / f64::from(major_count),
        )
    }

    /// Unit normal of a tube wall vertex.
    ///
    /// The vertex is projected onto the centerline circle at its own sweep
    /// angle; the normal points away from that projection, or towards it when
    /// `invert` is set (inner wall facing into the bore).
    pub fn tube_normal(&self, vertex: &Point3<f64>, major_index: u32, major_count: u32, invert: bool) -> Vector3<f64> {
        let angle = self.sweep_angle_at(major_index, major_count);
        let center = Point3::new(
            self.major_radius * angle.cos(),
            self.major_radius * angle.sin(),
            0.0,
        );
        let normal = (vertex - center).normalize();
        if invert {
            -normal
        } else {
            normal
        }
    }

    /// Unit normal of an end cap at a major index.
    ///
    /// This is the tangent of the sweep circle at the cap's angle, pointing in
    /// the direction of increasing angle, negated when `invert` is set.
    pub fn cap_normal(&self, major_index: u32, major_count: u32, invert: bool) -> Vector3<f64> {
        let angle = self.sweep_angle_at(major_index, major_count);
        let tangent = Vector3::new(-angle.sin(), angle.cos(), 0.0);
        if invert {
            -tangent
        } else {
            tangent
        }
    }

    /// Tube wall vertex with its position, normal and texture coordinate
    pub fn tube_vertex(
        &self,
        cross_radius: f64,
        minor_index: u32,
        major_index: u32,
        subdivisions: Subdivisions,
        invert: bool,
    ) -> MeshVertex {
        let position = self.position(cross_radius, minor_index, subdivisions.minor, major_index, subdivisions.major);
        let normal = self.tube_normal(&position, major_index, subdivisions.major, invert);
        let uv = Self::tex_coord(minor_index, subdivisions.minor, major_index, subdivisions.major);
        MeshVertex::from_f64(&position, &normal, uv)
    }

    /// Cap vertex sharing a precomputed cap normal
    pub fn cap_vertex(
        &self,
        cross_radius: f64,
        minor_index: u32,
        major_index: u32,
        subdivisions: Subdivisions,
        normal: &Vector3<f64>,
    ) -> MeshVertex {
        let position = self.position(cross_radius, minor_index, subdivisions.minor, major_index, subdivisions.major);
        let uv = Self::tex_coord(minor_index, subdivisions.minor, major_index, subdivisions.major);
        MeshVertex::from_f64(&position, normal, uv)
    }
}

/// Trace one emitted vertex. Replaces the ad-hoc vertex dumps of earlier
/// viewers; enable with `RUST_LOG=toroid_mesh=trace`.
pub(crate) fn trace_vertex(part: Part, run: usize, index: usize, vertex: &MeshVertex) {
    if log_enabled!(Level::Trace) {
        trace!(
            "{} run {} vertex {}: position {{{:.3},{:.3},{:.3}}} normal {{{:.3},{:.3},{:.3}}} uv {{{:.3},{:.3}}}",
            part.name(),
            run,
            index,
            vertex.position.x,
            vertex.position.y,
            vertex.position.z,
            vertex.normal.x,
            vertex.normal.y,
            vertex.normal.z,
            vertex.tex_coord.x,
            vertex.tex_coord.y,
        );
    }
}

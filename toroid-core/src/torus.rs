//! Torus parameters
//!
//! A [`TorusSpec`] describes a full torus or a torus segment. It follows the
//! usual detector-geometry conventions: the torus revolves around the z-axis,
//! angles are measured from +x towards +y, and the cross-section may be bored
//! out to make a hollow tube.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sentinel bore value: no inner tube.
pub const NO_BORE: f64 = -1.0;

/// Default number of segments along the sweep
pub const DEFAULT_MAJOR_SUBDIVISIONS: u32 = 70;

/// Default number of segments around the cross-section
pub const DEFAULT_MINOR_SUBDIVISIONS: u32 = 40;

/// Tolerance used when comparing angles against a full turn
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Parameters of a torus or torus segment.
///
/// Angles are in radians. `inner_radius` is [`NO_BORE`] for a plain tube,
/// `0.0` for a solid tube whose segment ends are closed with disks, and a value
/// in `(0, outer_radius)` for a hollow tube whose segment ends are annuli.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusSpec {
    /// Distance from the revolution axis to the tube centerline
    pub major_radius: f64,
    /// Outer radius of the tube cross-section
    pub outer_radius: f64,
    /// Bore radius, or [`NO_BORE`]
    pub inner_radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub major_subdivisions: u32,
    pub minor_subdivisions: u32,
}

impl TorusSpec {
    /// Create a spec from radians
    pub fn new(
        major_radius: f64,
        outer_radius: f64,
        inner_radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        major_subdivisions: u32,
        minor_subdivisions: u32,
    ) -> Self {
        Self {
            major_radius,
            outer_radius,
            inner_radius,
            start_angle,
            sweep_angle,
            major_subdivisions,
            minor_subdivisions,
        }
    }

    /// Create a spec with the start and sweep angles given in degrees
    pub fn from_degrees(
        major_radius: f64,
        outer_radius: f64,
        inner_radius: f64,
        start_degrees: f64,
        sweep_degrees: f64,
        major_subdivisions: u32,
        minor_subdivisions: u32,
    ) -> Self {
        Self::new(
            major_radius,
            outer_radius,
            inner_radius,
            start_degrees.to_radians(),
            sweep_degrees.to_radians(),
            major_subdivisions,
            minor_subdivisions,
        )
    }

    /// A closed ring with no bore and the default resolution
    pub fn ring(major_radius: f64, outer_radius: f64) -> Self {
        Self::new(
            major_radius,
            outer_radius,
            NO_BORE,
            0.0,
            TAU,
            DEFAULT_MAJOR_SUBDIVISIONS,
            DEFAULT_MINOR_SUBDIVISIONS,
        )
    }

    pub fn with_bore(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    pub fn with_sweep(mut self, start_angle: f64, sweep_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.sweep_angle = sweep_angle;
        self
    }

    pub fn with_subdivisions(mut self, major: u32, minor: u32) -> Self {
        self.major_subdivisions = major;
        self.minor_subdivisions = minor;
        self
    }

    /// Whether the sweep covers a full turn, in which case no caps are needed
    pub fn is_full_sweep(&self) -> bool {
        self.sweep_angle.abs() >= TAU - ANGLE_TOLERANCE
    }

    /// Whether a second, inward-facing tube is part of the shape
    pub fn has_inner_tube(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Check every field against its constraint.
    ///
    /// The first violation found is reported; nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("major_radius", self.major_radius),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("start_angle", self.start_angle),
            ("sweep_angle", self.sweep_angle),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(Error::invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.major_radius < 0.0 {
            return Err(Error::invalid(
                "major_radius",
                format!("must be >= 0, got {}", self.major_radius),
            ));
        }
        if self.outer_radius <= 0.0 {
            return Err(Error::invalid(
                "outer_radius",
                format!("must be > 0, got {}", self.outer_radius),
            ));
        }
        if self.inner_radius != NO_BORE
            && !(0.0..self.outer_radius).contains(&self.inner_radius)
        {
            return Err(Error::invalid(
                "inner_radius",
                format!(
                    "must be -1 or in [0, {}), got {}",
                    self.outer_radius, self.inner_radius
                ),
            ));
        }
        if self.sweep_angle == 0.0 {
            return Err(Error::invalid("sweep_angle", "must be non-zero"));
        }
        if self.sweep_angle.abs() > TAU + ANGLE_TOLERANCE {
            return Err(Error::invalid(
                "sweep_angle",
                format!("must not exceed one full turn, got {}", self.sweep_angle),
            ));
        }
        if self.major_subdivisions < 1 {
            return Err(Error::invalid("major_subdivisions", "must be at least 1, got 0"));
        }
        if self.minor_subdivisions < 3 {
            return Err(Error::invalid(
                "minor_subdivisions",
                format!("must be at least 3, got {}", self.minor_subdivisions),
            ));
        }
        Ok(())
    }
}

impl Default for TorusSpec {
    fn default() -> Self {
        Self::new(50.0, 30.0, 10.0, 0.0, TAU, 50, 20)
    }
}

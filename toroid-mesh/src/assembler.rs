//! Mesh assembly
//!
//! [`build`] is a pure transform from a [`TorusSpec`] to a [`MeshBuffer`].
//! Primitives are emitted in a fixed order: outer tube, inner tube (when the
//! spec has a bore), start cap, end cap (when the sweep is partial).

use crate::caps::{build_caps, CapKind};
use crate::surface::{Subdivisions, SurfaceEvaluator};
use crate::tube::{build_tube, TubeWall};
use log::debug;
use rayon::prelude::*;
use toroid_core::{MeshBuffer, Result, TorusSpec};

/// Tessellate a torus or torus segment.
///
/// The spec is validated first; an invalid spec fails before anything is
/// allocated. The same spec always yields the same buffer.
pub fn build(spec: &TorusSpec) -> Result<MeshBuffer> {
    spec.validate()?;

    let eval = SurfaceEvaluator::new(spec);
    let subdivisions = Subdivisions::from(spec);
    let caps = CapKind::for_spec(spec);

    let mut buffer = MeshBuffer {
        primitives: Vec::with_capacity(4),
    };

    buffer.push(build_tube(&eval, spec.outer_radius, subdivisions, TubeWall::Outer));
    if spec.has_inner_tube() {
        buffer.push(build_tube(&eval, spec.inner_radius, subdivisions, TubeWall::Inner));
    }
    buffer
        .primitives
        .extend(build_caps(&eval, spec.outer_radius, caps, subdivisions));

    debug!(
        "built torus (major {}, outer {}, inner {}, sweep {:.4} rad): {} primitives, {} vertices, caps {:?}",
        spec.major_radius,
        spec.outer_radius,
        spec.inner_radius,
        spec.sweep_angle,
        buffer.primitive_count(),
        buffer.vertex_count(),
        caps,
    );

    Ok(buffer)
}

/// Build several tori in parallel. Results keep the order of `specs`.
pub fn build_all(specs: &[TorusSpec]) -> Vec<Result<MeshBuffer>> {
    specs.par_iter().map(build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;
    use toroid_core::{Error, Part, NO_BORE};

    #[test]
    fn test_primitive_order() {
        let spec = TorusSpec::new(50.0, 30.0, 10.0, 0.0, TAU / 2.0, 6, 4);
        let buffer = build(&spec).unwrap();
        let parts: Vec<_> = buffer.primitives.iter().map(|p| p.part).collect();
        assert_eq!(parts, vec![Part::OuterTube, Part::InnerTube, Part::StartCap, Part::EndCap]);
    }

    #[test]
    fn test_plain_ring_has_single_tube() {
        let spec = TorusSpec::new(50.0, 30.0, NO_BORE, 0.0, TAU, 50, 20);
        let buffer = build(&spec).unwrap();
        assert_eq!(buffer.primitive_count(), 1);
        assert_eq!(buffer.vertex_count(), 2040);
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let spec = TorusSpec::ring(50.0, 30.0).with_subdivisions(10, 2);
        match build(&spec) {
            Err(Error::InvalidParameter { field, .. }) => assert_eq!(field, "minor_subdivisions"),
            other => panic!("expected a parameter error, got {other:?}"),
        }
    }

    #[test]
    fn test_build_all_keeps_order_and_errors() {
        let specs = [
            TorusSpec::ring(50.0, 30.0).with_subdivisions(4, 3),
            TorusSpec::ring(50.0, 30.0).with_sweep(0.0, 0.0),
            TorusSpec::default(),
        ];
        let results = build_all(&specs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().vertex_count(), 2 * 5 * 3);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().primitive_count(), 2);
    }
}

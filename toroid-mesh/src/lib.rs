//! Torus tessellation for toroid
//!
//! This crate turns a [`TorusSpec`](toroid_core::TorusSpec) into a
//! [`MeshBuffer`](toroid_core::MeshBuffer): closed loops of triangle strips
//! for the tube walls, plus disk or annulus caps when the torus is a segment.
//!
//! ```rust
//! use toroid_core::TorusSpec;
//!
//! let spec = TorusSpec::from_degrees(50.0, 30.0, 10.0, 0.0, 270.0, 5, 4);
//! let buffer = toroid_mesh::build(&spec).unwrap();
//! assert_eq!(buffer.primitive_count(), 4);
//! ```

pub mod surface;
pub mod tube;
pub mod caps;
pub mod assembler;
pub mod cache;

pub use surface::{Subdivisions, SurfaceEvaluator};
pub use tube::{build_tube, TubeWall};
pub use caps::{build_cap, build_caps, CapEnd, CapKind};
pub use assembler::{build, build_all};
pub use cache::TorusCache;

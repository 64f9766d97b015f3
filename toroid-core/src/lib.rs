//! Core data structures for toroid
//!
//! This crate provides the fundamental types shared by the torus builder and
//! its consumers: the [`TorusSpec`] input, the [`MeshBuffer`] output with its
//! strip/face primitives, the flattened [`TriangleMesh`], and the error type.

pub mod point;
pub mod torus;
pub mod mesh;
pub mod traits;
pub mod error;

pub use point::*;
pub use torus::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3};

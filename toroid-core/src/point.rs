//! Point and vertex types

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use bytemuck::{Pod, Zeroable};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A texture coordinate
pub type Point2f = Point2<f32>;

/// A renderable vertex: position, unit normal and texture coordinate.
///
/// The layout is `#[repr(C)]` with no padding (32 bytes), so a slice of
/// vertices can be uploaded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct MeshVertex {
    pub position: Point3f,
    pub normal: Vector3f,
    pub tex_coord: Point2f,
}

unsafe impl Pod for MeshVertex {}
unsafe impl Zeroable for MeshVertex {}

impl MeshVertex {
    /// Narrow double precision geometry to a vertex
    pub fn from_f64(position: &Point3d, normal: &Vector3d, tex_coord: (f64, f64)) -> Self {
        Self {
            position: position.cast::<f32>(),
            normal: normal.cast::<f32>(),
            tex_coord: Point2f::new(tex_coord.0 as f32, tex_coord.1 as f32),
        }
    }
}

impl Default for MeshVertex {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            normal: Vector3f::new(0.0, 0.0, 1.0),
            tex_coord: Point2f::origin(),
        }
    }
}

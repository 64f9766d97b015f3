//! # toroid
//!
//! Parametric torus and torus-segment tessellation for retained-mode renderers.
//!
//! This is the umbrella crate that provides convenient access to all toroid
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Torus parameters, mesh buffers, primitives, errors
//! - **Mesh**: The tessellator (tube strips, end caps, assembly, caching)
//! - **I/O**: OBJ export, vertex dumps, JSON spec files
//!
//! ## Quick Start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // A three-quarter hollow torus segment
//! let spec = TorusSpec::from_degrees(50.0, 30.0, 10.0, 0.0, 270.0, 70, 40);
//! let buffer = build(&spec).unwrap();
//!
//! for primitive in &buffer.primitives {
//!     println!("{:?}: {} vertices, {:?}", primitive.part, primitive.vertex_count(), primitive.winding);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, mesh and io
//! - `mesh`: Tessellation
//! - `io`: File output
//! - `all`: Enables all features

// Re-export core functionality
pub use toroid_core::*;

// Re-export sub-crates
#[cfg(feature = "mesh")]
pub use toroid_mesh as mesh;

#[cfg(feature = "io")]
pub use toroid_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use toroid_core::*;

    #[cfg(feature = "mesh")]
    pub use toroid_mesh::{build, build_all, CapKind, TorusCache};

    #[cfg(feature = "io")]
    pub use toroid_io::{write_mesh_buffer, CsvOptions, MeshWriter, ObjWriter};
}

//! Core data structures for terramesh
//!
//! This crate provides the fundamental types shared by the terrain meshing
//! pipeline: points and renderable vertices, point cloud containers,
//! triangle meshes, bounds, and the common error type.

pub mod bounds;
pub mod error;
pub mod mesh;
pub mod point;
pub mod point_cloud;

pub use bounds::*;
pub use error::*;
pub use mesh::*;
pub use point::*;
pub use point_cloud::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

/// Common result type for terramesh operations
pub type Result<T> = std::result::Result<T, Error>;

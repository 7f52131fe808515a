//! # Terramesh Pipeline
//!
//! Terrain mesh construction from unordered elevation point clouds.
//!
//! The pipeline runs three stages in fixed order: normalize the cloud into
//! a canonical [-1, 1] volume, triangulate it with a sequential strip
//! strategy plus an edge-length filter, then estimate smooth per-vertex
//! normals from the surviving topology. [`build_terrain_mesh`] composes the
//! stages and returns a [`MeshReport`] describing how far the run got.

pub mod diagnostics;
pub mod normalize;
pub mod normals;
pub mod parallel;
pub mod pipeline;
pub mod triangulate;

// Re-export commonly used items
pub use diagnostics::*;
pub use normalize::*;
pub use normals::*;
pub use pipeline::*;
pub use triangulate::*;

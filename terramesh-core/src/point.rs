//! Point types and the renderable vertex

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A renderable vertex: a normalized position plus an estimated normal.
///
/// The normal starts as the zero vector and is written exactly once, in
/// bulk, by the normal estimation stage. After estimation it is unit
/// length, or zero for vertices no surviving triangle references.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vertex {
    pub position: Point3f,
    pub normal: Vector3f,
}

unsafe impl Pod for Vertex {}
unsafe impl Zeroable for Vertex {}

impl Vertex {
    /// Create a vertex at `position` with a zero normal.
    pub fn at(position: Point3f) -> Self {
        Self {
            position,
            normal: Vector3f::zeros(),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            normal: Vector3f::zeros(),
        }
    }
}

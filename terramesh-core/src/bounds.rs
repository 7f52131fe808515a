//! Axis-aligned bounds

use crate::point::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box over a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Compute the bounds over a non-empty point slice; `None` when empty.
    pub fn from_points(points: &[Point3f]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;

        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some(Self { min, max })
    }

    /// Center point of the box
    pub fn center(&self) -> Point3f {
        Point3f::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Per-axis extents
    pub fn extents(&self) -> Vector3f {
        self.max - self.min
    }

    /// Half of the largest axis extent, shared across axes.
    pub fn half_max_extent(&self) -> f32 {
        let e = self.extents();
        e.x.max(e.y).max(e.z) / 2.0
    }
}

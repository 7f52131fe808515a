//! Point cloud normalization into the canonical [-1, 1] volume

use terramesh_core::{Aabb, Point3f, PointCloud};

/// Rescale and recenter a cloud so every coordinate lies in [-1, 1].
///
/// A single scale factor, half the largest axis extent, is shared across
/// all three axes so the cloud keeps its aspect ratio instead of being
/// stretched into a cube. At least one coordinate lands exactly on ±1
/// unless the cloud is degenerate: for coincident points the scale falls
/// back to 1 and every output point is the origin.
///
/// Order is preserved; the input is not mutated. Returns `None` for an
/// empty cloud, which callers surface as a degenerate-input outcome.
pub fn normalize_points(cloud: &PointCloud<Point3f>) -> Option<PointCloud<Point3f>> {
    let bounds = Aabb::from_points(&cloud.points)?;

    let center = bounds.center();
    let mut scale = bounds.half_max_extent();
    if scale == 0.0 {
        scale = 1.0;
    }

    let points = cloud
        .iter()
        .map(|p| Point3f::new((p.x - center.x) / scale, (p.y - center.y) / scale, (p.z - center.z) / scale))
        .collect();

    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_cloud_is_degenerate() {
        let cloud = PointCloud::new();
        assert!(normalize_points(&cloud).is_none());
    }

    #[test]
    fn test_output_lies_in_unit_volume_and_touches_bounds() {
        let cloud = PointCloud::from_points(vec![
            Point3f::new(10.0, 100.0, -5.0),
            Point3f::new(30.0, 120.0, 5.0),
            Point3f::new(20.0, 90.0, 0.0),
        ]);
        let normalized = normalize_points(&cloud).unwrap();

        let mut touches_bound = false;
        for p in &normalized {
            for c in [p.x, p.y, p.z] {
                assert!((-1.0..=1.0).contains(&c));
                if c == 1.0 || c == -1.0 {
                    touches_bound = true;
                }
            }
        }
        assert!(touches_bound);
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        // x spans 40, z spans 20; after the shared scale z spans half of x.
        let cloud = PointCloud::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(40.0, 0.0, 20.0),
        ]);
        let normalized = normalize_points(&cloud).unwrap();

        let dx = normalized[1].x - normalized[0].x;
        let dz = normalized[1].z - normalized[0].z;
        assert_relative_eq!(dx, 2.0);
        assert_relative_eq!(dz, 1.0);
    }

    #[test]
    fn test_coincident_cloud_collapses_to_origin() {
        let cloud = PointCloud::from_points(vec![Point3f::new(7.0, 7.0, 7.0); 4]);
        let normalized = normalize_points(&cloud).unwrap();

        for p in &normalized {
            assert_eq!(*p, Point3f::origin());
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let cloud = PointCloud::from_points(vec![
            Point3f::new(5.0, 0.0, 0.0),
            Point3f::new(-5.0, 0.0, 0.0),
            Point3f::new(0.0, 0.0, 0.0),
        ]);
        let normalized = normalize_points(&cloud).unwrap();

        assert_relative_eq!(normalized[0].x, 1.0);
        assert_relative_eq!(normalized[1].x, -1.0);
        assert_relative_eq!(normalized[2].x, 0.0);
    }
}

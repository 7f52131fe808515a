//! Strip triangulation with edge-length filtering
//!
//! The default strategy is a simplified, order-dependent strip walker, not
//! a true Delaunay triangulation. A circumcircle containment test is kept
//! as a building block for alternative strategies but the default path
//! never invokes it.

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::parallel;
use nalgebra::Matrix4;
use terramesh_core::{Point3f, PointCloud, TerrainMesh, Vertex};

/// Configuration for the triangulation stage
#[derive(Debug, Clone)]
pub struct TriangulatorConfig {
    /// Maximum edge length (exclusive) a kept triangle may have, measured
    /// in normalized [-1, 1] space.
    pub max_edge_length: f32,
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            max_edge_length: 0.15,
        }
    }
}

impl TriangulatorConfig {
    /// Set the maximum edge length
    pub fn with_max_edge_length(mut self, max_edge_length: f32) -> Self {
        self.max_edge_length = max_edge_length;
        self
    }
}

/// Produces candidate triangles over a point sequence as index triples
/// into the original (unsorted) order.
pub trait TriangulationStrategy {
    fn candidate_triangles(&self, points: &[Point3f]) -> Vec<[u32; 3]>;
}

/// The default strategy: a sequential triple strip.
///
/// A sorted copy of the points, ordered by (x ascending, then z ascending),
/// drives the candidate walk, but the emitted triples are `(i, i+1, i+2)`
/// over the original vertex order, so the sort only fixes how many triples
/// come out, never which vertices they name. The decoupling is part of the
/// observable topology contract and must not be "corrected" here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialStrip;

impl TriangulationStrategy for SequentialStrip {
    fn candidate_triangles(&self, points: &[Point3f]) -> Vec<[u32; 3]> {
        if points.len() < 3 {
            return Vec::new();
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.z.total_cmp(&b.z)));

        let mut candidates = Vec::with_capacity(sorted.len() - 2);
        for i in 0..sorted.len() - 2 {
            let i = i as u32;
            candidates.push([i, i + 1, i + 2]);
        }
        candidates
    }
}

/// Check whether `p` lies inside the circumcircle of triangle `(a, b, c)`.
///
/// Determinant formulation over the XY offsets; available as a building
/// block for strategies that want local Delaunay repair.
pub fn point_in_circumcircle(p: &Point3f, a: &Point3f, b: &Point3f, c: &Point3f) -> bool {
    let (ax, ay, az) = (a.x - p.x, a.y - p.y, a.z - p.z);
    let (bx, by, bz) = (b.x - p.x, b.y - p.y, b.z - p.z);
    let (cx, cy, cz) = (c.x - p.x, c.y - p.y, c.z - p.z);

    #[rustfmt::skip]
    let m = Matrix4::new(
        ax,  ay,  az,  ax * ax + ay * ay,
        bx,  by,  bz,  bx * bx + by * by,
        cx,  cy,  cz,  cx * cx + cy * cy,
        0.0, 0.0, 0.0, 1.0,
    );

    m.determinant() > 0.0
}

/// Triangulate a normalized point cloud with the default strip strategy.
///
/// Vertices are built 1:1 from the points, index-aligned, with zero
/// normals. Fewer than three points yields an empty mesh; a filter pass
/// that discards every candidate yields populated vertices with an empty
/// index sequence. Both are expected shapes, not errors.
pub fn triangulate(
    cloud: &PointCloud<Point3f>,
    config: &TriangulatorConfig,
    sink: &mut dyn DiagnosticSink,
) -> TerrainMesh {
    triangulate_with_strategy(cloud, config, &SequentialStrip, sink)
}

/// Triangulate with a caller-chosen candidate strategy.
pub fn triangulate_with_strategy(
    cloud: &PointCloud<Point3f>,
    config: &TriangulatorConfig,
    strategy: &dyn TriangulationStrategy,
    sink: &mut dyn DiagnosticSink,
) -> TerrainMesh {
    if cloud.len() < 3 {
        sink.record(DiagnosticEvent::InsufficientPoints { count: cloud.len() });
        return TerrainMesh::new();
    }

    let vertices: Vec<Vertex> = cloud.iter().map(|p| Vertex::at(*p)).collect();

    let candidates = strategy.candidate_triangles(&cloud.points);
    sink.record(DiagnosticEvent::CandidateTriangles {
        count: candidates.len(),
    });

    // Measure edges in bulk, then walk the results in candidate order so
    // discard reporting stays deterministic.
    let edge_lengths = parallel::parallel_map(&candidates, |tri| {
        let v0 = vertices[tri[0] as usize].position;
        let v1 = vertices[tri[1] as usize].position;
        let v2 = vertices[tri[2] as usize].position;
        [
            (v1 - v0).magnitude(),
            (v2 - v1).magnitude(),
            (v0 - v2).magnitude(),
        ]
    });

    let mut indices = Vec::with_capacity(candidates.len() * 3);
    for (tri, edges) in candidates.iter().zip(&edge_lengths) {
        if edges.iter().all(|&d| d < config.max_edge_length) {
            indices.extend_from_slice(tri);
        } else {
            sink.record(DiagnosticEvent::TriangleDiscarded {
                indices: *tri,
                edges: *edges,
            });
        }
    }

    sink.record(DiagnosticEvent::TrianglesKept {
        count: indices.len() / 3,
    });

    TerrainMesh::from_vertices_and_indices(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectSink, NullSink};

    fn cloud_of(coords: &[(f32, f32, f32)]) -> PointCloud<Point3f> {
        PointCloud::from_points(coords.iter().map(|&(x, y, z)| Point3f::new(x, y, z)).collect())
    }

    #[test]
    fn test_strip_emits_sequential_triples() {
        let points = vec![
            Point3f::new(0.9, 0.0, 0.0),
            Point3f::new(-0.3, 0.0, 0.0),
            Point3f::new(0.1, 0.0, 0.0),
            Point3f::new(-0.8, 0.0, 0.0),
            Point3f::new(0.5, 0.0, 0.0),
        ];
        // Five points, three candidate triples, named over the original
        // order regardless of where the sort put anything.
        let candidates = SequentialStrip.candidate_triangles(&points);
        assert_eq!(candidates, vec![[0, 1, 2], [1, 2, 3], [2, 3, 4]]);
    }

    #[test]
    fn test_strip_needs_three_points() {
        let points = vec![Point3f::origin(), Point3f::new(1.0, 0.0, 0.0)];
        assert!(SequentialStrip.candidate_triangles(&points).is_empty());
    }

    #[test]
    fn test_too_few_points_yields_empty_mesh() {
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let mut sink = CollectSink::new();
        let mesh = triangulate(&cloud, &TriangulatorConfig::default(), &mut sink);

        assert!(mesh.is_empty());
        assert!(sink
            .events
            .iter()
            .any(|e| matches!(e, DiagnosticEvent::InsufficientPoints { count: 2 })));
    }

    #[test]
    fn test_edge_filter_is_strict_and_reported() {
        // Unit square on the XZ plane: both candidate triangles carry edges
        // far above the default 0.15 threshold, so everything is discarded.
        let cloud = cloud_of(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 0.0, 1.0),
        ]);
        let mut sink = CollectSink::new();
        let mesh = triangulate(&cloud, &TriangulatorConfig::default(), &mut sink);

        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.indices.is_empty());
        assert!(!mesh.is_drawable());
        assert_eq!(sink.discarded(), 2);

        let discarded: Vec<_> = sink
            .events
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::TriangleDiscarded { indices, .. } => Some(*indices),
                _ => None,
            })
            .collect();
        assert_eq!(discarded, vec![[0, 1, 2], [1, 2, 3]]);
    }

    #[test]
    fn test_close_points_survive_the_filter() {
        let cloud = cloud_of(&[
            (0.0, 0.0, 0.0),
            (0.1, 0.0, 0.0),
            (0.1, 0.0, 0.1),
            (0.0, 0.0, 0.1),
        ]);
        let mut sink = CollectSink::new();
        let mesh = triangulate(&cloud, &TriangulatorConfig::default(), &mut sink);

        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate_indices());
        assert_eq!(sink.discarded(), 0);
    }

    #[test]
    fn test_refiltering_output_is_idempotent() {
        let cloud = cloud_of(&[
            (0.0, 0.0, 0.0),
            (0.1, 0.0, 0.0),
            (0.1, 0.0, 0.1),
            (0.0, 0.0, 0.1),
            (0.9, 0.0, 0.9),
        ]);
        let config = TriangulatorConfig::default();
        let mesh = triangulate(&cloud, &config, &mut NullSink);

        // Every surviving triangle already satisfies the strict bound, so
        // running the same test again removes nothing.
        for tri in mesh.triangles() {
            let [v0, v1, v2] = mesh.triangle_positions(tri);
            assert!((v1 - v0).magnitude() < config.max_edge_length);
            assert!((v2 - v1).magnitude() < config.max_edge_length);
            assert!((v0 - v2).magnitude() < config.max_edge_length);
        }
    }

    #[test]
    fn test_custom_threshold_keeps_larger_triangles() {
        let cloud = cloud_of(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 0.0, 1.0),
        ]);
        let config = TriangulatorConfig::default().with_max_edge_length(2.0);
        let mesh = triangulate(&cloud, &config, &mut NullSink);

        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_circumcircle_determinant_sign() {
        let a = Point3f::new(1.0, 0.0, 0.0);
        let b = Point3f::new(0.0, 1.0, 0.0);
        let c = Point3f::new(0.0, 0.0, 1.0);

        // Offsets from the origin form a positively oriented basis.
        assert!(point_in_circumcircle(&Point3f::origin(), &a, &b, &c));
        // From the far side the orientation flips.
        assert!(!point_in_circumcircle(&Point3f::new(2.0, 2.0, 2.0), &a, &b, &c));
    }

    #[test]
    fn test_circumcircle_is_indifferent_to_coplanar_z() {
        // With all z offsets zero the determinant collapses to zero, so the
        // predicate reports "outside" everywhere on the plane.
        let a = Point3f::new(1.0, 0.0, 0.0);
        let b = Point3f::new(-1.0, 0.0, 0.0);
        let c = Point3f::new(0.0, 1.0, 0.0);
        assert!(!point_in_circumcircle(&Point3f::new(0.0, -0.5, 0.0), &a, &b, &c));
    }
}

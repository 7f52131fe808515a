//! Smooth per-vertex normal estimation from face topology

use crate::parallel;
use terramesh_core::{TerrainMesh, Vector3f};

/// Estimate smooth per-vertex normals by unweighted face-normal
/// accumulation.
///
/// Every vertex normal is reset to zero, each triangle's face normal (the
/// normalized cross product of its first two edges) is added to all three
/// corner accumulators, and each accumulator is renormalized at the end.
/// A vertex no surviving triangle touches keeps the zero vector, as does a
/// vertex whose contributions cancel exactly; neither may turn into NaN.
pub fn estimate_normals(mesh: &mut TerrainMesh) {
    for vertex in &mut mesh.vertices {
        vertex.normal = Vector3f::zeros();
    }

    let triangles: Vec<[u32; 3]> = mesh.triangles().collect();
    let face_normals = parallel::parallel_map(&triangles, |tri| {
        let [v0, v1, v2] = mesh.triangle_positions(*tri);
        (v1 - v0)
            .cross(&(v2 - v0))
            .try_normalize(0.0)
            .unwrap_or_else(Vector3f::zeros)
    });

    let mut accumulated = vec![Vector3f::zeros(); mesh.vertices.len()];
    for (tri, normal) in triangles.iter().zip(&face_normals) {
        for &corner in tri {
            accumulated[corner as usize] += normal;
        }
    }

    for (vertex, sum) in mesh.vertices.iter_mut().zip(&accumulated) {
        vertex.normal = sum.try_normalize(0.0).unwrap_or_else(Vector3f::zeros);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use terramesh_core::{Point3f, Vertex};

    fn flat_quad() -> TerrainMesh {
        let vertices = vec![
            Vertex::at(Point3f::new(0.0, 0.0, 0.0)),
            Vertex::at(Point3f::new(0.1, 0.0, 0.0)),
            Vertex::at(Point3f::new(0.1, 0.0, 0.1)),
            Vertex::at(Point3f::new(0.0, 0.0, 0.1)),
        ];
        TerrainMesh::from_vertices_and_indices(vertices, vec![0, 1, 2, 1, 2, 3])
    }

    #[test]
    fn test_flat_surface_gets_axis_aligned_unit_normals() {
        let mut mesh = flat_quad();
        estimate_normals(&mut mesh);

        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.normal.magnitude(), 1.0, epsilon = 1e-4);
            // All faces lie in the XZ plane, so every normal is ±Y.
            assert_relative_eq!(vertex.normal.x, 0.0, epsilon = 1e-4);
            assert_relative_eq!(vertex.normal.z, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_unreferenced_vertex_keeps_zero_normal() {
        let mut mesh = flat_quad();
        mesh.vertices.push(Vertex::at(Point3f::new(0.9, 0.9, 0.9)));
        estimate_normals(&mut mesh);

        assert_eq!(mesh.vertices[4].normal, Vector3f::zeros());
        for vertex in &mesh.vertices[..4] {
            assert_relative_eq!(vertex.normal.magnitude(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_estimation_resets_stale_normals() {
        let mut mesh = flat_quad();
        for vertex in &mut mesh.vertices {
            vertex.normal = Vector3f::new(9.0, 9.0, 9.0);
        }
        mesh.indices.clear();
        estimate_normals(&mut mesh);

        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, Vector3f::zeros());
        }
    }

    #[test]
    fn test_degenerate_triangle_contributes_nothing() {
        // Three collinear corners: the cross product is zero and must not
        // poison the accumulators with NaN.
        let vertices = vec![
            Vertex::at(Point3f::new(0.0, 0.0, 0.0)),
            Vertex::at(Point3f::new(0.05, 0.0, 0.0)),
            Vertex::at(Point3f::new(0.1, 0.0, 0.0)),
        ];
        let mut mesh = TerrainMesh::from_vertices_and_indices(vertices, vec![0, 1, 2]);
        estimate_normals(&mut mesh);

        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, Vector3f::zeros());
            assert!(!vertex.normal.x.is_nan());
        }
    }

    #[test]
    fn test_shared_edge_averages_between_faces() {
        // A ridge: two faces meeting along the edge (1, 2) at an angle.
        let vertices = vec![
            Vertex::at(Point3f::new(0.0, 0.0, 0.0)),
            Vertex::at(Point3f::new(0.1, 0.05, 0.0)),
            Vertex::at(Point3f::new(0.1, 0.05, 0.1)),
            Vertex::at(Point3f::new(0.2, 0.0, 0.1)),
        ];
        let mut mesh = TerrainMesh::from_vertices_and_indices(vertices, vec![0, 1, 2, 1, 2, 3]);
        estimate_normals(&mut mesh);

        // Corners on the shared edge blend both faces; all are unit length.
        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.normal.magnitude(), 1.0, epsilon = 1e-4);
        }
        let lone = mesh.vertices[0].normal;
        let shared = mesh.vertices[1].normal;
        assert!((lone - shared).magnitude() > 1e-4);
    }
}

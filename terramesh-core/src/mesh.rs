//! Terrain mesh data structures

use crate::point::{Point3f, Vector3f, Vertex};
use serde::{Deserialize, Serialize};

/// A terrain mesh: an ordered vertex sequence plus a flat triangle index
/// sequence with stride 3.
///
/// Indices reference positions in `vertices` and are laid out the way an
/// element array buffer expects, so the mesh can be handed to a renderer
/// without repacking. Invariants: every index is `< vertices.len()` and
/// `indices.len()` is a multiple of 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh from vertices and a flat index sequence
    pub fn from_vertices_and_indices(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// A mesh is drawable when it has at least one triangle.
    ///
    /// A populated vertex sequence with an empty index sequence is a valid
    /// result of the edge filter discarding everything; callers must check
    /// this before issuing draws.
    pub fn is_drawable(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Verify the index invariants: stride 3 and every index in range.
    pub fn validate_indices(&self) -> bool {
        self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < self.vertices.len())
    }

    /// Positions of the three corners of triangle `t` (by index tuple).
    pub fn triangle_positions(&self, t: [u32; 3]) -> [Point3f; 3] {
        [
            self.vertices[t[0] as usize].position,
            self.vertices[t[1] as usize].position,
            self.vertices[t[2] as usize].position,
        ]
    }

    /// Overwrite all vertex normals in bulk.
    pub fn set_normals(&mut self, normals: &[Vector3f]) {
        if normals.len() == self.vertices.len() {
            for (vertex, normal) in self.vertices.iter_mut().zip(normals) {
                vertex.normal = *normal;
            }
        }
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

impl Default for TerrainMesh {
    fn default() -> Self {
        Self::new()
    }
}

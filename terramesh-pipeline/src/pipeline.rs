//! Fixed-order pipeline composition

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::normalize::normalize_points;
use crate::normals::estimate_normals;
use crate::triangulate::{triangulate, TriangulatorConfig};
use std::time::{Duration, Instant};
use terramesh_core::{Point3f, PointCloud, TerrainMesh};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub triangulator: TriangulatorConfig,
}

/// How far a pipeline run got.
///
/// These are recoverable, expected shapes rather than errors; a caller
/// checks the outcome (and [`TerrainMesh::is_drawable`]) before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// All stages ran. The index sequence may still be empty if the edge
    /// filter discarded every candidate.
    Complete,
    /// The input cloud was empty; nothing ran.
    DegenerateInput,
    /// Fewer than three points; vertices were not built.
    InsufficientPoints,
}

/// Counters gathered over a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    pub input_points: usize,
    pub candidate_triangles: usize,
    pub kept_triangles: usize,
    pub triangulation_time: Duration,
}

/// The completed mesh plus outcome and counters.
#[derive(Debug, Clone)]
pub struct MeshReport {
    pub mesh: TerrainMesh,
    pub outcome: PipelineOutcome,
    pub stats: PipelineStats,
}

impl MeshReport {
    fn empty(outcome: PipelineOutcome, input_points: usize) -> Self {
        Self {
            mesh: TerrainMesh::new(),
            outcome,
            stats: PipelineStats {
                input_points,
                ..Default::default()
            },
        }
    }
}

/// Run the full pipeline: normalize, triangulate, estimate normals.
///
/// The stage order is fixed; normals depend on the surviving topology,
/// which depends on the normalized positions. Each stage fully consumes
/// its input before the next begins and the whole run is synchronous.
pub fn build_terrain_mesh(
    cloud: &PointCloud<Point3f>,
    config: &PipelineConfig,
    sink: &mut dyn DiagnosticSink,
) -> MeshReport {
    sink.record(DiagnosticEvent::PointsReceived { count: cloud.len() });

    let Some(normalized) = normalize_points(cloud) else {
        sink.record(DiagnosticEvent::DegenerateInput);
        return MeshReport::empty(PipelineOutcome::DegenerateInput, 0);
    };
    sink.record(DiagnosticEvent::PointsNormalized {
        count: normalized.len(),
    });

    let started = Instant::now();
    let mut mesh = triangulate(&normalized, &config.triangulator, sink);
    let triangulation_time = started.elapsed();
    sink.record(DiagnosticEvent::TriangulationTime {
        elapsed: triangulation_time,
    });

    if normalized.len() < 3 {
        let mut report = MeshReport::empty(PipelineOutcome::InsufficientPoints, normalized.len());
        report.stats.triangulation_time = triangulation_time;
        return report;
    }

    estimate_normals(&mut mesh);

    let stats = PipelineStats {
        input_points: cloud.len(),
        candidate_triangles: normalized.len() - 2,
        kept_triangles: mesh.triangle_count(),
        triangulation_time,
    };

    MeshReport {
        mesh,
        outcome: PipelineOutcome::Complete,
        stats,
    }
}

//! Structured diagnostics for the meshing pipeline
//!
//! The stages report what happened (point counts, candidate and surviving
//! triangle counts, every discarded triangle with its edge lengths, stage
//! timing) through a [`DiagnosticSink`] passed by the caller. None of this
//! is part of the functional contract; sinks may drop everything.

use std::time::Duration;

/// A single diagnostic event emitted by a pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// The pipeline received its input cloud.
    PointsReceived { count: usize },
    /// Input was empty; normalization was skipped.
    DegenerateInput,
    /// The cloud was rescaled into the canonical volume.
    PointsNormalized { count: usize },
    /// Not enough points to form a single triangle.
    InsufficientPoints { count: usize },
    /// Candidate triangles emitted before the edge filter.
    CandidateTriangles { count: usize },
    /// A candidate failed the edge-length filter.
    TriangleDiscarded { indices: [u32; 3], edges: [f32; 3] },
    /// Triangles surviving the edge filter.
    TrianglesKept { count: usize },
    /// Wall-clock time spent in the triangulation stage.
    TriangulationTime { elapsed: Duration },
}

/// Consumer of pipeline diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, event: DiagnosticEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _event: DiagnosticEvent) {}
}

/// Forwards events to `tracing`.
///
/// Discarded triangles and degenerate inputs are warnings, everything else
/// is debug-level progress reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::PointsReceived { count } => {
                tracing::debug!(count, "received point cloud");
            }
            DiagnosticEvent::DegenerateInput => {
                tracing::warn!("empty point cloud, nothing to mesh");
            }
            DiagnosticEvent::PointsNormalized { count } => {
                tracing::debug!(count, "points normalized to [-1, 1]");
            }
            DiagnosticEvent::InsufficientPoints { count } => {
                tracing::warn!(count, "not enough points to create a mesh");
            }
            DiagnosticEvent::CandidateTriangles { count } => {
                tracing::debug!(count, "candidate triangles before filtering");
            }
            DiagnosticEvent::TriangleDiscarded { indices, edges } => {
                tracing::warn!(
                    i0 = indices[0],
                    i1 = indices[1],
                    i2 = indices[2],
                    d01 = edges[0],
                    d12 = edges[1],
                    d20 = edges[2],
                    "removed triangle with overlong edges"
                );
            }
            DiagnosticEvent::TrianglesKept { count } => {
                tracing::debug!(count, "triangles kept after filtering");
            }
            DiagnosticEvent::TriangulationTime { elapsed } => {
                tracing::debug!(?elapsed, "triangulation finished");
            }
        }
    }
}

/// Buffers events in memory; used by tests to assert on what the stages
/// reported.
#[derive(Debug, Default, Clone)]
pub struct CollectSink {
    pub events: Vec<DiagnosticEvent>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the discarded-triangle events.
    pub fn discarded(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DiagnosticEvent::TriangleDiscarded { .. }))
            .count()
    }
}

impl DiagnosticSink for CollectSink {
    fn record(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}

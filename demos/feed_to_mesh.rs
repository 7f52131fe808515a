//! Full feed-to-mesh demo
//!
//! Writes a synthetic elevation feed to disk, loads it back through the
//! elevation reader, runs the pipeline with tracing diagnostics, and
//! reports the outcome. Pass a feed path as the first argument to mesh an
//! existing file instead.

use anyhow::{Context, Result};
use terramesh_core::{Point3f, PointCloud};
use terramesh_io::{read_elevation, write_elevation, ElevationFeed};
use terramesh_pipeline::{build_terrain_mesh, PipelineConfig, TracingSink};

fn synthetic_feed() -> PointCloud<Point3f> {
    let mut cloud = PointCloud::new();
    for row in 0..24 {
        for col in 0..24 {
            let x = 430_000.0 + col as f32 * 5.0;
            let z = 6_720_000.0 + row as f32 * 5.0;
            let y = 95.0 + (col as f32 * 0.4).sin() * 3.0 + (row as f32 * 0.3).cos() * 2.0;
            cloud.push(Point3f::new(x, y, z));
        }
    }
    cloud
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cloud = match std::env::args().nth(1) {
        Some(path) => {
            let feed = ElevationFeed::read(&path)
                .with_context(|| format!("failed to read elevation feed {}", path))?;
            tracing::info!(
                declared = ?feed.declared_count,
                loaded = feed.cloud.len(),
                "loaded elevation feed"
            );
            feed.cloud
        }
        None => {
            let dir = tempfile::tempdir().context("failed to create temp dir")?;
            let path = dir.path().join("elevation.txt");
            write_elevation(&synthetic_feed(), &path).context("failed to write feed")?;
            let cloud = read_elevation(&path).context("failed to read feed back")?;
            tracing::info!(loaded = cloud.len(), "round-tripped synthetic feed");
            cloud
        }
    };

    let mut sink = TracingSink;
    let report = build_terrain_mesh(&cloud, &PipelineConfig::default(), &mut sink);

    tracing::info!(
        outcome = ?report.outcome,
        vertices = report.mesh.vertex_count(),
        triangles = report.mesh.triangle_count(),
        drawable = report.mesh.is_drawable(),
        elapsed = ?report.stats.triangulation_time,
        "terrain mesh built"
    );

    Ok(())
}

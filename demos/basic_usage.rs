//! Basic usage example for terramesh
//!
//! This example demonstrates fundamental operations:
//! - Creating a point cloud of elevation samples
//! - Running the meshing pipeline
//! - Inspecting the resulting mesh and diagnostics

use terramesh_core::{Point3f, PointCloud};
use terramesh_pipeline::{build_terrain_mesh, CollectSink, PipelineConfig, PipelineOutcome};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("terramesh Basic Usage");
    println!("=====================");

    // A small synthetic terrain patch: a gently undulating 16x16 grid.
    let mut cloud = PointCloud::new();
    for row in 0..16 {
        for col in 0..16 {
            let x = col as f32 * 2.0;
            let z = row as f32 * 2.0;
            let y = (x * 0.3).sin() * 1.5 + (z * 0.2).cos() * 1.0;
            cloud.push(Point3f::new(x, y, z));
        }
    }
    println!("Created point cloud with {} points", cloud.len());

    let mut sink = CollectSink::new();
    let report = build_terrain_mesh(&cloud, &PipelineConfig::default(), &mut sink);

    match report.outcome {
        PipelineOutcome::Complete => println!("Pipeline completed"),
        PipelineOutcome::DegenerateInput => println!("Nothing to mesh: empty input"),
        PipelineOutcome::InsufficientPoints => println!("Nothing to mesh: too few points"),
    }

    println!("\nMesh:");
    println!("- Vertices: {}", report.mesh.vertex_count());
    println!("- Triangles: {}", report.mesh.triangle_count());
    println!("- Drawable: {}", report.mesh.is_drawable());

    println!("\nPipeline stats:");
    println!("- Candidate triangles: {}", report.stats.candidate_triangles);
    println!("- Kept triangles: {}", report.stats.kept_triangles);
    println!("- Discarded (reported): {}", sink.discarded());
    println!(
        "- Triangulation time: {:?}",
        report.stats.triangulation_time
    );

    Ok(())
}

//! Elevation feed I/O for terramesh
//!
//! This crate reads and writes the plain-text elevation format consumed by
//! the terrain meshing pipeline: a leading declared point count followed by
//! whitespace-delimited x y z triples.

pub mod elevation;

pub use elevation::{ElevationFeed, ElevationReader, ElevationWriter};

use std::path::Path;
use terramesh_core::{Point3f, PointCloud, Result};

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>>;
}

/// Trait for writing point clouds to files
pub trait PointCloudWriter {
    fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud<Point3f>, path: P) -> Result<()>;
}

/// Read an elevation feed into a point cloud.
pub fn read_elevation<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
    ElevationReader::read_point_cloud(path)
}

/// Write a point cloud as an elevation feed.
pub fn write_elevation<P: AsRef<Path>>(cloud: &PointCloud<Point3f>, path: P) -> Result<()> {
    ElevationWriter::write_point_cloud(cloud, path)
}

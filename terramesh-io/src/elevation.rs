//! Plain-text elevation feed support
//!
//! The feed format is a leading integer declaring the point count, followed
//! by whitespace-delimited x y z triples. The declared count is read but
//! never validated against the records that follow; parsing stops at the
//! first token that is not a float, and a trailing partial triple is
//! dropped. These are stream-extraction semantics: a malformed feed yields
//! a short (possibly empty) cloud rather than an error.

use crate::{PointCloudReader, PointCloudWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use terramesh_core::{Point3f, PointCloud, Result};

/// A parsed elevation feed: the declared header count plus the points that
/// actually parsed.
#[derive(Debug, Clone)]
pub struct ElevationFeed {
    /// The count declared in the feed header, if the header parsed.
    pub declared_count: Option<usize>,
    pub cloud: PointCloud<Point3f>,
}

impl ElevationFeed {
    /// Read a feed from a file. Open/read failures propagate as errors;
    /// malformed content does not.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(Self::parse(&contents))
    }

    /// Parse feed text.
    pub fn parse(contents: &str) -> Self {
        let mut tokens = contents.split_whitespace();

        let declared_count = tokens.next().and_then(|t| t.parse::<usize>().ok());
        if declared_count.is_none() {
            // A bad header poisons the stream; nothing after it is read.
            return Self {
                declared_count: None,
                cloud: PointCloud::new(),
            };
        }

        let mut coords = Vec::new();
        for token in tokens {
            match token.parse::<f32>() {
                Ok(value) => coords.push(value),
                Err(_) => break,
            }
        }

        let cloud = coords
            .chunks_exact(3)
            .map(|c| Point3f::new(c[0], c[1], c[2]))
            .collect();

        Self {
            declared_count,
            cloud,
        }
    }
}

/// Reads elevation feeds as point clouds, discarding the header count.
pub struct ElevationReader;

/// Writes point clouds as elevation feeds with a count header.
pub struct ElevationWriter;

impl PointCloudReader for ElevationReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
        Ok(ElevationFeed::read(path)?.cloud)
    }
}

impl PointCloudWriter for ElevationWriter {
    fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud<Point3f>, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", cloud.len())?;
        for point in cloud {
            writeln!(writer, "{} {} {}", point.x, point.y, point.z)?;
        }
        writer.flush()?;
        Ok(())
    }
}

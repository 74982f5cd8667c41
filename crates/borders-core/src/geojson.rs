// crates/borders-core/src/geojson.rs

//! # GeoJSON Output
//!
//! Minimal GeoJSON model for boundaries, plus the two output modes: one
//! FeatureCollection per boundary, or a single combined collection.

use crate::color::name_to_color;
use crate::error::Result;
use crate::export::{write_json, write_json_file, JsonStyle};
use crate::poly::{Boundary, Ring};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File extension of emitted per-boundary files.
pub const GEOJSON_EXTENSION: &str = "geojson";

/// Geometry of a single boundary.
///
/// Rings are never merged: a multi-ring boundary becomes a `MultiPolygon`
/// whose members each hold exactly one ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    pub fn from_rings(rings: &[Ring]) -> Self {
        match rings {
            [single] => Geometry::Polygon {
                coordinates: vec![single.clone()],
            },
            _ => Geometry::MultiPolygon {
                coordinates: rings.iter().map(|r| vec![r.clone()]).collect(),
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub title: String,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn from_boundary(boundary: &Boundary) -> Self {
        Self {
            properties: FeatureProperties {
                title: boundary.name.clone(),
                fill: name_to_color(&boundary.name),
            },
            geometry: Geometry::from_rings(&boundary.polygons),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// One feature per boundary, in the given order.
    pub fn from_boundaries(boundaries: &[Boundary]) -> Self {
        Self {
            features: boundaries.iter().map(Feature::from_boundary).collect(),
        }
    }
}

/// Path of the per-boundary output file. The name is used verbatim.
pub fn geojson_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}.{GEOJSON_EXTENSION}"))
}

/// Writes one single-feature collection per boundary into `output_dir`.
///
/// Only `output_dir` itself is created if missing; a name that points into
/// a directory that does not exist fails instead of creating it. Existing
/// files are replaced. Returns the written paths in boundary order.
pub fn write_per_file(boundaries: &[Boundary], output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(boundaries.len());
    for boundary in boundaries {
        if boundary.name.contains(['/', '\\']) {
            warn!(
                "boundary name `{}` contains a path separator; writing it unchanged",
                boundary.name
            );
        }
        info!("Saving {}.{} ...", boundary.name, GEOJSON_EXTENSION);

        let collection = FeatureCollection {
            features: vec![Feature::from_boundary(boundary)],
        };
        let path = geojson_path(output_dir, &boundary.name);
        let file = File::create(&path)?;
        write_json(BufWriter::new(file), &collection, JsonStyle::Compact)?;
        written.push(path);
    }
    Ok(written)
}

/// Writes every boundary into a single collection at `output_file`.
pub fn write_combined(boundaries: &[Boundary], output_file: &Path) -> Result<()> {
    info!(
        "Saving {} features to {} ...",
        boundaries.len(),
        output_file.display()
    );
    let collection = FeatureCollection::from_boundaries(boundaries);
    write_json_file(output_file, &collection, JsonStyle::Pretty)
}

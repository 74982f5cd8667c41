// crates/borders-core/src/poly/mod.rs

//! # Poly Boundaries
//!
//! Reader for the Osmosis / OrganicMaps `.poly` polygon filter format:
//!
//! ```text
//! Andorra
//! 1
//! 	1.5 42.5
//! 	1.6 42.6
//! END
//! END
//! ```
//!
//! The first line names the boundary, each ring starts with an integer index
//! line and is closed by `END`, and a final `END` closes the file.

mod parser;

use crate::error::Result;
use crate::loader::{list_poly_files, open_stream};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

pub use parser::ParseState;

/// A `(lat, lon)` pair exactly as written in the `.poly` file.
///
/// Serialized as a two-element array in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

/// One ring; closed implicitly by the source format.
pub type Ring = Vec<Coordinate>;

/// A named boundary with one entry per ring found in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub name: String,
    pub polygons: Vec<Ring>,
}

impl Boundary {
    pub fn ring_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Vec::len).sum()
    }
}

/// Label used in errors for input that did not come from a file.
const MEMORY_SOURCE: &str = "<memory>";

/// Parses `.poly` content held in memory.
pub fn parse_poly_str(input: &str) -> Result<Boundary> {
    parser::parse_lines(Path::new(MEMORY_SOURCE), input.lines().map(Ok))
}

/// Parses `.poly` content from a reader. `source` is only used in errors.
pub fn parse_poly_reader<R: Read>(reader: R, source: &Path) -> Result<Boundary> {
    use std::io::BufRead;
    parser::parse_lines(source, BufReader::new(reader).lines())
}

/// Parses a single `.poly` file (`.poly.gz` accepted with `compact`).
pub fn parse_poly_file(path: impl AsRef<Path>) -> Result<Boundary> {
    let path = path.as_ref();
    info!("Parsing {} ...", path.display());
    let reader = open_stream(path)?;
    parse_poly_reader(reader, path)
}

/// Parses every `.poly` file directly inside `dir`, in file name order.
///
/// All files are parsed before anything is returned; the first failure
/// aborts the whole scan.
pub fn parse_poly_dir(dir: impl AsRef<Path>) -> Result<Vec<Boundary>> {
    let dir = dir.as_ref();
    info!("Loading POLY files from {} ...", dir.display());
    let files: Vec<PathBuf> = list_poly_files(dir)?;
    let boundaries = files
        .iter()
        .map(parse_poly_file)
        .collect::<Result<Vec<_>>>()?;
    info!("Parsed {} boundaries", boundaries.len());
    Ok(boundaries)
}

// crates/borders-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, decompression, directory scans)
//! so the parsers only ever see a `Read`.

use crate::error::{BordersError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub mod common_io;

pub use common_io::{create_output, open_stream};

/// File extension of boundary polygon files.
pub const POLY_EXTENSION: &str = "poly";

/// Lists the `.poly` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. With the `compact` feature,
/// gzipped `*.poly.gz` files are listed as well.
pub fn list_poly_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        BordersError::NotFound(format!("Borders directory {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_poly_file(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_poly_file(path: &Path) -> bool {
    if path.extension().is_some_and(|ext| ext == POLY_EXTENSION) {
        return true;
    }

    #[cfg(feature = "compact")]
    {
        if common_io::is_gzip(path) {
            return path
                .file_stem()
                .map(Path::new)
                .and_then(Path::extension)
                .is_some_and(|ext| ext == POLY_EXTENSION);
        }
    }

    false
}

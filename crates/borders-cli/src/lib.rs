//! borders-cli
//! ===========
//!
//! Command-line converters for OrganicMaps border data, built on
//! [`borders-core`]. Two binaries are provided:
//!
//! - `borders-tree`: `countries.txt` to a JSON tree for a UI tree widget.
//! - `poly-to-geojson`: a directory of `.poly` files to GeoJSON.
//!
//! Usage
//! -----
//!
//! ```text
//! borders-tree data/countries.txt -o public/borders.json
//! poly-to-geojson data/borders --out out/all.geojson
//! poly-to-geojson data/borders --dir out/borders
//! ```
//!
//! Progress is logged to stderr; set `RUST_LOG=debug` (or `warn`) to change
//! verbosity.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{PolyArgs, TreeArgs};
use anyhow::Context;
use borders_core::loader::create_output;
use borders_core::{load_countries, parse_poly_dir, write_combined, write_per_file, write_tree};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber honouring `RUST_LOG` (default `info`).
///
/// Stdout stays reserved for JSON output.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs the country tree conversion.
///
/// The document is loaded before the output is opened, so a malformed input
/// leaves no file behind.
pub fn run_tree(args: &TreeArgs) -> anyhow::Result<()> {
    let doc = load_countries(&args.countries_txt)
        .with_context(|| format!("failed to load {}", args.countries_txt.display()))?;

    match args.out_path() {
        Some(path) => {
            let out = create_output(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_tree(&doc, out)?;
        }
        None => write_tree(&doc, io::stdout().lock())?,
    }
    Ok(())
}

/// Runs the `.poly` conversion in every requested output mode.
///
/// The directory is parsed once, before anything is written.
pub fn run_poly(args: &PolyArgs) -> anyhow::Result<()> {
    if args.out.is_none() && args.dir.is_none() {
        anyhow::bail!("Either output `--out` file or `--dir` should be specified");
    }

    let boundaries = parse_poly_dir(&args.borders_dir)
        .with_context(|| format!("failed to load {}", args.borders_dir.display()))?;

    if let Some(out) = &args.out {
        write_combined(&boundaries, out)
            .with_context(|| format!("failed to write {}", out.display()))?;
    }

    if let Some(dir) = &args.dir {
        let written = write_per_file(&boundaries, dir)
            .with_context(|| format!("failed to write into {}", dir.display()))?;
        info!("Wrote {} files to {}", written.len(), dir.display());
    }

    info!("Done!");
    Ok(())
}

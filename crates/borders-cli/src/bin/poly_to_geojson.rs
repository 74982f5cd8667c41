//! poly-to-geojson — .poly boundaries to GeoJSON
//!
//! Parses every `*.poly` file directly inside the given directory and writes
//! GeoJSON FeatureCollections, colored per boundary name.
//!
//! Usage examples
//! --------------
//!
//! - One combined file
//!   $ poly-to-geojson data/borders --out out/borders.geojson
//!
//! - One file per boundary
//!   $ poly-to-geojson data/borders --dir out/borders
//!
//! - Both at once
//!   $ poly-to-geojson data/borders -o out/borders.geojson -d out/borders
//!
//! At least one of `--out` / `--dir` is required.
use borders_cli::args::PolyArgs;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = PolyArgs::parse();
    borders_cli::init_tracing();
    borders_cli::run_poly(&args)
}

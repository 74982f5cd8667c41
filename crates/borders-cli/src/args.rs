use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Value of `--out` that selects standard output.
pub const STDOUT_MARKER: &str = "-";

/// CLI arguments for borders-tree
#[derive(Debug, Parser)]
#[command(
    name = "borders-tree",
    version,
    about = "Converts countries.txt from OrganicMaps data to the simplified JSON used by a UI tree component"
)]
pub struct TreeArgs {
    /// Output file name; defaults to "-" for stdout
    #[arg(short = 'o', long = "out", default_value = STDOUT_MARKER)]
    pub out: String,

    /// Path to file countries.txt from OrganicMaps data
    pub countries_txt: PathBuf,
}

impl TreeArgs {
    /// Output file, or `None` for standard output.
    pub fn out_path(&self) -> Option<PathBuf> {
        match self.out.as_str() {
            "" | STDOUT_MARKER => None,
            path => Some(PathBuf::from(path)),
        }
    }
}

/// CLI arguments for poly-to-geojson
#[derive(Debug, Parser)]
#[command(
    name = "poly-to-geojson",
    version,
    about = "Converts *.poly files with borders geometry from OrganicMaps data to GeoJSON",
    long_about = "Converts *.poly files with borders geometry from OrganicMaps data to GeoJSON.\n\
                  Can write a GeoJSON file per poly file (--dir), merge all boundaries into a \
                  single GeoJSON file (--out), or both."
)]
#[command(group(
    ArgGroup::new("output")
        .args(["out", "dir"])
        .required(true)
        .multiple(true)
))]
pub struct PolyArgs {
    /// Output GeoJSON file holding every boundary
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Output directory for one GeoJSON file per boundary
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Path to directory with *.poly files from OrganicMaps data
    pub borders_dir: PathBuf,
}

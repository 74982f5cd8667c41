//! borders-tree — countries.txt to a UI tree
//!
//! Reads the nested country hierarchy shipped with OrganicMaps data and
//! writes `[{key, label, icon, children?}, ...]` JSON, indented by two
//! spaces, to stdout or to the file given with `--out`.
//!
//! Usage examples
//! --------------
//!
//! - Print to stdout
//!   $ borders-tree data/countries.txt
//!
//! - Write to a file
//!   $ borders-tree data/countries.txt -o web/borders.json
use borders_cli::args::TreeArgs;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = TreeArgs::parse();
    borders_cli::init_tracing();
    borders_cli::run_tree(&args)
}

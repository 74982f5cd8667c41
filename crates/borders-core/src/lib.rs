// crates/borders-core/src/lib.rs

//! borders-core
//! ============
//!
//! Conversion pipelines for OrganicMaps border data:
//!
//! - [`tree`]: `countries.txt` hierarchy to a `{key, label, icon, children}`
//!   JSON tree for UI display.
//! - [`poly`] + [`geojson`]: `.poly` boundary files to GeoJSON, either one
//!   FeatureCollection per boundary or one combined collection.
//!
//! ```rust
//! use borders_core::{parse_poly_str, Feature, Geometry};
//!
//! let boundary = parse_poly_str("Andorra\n1\n\t1.5 42.5\n\t1.6 42.6\nEND\nEND\n").unwrap();
//! let feature = Feature::from_boundary(&boundary);
//! assert!(matches!(feature.geometry, Geometry::Polygon { .. }));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod error;
pub mod export;
pub mod geojson;
pub mod loader;
pub mod poly;
pub mod tree;

// Re-exports
pub use crate::color::name_to_color;
pub use crate::error::{BordersError, PolyErrorKind, Result};
pub use crate::export::JsonStyle;
pub use crate::geojson::{
    write_combined, write_per_file, Feature, FeatureCollection, FeatureProperties, Geometry,
};
pub use crate::poly::{
    parse_poly_dir, parse_poly_file, parse_poly_reader, parse_poly_str, Boundary, Coordinate,
    Ring,
};
pub use crate::tree::{
    countries_to_borders, load_countries, read_countries, write_borders, write_tree, BorderNode,
    CountriesDocument, CountryNode,
};

//! Basic usage example for borders-rs
//!
//! Builds a small border tree and converts an in-memory `.poly` boundary to
//! GeoJSON, printing both to stdout.

use borders_core::{
    parse_poly_str, read_countries, write_borders, FeatureCollection, JsonStyle, Result,
};

const COUNTRIES: &str = r#"{
  "id": "Countries",
  "g": [
    {"id": "World"},
    {"id": "France", "g": [{"id": "France_Ile-de-France"}, {"id": "France_Brittany"}]},
    {"id": "Andorra"}
  ]
}"#;

const ANDORRA: &str = "Andorra\n1\n\t1.41 42.43\n\t1.78 42.43\n\t1.78 42.66\nEND\nEND\n";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    println!("=== Border tree ===");
    let doc = read_countries(COUNTRIES.as_bytes())?;
    write_borders(&doc.to_borders(), std::io::stdout().lock())?;
    println!();

    println!("=== GeoJSON ===");
    let boundary = parse_poly_str(ANDORRA)?;
    println!(
        "{} rings, {} points",
        boundary.ring_count(),
        boundary.point_count()
    );
    let collection = FeatureCollection::from_boundaries(&[boundary]);
    borders_core::export::write_json(std::io::stdout().lock(), &collection, JsonStyle::Pretty)?;
    println!();

    Ok(())
}

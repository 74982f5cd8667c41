//! GeoJSON emission tests

use borders_core::geojson::geojson_path;
use borders_core::{
    name_to_color, parse_poly_str, write_combined, write_per_file, Boundary, Coordinate, Feature,
    FeatureCollection, Geometry,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn boundary(name: &str, rings: usize) -> Boundary {
    Boundary {
        name: name.to_owned(),
        polygons: (0..rings)
            .map(|i| vec![Coordinate(i as f64, 0.5), Coordinate(i as f64 + 1.0, 1.5)])
            .collect(),
    }
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_single_ring_feature_shape() {
    let b = parse_poly_str("Andorra\n1\n\t1.5 42.5\n\t1.6 42.6\nEND\nEND\n").unwrap();
    let value = serde_json::to_value(Feature::from_boundary(&b)).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "Feature",
            "properties": {"title": "Andorra", "fill": name_to_color("Andorra")},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[1.5, 42.5], [1.6, 42.6]]]
            }
        })
    );
}

#[test]
fn test_multi_ring_becomes_single_ring_polygons() {
    let b = boundary("Islands", 3);
    let feature = Feature::from_boundary(&b);
    assert_eq!(feature.geometry.type_name(), "MultiPolygon");

    match feature.geometry {
        Geometry::MultiPolygon { coordinates } => {
            assert_eq!(coordinates.len(), 3);
            for (group, ring) in coordinates.iter().zip(&b.polygons) {
                assert_eq!(group, &vec![ring.clone()]);
            }
        }
        other => panic!("expected MultiPolygon, got {other:?}"),
    }
}

#[test]
fn test_zero_rings_give_empty_multipolygon() {
    let value = serde_json::to_value(Feature::from_boundary(&boundary("Empty", 0))).unwrap();
    assert_eq!(value["geometry"], json!({"type": "MultiPolygon", "coordinates": []}));
}

#[test]
fn test_collection_preserves_order() {
    let collection =
        FeatureCollection::from_boundaries(&[boundary("B", 1), boundary("A", 2)]);
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"][0]["properties"]["title"], "B");
    assert_eq!(value["features"][1]["properties"]["title"], "A");
}

#[test]
fn test_write_per_file_creates_dir_and_overwrites() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("nested").join("geojson");
    let existing = geojson_path(&out_dir, "Andorra");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(&existing, "stale").unwrap();

    let written = write_per_file(&[boundary("Andorra", 1), boundary("Monaco", 2)], &out_dir)
        .unwrap();
    assert_eq!(written, vec![existing.clone(), out_dir.join("Monaco.geojson")]);

    let text = fs::read_to_string(&existing).unwrap();
    assert!(!text.contains('\n'), "per-file output is compact");
    let value = read_json(&existing);
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().unwrap().len(), 1);
    assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");

    let monaco = read_json(&out_dir.join("Monaco.geojson"));
    assert_eq!(monaco["features"][0]["geometry"]["type"], "MultiPolygon");
}

#[test]
fn test_write_combined_creates_parents() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("a").join("b").join("all.geojson");

    write_combined(&[boundary("Andorra", 1), boundary("Monaco", 1)], &out).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\""), "{text}");
    let parsed: FeatureCollection = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.features.len(), 2);
    assert_eq!(parsed.features[1].properties.fill, name_to_color("Monaco"));
}

#[test]
fn test_write_per_file_does_not_create_directories_from_names() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");

    let result = write_per_file(&[boundary("../x/France", 1)], &out_dir);

    assert!(matches!(result, Err(borders_core::BordersError::Io(_))));
    assert!(out_dir.is_dir());
    assert!(!tmp.path().join("x").exists());
}

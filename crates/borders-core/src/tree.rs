// crates/borders-core/src/tree.rs

//! # Country Tree
//!
//! Projects the nested `countries.txt` hierarchy from OrganicMaps data into
//! the simplified `{key, label, icon, children}` records consumed by a UI
//! tree component.

use crate::error::Result;
use crate::export::{write_json, JsonStyle};
use crate::loader::open_stream;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Icon class attached to every border node.
pub const BORDER_ICON: &str = "pi pi-fw pi-inbox";

/// Nodes whose id starts with this prefix are left out of the tree.
pub const EXCLUDED_PREFIX: &str = "World";

/// One node of the country hierarchy, as it appears in `countries.txt`.
///
/// Only `id` and the child group `g` are read; every other key in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryNode {
    pub id: String,
    #[serde(default)]
    pub g: Option<Vec<CountryNode>>,
}

/// Top-level `countries.txt` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountriesDocument {
    pub g: Vec<CountryNode>,
}

/// Simplified tree record for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderNode {
    pub key: String,
    pub label: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BorderNode>>,
}

impl BorderNode {
    /// A leaf node for `id`.
    pub fn leaf(id: &str) -> Self {
        Self {
            key: id.to_owned(),
            label: id.to_owned(),
            icon: BORDER_ICON.to_owned(),
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Returns `true` for nodes that must not appear in the output tree.
pub fn is_excluded(node: &CountryNode) -> bool {
    node.id.starts_with(EXCLUDED_PREFIX)
}

/// Projects a sequence of country nodes into border nodes.
///
/// Input order is preserved and `World*` nodes are skipped at every depth.
/// A node gets a `children` list only when its `g` group is non-empty; the
/// list itself may end up empty if every child was excluded.
pub fn countries_to_borders(countries: &[CountryNode]) -> Vec<BorderNode> {
    countries
        .iter()
        .filter(|c| !is_excluded(c))
        .map(|c| {
            let mut node = BorderNode::leaf(&c.id);
            node.children = c
                .g
                .as_deref()
                .filter(|group| !group.is_empty())
                .map(countries_to_borders);
            node
        })
        .collect()
}

impl CountriesDocument {
    /// Border tree for the root group of this document.
    pub fn to_borders(&self) -> Vec<BorderNode> {
        countries_to_borders(&self.g)
    }
}

/// Parses a country document from any reader.
pub fn read_countries<R: Read>(reader: R) -> Result<CountriesDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Loads a country document from disk (`.gz` accepted with `compact`).
pub fn load_countries(path: impl AsRef<Path>) -> Result<CountriesDocument> {
    let path = path.as_ref();
    info!("Loading `{}` file ...", path.display());
    let reader = open_stream(path)?;
    read_countries(reader)
}

/// Writes the border tree as JSON indented by two spaces.
pub fn write_borders<W: Write>(borders: &[BorderNode], writer: W) -> Result<()> {
    write_json(writer, borders, JsonStyle::Pretty)
}

/// Converts a loaded document and writes its border tree to `writer`.
pub fn write_tree<W: Write>(doc: &CountriesDocument, writer: W) -> Result<()> {
    info!("Converting to border tree ...");
    let borders = doc.to_borders();

    info!("Exporting {} top-level nodes to JSON ...", borders.len());
    write_borders(&borders, writer)?;

    info!("Done!");
    Ok(())
}

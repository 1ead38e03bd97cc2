//! Deserializable representation of a monkey catalog document.
//!
//! The types mirror `schema/monkey_catalog.schema.json`. Documents are
//! schema-checked as raw JSON first, then deserialized here; invariant checks
//! that JSON Schema cannot express (unique names) live in `Catalog`.

use crate::schema_loader::{catalog_schema, validate_document};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub(crate) const EMBEDDED_CATALOG: &str = include_str!("../../data/monkeys.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One monkey species. Immutable once loaded into a catalog.
pub struct MonkeySpecies {
    pub name: String,
    pub location: String,
    pub details: String,
    /// Image URL or identifier; may be empty.
    #[serde(default)]
    pub image: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl MonkeySpecies {
    /// Whether the coordinates fall inside the usual geographic ranges.
    ///
    /// Out-of-range values are still accepted; loaders only log them.
    pub fn has_plausible_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full catalog document as stored on disk or embedded in the binary.
pub struct CatalogDocument {
    pub schema_version: String,
    pub species: Vec<MonkeySpecies>,
}

/// Parse and schema-check a catalog document from JSON text.
///
/// `label` identifies the source (a path or "embedded") in errors.
pub fn parse_catalog_document(source: &str, label: &str) -> Result<CatalogDocument> {
    let value: Value =
        serde_json::from_str(source).with_context(|| format!("parsing catalog {label}"))?;
    let schema = catalog_schema()?;
    validate_document(&schema, &value, label)?;
    let document: CatalogDocument =
        serde_json::from_value(value).with_context(|| format!("decoding catalog {label}"))?;
    Ok(document)
}

/// Read and parse a catalog document from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog_document(&data, &path.display().to_string())
}

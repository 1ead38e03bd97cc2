//! Indexed, validated catalog instance.
//!
//! The index rejects empty catalogs and duplicate names (case-insensitive) so
//! the menu never has to handle those states. Queries take `&self`; the only
//! mutable piece is the random-pick counter.

use crate::catalog::identity::SpeciesKey;
use crate::catalog::model::{
    CatalogDocument, EMBEDDED_CATALOG, MonkeySpecies, load_catalog_from_path,
    parse_catalog_document,
};
use crate::schema_loader::{CATALOG_SCHEMA_VERSION, catalog_schema};
use anyhow::{Context, Result, bail};
use rand::Rng;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug)]
/// Species list plus a derived index keyed by lowercased name.
pub struct Catalog {
    schema_version: String,
    species: Vec<MonkeySpecies>,
    by_key: BTreeMap<SpeciesKey, usize>,
    random_access_count: Cell<u64>,
}

impl Catalog {
    /// Build the catalog shipped inside the binary.
    pub fn seeded() -> Result<Self> {
        let document = parse_catalog_document(EMBEDDED_CATALOG, "embedded")?;
        Self::from_document(document).context("building embedded catalog")
    }

    /// Load, schema-check and index a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let document = load_catalog_from_path(path)?;
        Self::from_document(document)
            .with_context(|| format!("building catalog from {}", path.display()))
    }

    /// Index a decoded document; its version must match the catalog schema.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let schema = catalog_schema()?;
        if document.schema_version != schema.schema_version {
            bail!(
                "catalog schema_version '{}' does not match supported '{}'",
                document.schema_version,
                schema.schema_version
            );
        }
        let catalog = Self::build(document.schema_version, document.species)?;
        info!(
            species = catalog.len(),
            schema_version = %catalog.schema_version,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Index an in-memory species list under the current schema version.
    pub fn from_species(species: Vec<MonkeySpecies>) -> Result<Self> {
        Self::build(CATALOG_SCHEMA_VERSION.to_string(), species)
    }

    fn build(schema_version: String, species: Vec<MonkeySpecies>) -> Result<Self> {
        let by_key = build_index(&species)?;
        Ok(Self {
            schema_version,
            species,
            by_key,
            random_access_count: Cell::new(0),
        })
    }

    /// Every entry in insertion order.
    pub fn list_all(&self) -> &[MonkeySpecies] {
        &self.species
    }

    /// Case-insensitive exact match on the species name.
    ///
    /// Blank input and misses both return `None`; neither touches the
    /// random-pick counter.
    pub fn find_by_name(&self, name: &str) -> Option<&MonkeySpecies> {
        let key = SpeciesKey::new(name)?;
        let found = self.by_key.get(&key).map(|&idx| &self.species[idx]);
        debug!(query = %key, hit = found.is_some(), "name lookup");
        found
    }

    /// Pick one entry uniformly at random and bump the access counter.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<&MonkeySpecies> {
        if self.species.is_empty() {
            bail!("cannot pick a random species from an empty catalog");
        }
        let idx = rng.random_range(0..self.species.len());
        let count = self.random_access_count.get() + 1;
        self.random_access_count.set(count);
        debug!(index = idx, count, "random pick");
        Ok(&self.species[idx])
    }

    /// Number of completed random picks since construction.
    pub fn random_access_count(&self) -> u64 {
        self.random_access_count.get()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Species names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(|s| s.name.as_str())
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }
}

fn build_index(species: &[MonkeySpecies]) -> Result<BTreeMap<SpeciesKey, usize>> {
    if species.is_empty() {
        bail!("catalog contains no species");
    }

    let mut map = BTreeMap::new();
    for (idx, entry) in species.iter().enumerate() {
        let Some(key) = SpeciesKey::new(&entry.name) else {
            bail!("species at position {} has a blank name", idx + 1);
        };
        if let Some(&first) = map.get(&key) {
            bail!(
                "duplicate species name '{}' (also at position {})",
                entry.name,
                first + 1
            );
        }
        if !entry.has_plausible_coordinates() {
            warn!(
                species = %entry.name,
                latitude = entry.latitude,
                longitude = entry.longitude,
                "coordinates outside geographic range"
            );
        }
        map.insert(key, idx);
    }
    Ok(map)
}

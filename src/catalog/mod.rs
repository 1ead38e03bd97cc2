//! Monkey species catalog.
//!
//! This module wraps the catalog document under `data/monkeys.json` so the
//! menu can work against a validated, indexed snapshot. `Catalog` owns the
//! records and the random-pick counter; `model` holds the serde types.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::SpeciesKey;
pub use index::Catalog;
pub use model::{CatalogDocument, MonkeySpecies, parse_catalog_document};

pub use model::load_catalog_from_path;

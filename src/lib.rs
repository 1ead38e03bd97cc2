//! Shared library for the monkey-explorer menu.
//!
//! The crate exposes the species catalog (validated, indexed, with a
//! random-pick counter), the interactive menu loop, and the ambient pieces the
//! `monkey-app` binary wires together: environment config, logging, and
//! decorative art. Everything is constructed explicitly in `main` and passed
//! down; there is no global catalog.

pub mod art;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod menu;
mod schema_loader;

pub use catalog::{
    Catalog, CatalogDocument, MonkeySpecies, SpeciesKey, load_catalog_from_path,
    parse_catalog_document,
};
pub use config::AppConfig;
pub use menu::{ExitReason, Menu, MenuCommand, MenuOptions, MenuOutcome, MenuState};
pub use schema_loader::CATALOG_SCHEMA_VERSION;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Build the catalog named by the config, or the embedded one.
pub fn catalog_for(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog override");
            Catalog::load(path)
                .with_context(|| format!("{} points at an unusable catalog", config::CATALOG_ENV))
        }
        None => Catalog::seeded(),
    }
}

/// RNG for a session: seeded when the config asks for reproducibility.
pub fn rng_for(config: &AppConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl From<&AppConfig> for MenuOptions {
    fn from(config: &AppConfig) -> Self {
        MenuOptions {
            show_art: config.show_art,
            reveal_pause: config.reveal_pause,
        }
    }
}

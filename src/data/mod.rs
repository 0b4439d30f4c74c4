//! The built-in demo catalog: a metadata-driven lakehouse ingestion
//! framework's full dependency map (sources, gateway connections, data
//! sources, orchestrator/command/copy pipelines, lakehouse layers,
//! notebooks, configuration and tooling).

use crate::catalog::Catalog;
use crate::error::CatalogError;

const PIPELINE_JSON: &str = include_str!("pipeline.json");

/// Loads and validates the bundled pipeline catalog.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(PIPELINE_JSON)
}

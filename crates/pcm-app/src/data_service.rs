//! Catalog and reference-table access.

use std::path::Path;

use pcm_props::{ComponentCatalog, ComponentRecord, Recommendation, ReferenceTable};

use crate::error::{AppError, AppResult};

/// Default number of recommendations, as shown on the dashboard.
pub const DEFAULT_RECOMMENDATIONS: usize = 8;

/// Load a component catalog CSV.
pub fn load_catalog(path: &Path) -> AppResult<ComponentCatalog> {
    let catalog = ComponentCatalog::load_csv(path)?;
    tracing::info!(path = %path.display(), components = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Catalog records, optionally filtered by a case-insensitive substring.
pub fn list_components<'a>(
    catalog: &'a ComponentCatalog,
    query: Option<&str>,
) -> Vec<&'a ComponentRecord> {
    match query {
        Some(q) => catalog.search(q),
        None => catalog.records().iter().collect(),
    }
}

/// Reference pairs whose eutectic temperature is closest to `target_c` [°C].
pub fn recommend_pairs(
    reference: &Path,
    target_c: f64,
    count: usize,
) -> AppResult<Vec<Recommendation>> {
    if !target_c.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "target temperature must be finite, got {}",
            target_c
        )));
    }

    let table = ReferenceTable::load_csv(reference)?;
    tracing::debug!(entries = table.len(), target_c, "ranking reference pairs");
    Ok(table.recommend(target_c, count))
}

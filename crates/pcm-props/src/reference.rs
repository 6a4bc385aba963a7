//! Known eutectic temperatures for substance pairs.
//!
//! Used to suggest pairs whose eutectic temperature lies close to a target
//! application temperature.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pcm_core::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

use crate::error::{PropsError, PropsResult};

/// One row of the reference table. Temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub pair: String,
    #[serde(rename = "TE")]
    pub eutectic_temperature_c: f64,
}

/// A reference entry ranked against a target temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub pair: String,
    pub eutectic_temperature_c: f64,
    /// `|TE − target|` [°C].
    pub distance_c: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    /// Build a table, rejecting rows with a non-finite temperature.
    pub fn new(entries: Vec<ReferenceEntry>) -> PropsResult<Self> {
        for entry in &entries {
            ensure_finite(entry.eutectic_temperature_c, "eutectic temperature").map_err(|e| {
                PropsError::InvalidReferenceData {
                    pair: entry.pair.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(Self { entries })
    }

    /// Read a headed CSV table with at least the `pair` and `TE` columns.
    pub fn from_reader<R: Read>(reader: R) -> PropsResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = csv_reader
            .deserialize::<ReferenceEntry>()
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = entries.len(), "loaded eutectic reference table");
        Self::new(entries)
    }

    pub fn load_csv(path: &Path) -> PropsResult<Self> {
        let file = File::open(path).map_err(|source| PropsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `count` entries closest to `target_c`, nearest first.
    ///
    /// Ties keep table order.
    pub fn recommend(&self, target_c: f64, count: usize) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = self
            .entries
            .iter()
            .map(|e| Recommendation {
                pair: e.pair.clone(),
                eutectic_temperature_c: e.eutectic_temperature_c,
                distance_c: (e.eutectic_temperature_c - target_c).abs(),
            })
            .collect();

        ranked.sort_by(|a, b| a.distance_c.total_cmp(&b.distance_c));
        ranked.truncate(count);
        ranked
    }
}

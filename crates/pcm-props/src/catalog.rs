//! CSV-backed table of substance records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::component::{ComponentProperties, ComponentRecord};
use crate::error::{PropsError, PropsResult};

/// Substance table keyed by name.
///
/// Lookups are trimmed and case-insensitive; when names repeat, the first row wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentCatalog {
    records: Vec<ComponentRecord>,
}

impl ComponentCatalog {
    pub fn new(records: Vec<ComponentRecord>) -> Self {
        Self { records }
    }

    /// Read a headed CSV table (`pcm, molar_mass, T_fus, Del_H, cp_solid_a, ...`).
    ///
    /// Extra columns are ignored. Rows are not validated here; validation
    /// happens when a row is turned into [`ComponentProperties`].
    pub fn from_reader<R: Read>(reader: R) -> PropsResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<ComponentRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = records.len(), "loaded component catalog");
        Ok(Self { records })
    }

    pub fn load_csv(path: &Path) -> PropsResult<Self> {
        let file = File::open(path).map_err(|source| PropsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    /// Distinct names, in table order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let name = record.name.as_str();
            if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                names.push(name);
            }
        }
        names
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        let name = name.trim();
        self.records
            .iter()
            .find(|r| r.name.trim().eq_ignore_ascii_case(name))
    }

    /// Records whose name contains `query` (case-insensitive). An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&ComponentRecord> {
        let query = query.trim().to_ascii_lowercase();
        self.records
            .iter()
            .filter(|r| query.is_empty() || r.name.to_ascii_lowercase().contains(&query))
            .collect()
    }

    /// Look up `name` and build its validated properties.
    pub fn properties(&self, name: &str) -> PropsResult<ComponentProperties> {
        let record = self.get(name).ok_or_else(|| PropsError::UnknownComponent {
            name: name.to_string(),
        })?;
        ComponentProperties::from_record(record.clone())
    }
}

use crate::error::CatalogError;
use crate::model::{ContainerId, ContainerRecord};
use crate::validation::validate;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use tracing::{info, warn};

const BUNDLED_CONTAINERS: &str = include_str!("../data/containers.json");

/// Read-only container collection the pipeline queries.
#[derive(Clone, PartialEq)]
pub struct Catalog {
    records: Vec<ContainerRecord>,
}

impl Catalog {
    /// Takes records the caller already validated.
    pub fn new(records: Vec<ContainerRecord>) -> Self {
        Self { records }
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CONTAINERS)
    }

    pub fn from_config(config: &common::config::Catalog) -> Result<Self, CatalogError> {
        match config.data_path.as_deref() {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validates every record before decoding; a single invalid record or a
    /// repeated id rejects the whole dataset.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let Value::Array(values) = serde_json::from_str::<Value>(json)? else {
            return Err(CatalogError::NotAnArray);
        };

        for (position, value) in values.iter().enumerate() {
            let report = validate(value);
            if !report.is_valid {
                return Err(CatalogError::InvalidRecord {
                    position,
                    errors: report.errors,
                });
            }
            for warning in &report.warnings {
                warn!("container at position `{position}`: {warning}");
            }
        }

        let records = values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ContainerRecord>, _>>()?;

        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(CatalogError::DuplicateId(duplicate.id));
        }

        info!("loaded catalog with `{}` containers", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ContainerRecord] {
        &self.records
    }

    pub fn get(&self, id: ContainerId) -> Option<&ContainerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Debug for Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n containers: `{}`", self.records.len())
    }
}

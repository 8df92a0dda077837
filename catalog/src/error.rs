use crate::model::ContainerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not marshall/unmarshall catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not decode filter criteria: {0}")]
    Criteria(#[from] serde_yaml::Error),
    #[error("catalog json is not an array of container records")]
    NotAnArray,
    #[error("container at position `{position}` failed validation: {}", .errors.join("; "))]
    InvalidRecord {
        position: usize,
        errors: Vec<String>,
    },
    #[error("container id `{0}` appears more than once")]
    DuplicateId(ContainerId),
    #[error("unknown sort key: `{0}`")]
    UnknownSortKey(String),
    #[error("unknown sort order: `{0}`")]
    UnknownSortOrder(String),
    #[error("unknown quick filter: `{0}`")]
    UnknownQuickFilter(String),
    #[error("unknown project type: `{0}`")]
    UnknownProjectType(String),
}

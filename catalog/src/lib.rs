pub mod bands;
pub mod dataset;
pub mod display;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod pricing;
pub mod recommend;
pub mod search;
pub mod selection;
pub mod sort;
pub mod state;
pub mod stats;
pub mod validation;

pub use dataset::Catalog;
pub use error::CatalogError;
pub use model::{
    ContainerId, ContainerRecord, FilterCriteria, SizeCategory, SizeRange, SortKey, SortOrder,
    SortSpec,
};
pub use state::{Action, BrowseState};

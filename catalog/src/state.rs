use crate::dataset::Catalog;
use crate::error::CatalogError;
use crate::model::{
    ContainerId, ContainerRecord, FilterCriteria, SizeCategory, SizeRange, SortSpec,
};
use crate::pipeline;
use crate::recommend::ProjectType;
use common::config::{Config, DEFAULT_POSTCODE};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::debug;

/// Sets a single criterion, leaving the others as they are.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    MaxPrice(Option<f64>),
    RoadPlacement(Option<bool>),
    HeavyWaste(Option<bool>),
    SizeRange(SizeRange),
    SizeCategory(Option<SizeCategory>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFilter {
    RoadPlacement,
    HeavyWaste,
    SmallContainers,
    LargeContainers,
    BudgetFriendly,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 5] = [
        Self::RoadPlacement,
        Self::HeavyWaste,
        Self::SmallContainers,
        Self::LargeContainers,
        Self::BudgetFriendly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RoadPlacement => "road-placement",
            Self::HeavyWaste => "heavy-waste",
            Self::SmallContainers => "small-containers",
            Self::LargeContainers => "large-containers",
            Self::BudgetFriendly => "budget-friendly",
        }
    }

    pub fn update(self) -> FilterUpdate {
        match self {
            Self::RoadPlacement => FilterUpdate::RoadPlacement(Some(true)),
            Self::HeavyWaste => FilterUpdate::HeavyWaste(Some(true)),
            Self::SmallContainers => FilterUpdate::SizeRange(SizeRange::new(4.0, 8.0)),
            Self::LargeContainers => FilterUpdate::SizeRange(SizeRange::new(16.0, 40.0)),
            Self::BudgetFriendly => FilterUpdate::MaxPrice(Some(400.0)),
        }
    }
}

impl FromStr for QuickFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quick| quick.name() == s)
            .ok_or_else(|| CatalogError::UnknownQuickFilter(s.to_string()))
    }
}

impl Display for QuickFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Select(ContainerId),
    ClearSelection,
    UpdateFilter(FilterUpdate),
    /// Also clears the search query.
    ClearFilters,
    ApplyQuickFilter(QuickFilter),
    UpdateSort(SortSpec),
    ToggleSortOrder,
    UpdateSearchQuery(String),
    SetPostcode(String),
    SetProjectType(Option<ProjectType>),
}

/// Everything a browsing session needs to rebuild its listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseState {
    pub selected: Option<ContainerId>,
    pub search_query: String,
    pub filters: FilterCriteria,
    pub sort: SortSpec,
    pub postcode: String,
    pub project_type: Option<ProjectType>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            selected: None,
            search_query: String::new(),
            filters: FilterCriteria::default(),
            sort: SortSpec::default(),
            postcode: DEFAULT_POSTCODE.to_string(),
            project_type: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseStats {
    pub total_containers: usize,
    pub filtered_count: usize,
    pub has_selection: bool,
    pub has_filters: bool,
}

impl BrowseState {
    /// Initial state from the `catalog` and `query` config sections.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let query = &config.query;
        let filters = match &query.filters {
            Some(value) => serde_yaml::from_value(value.clone())?,
            None => FilterCriteria::default(),
        };

        Ok(Self {
            search_query: query.search.clone(),
            filters,
            sort: SortSpec::new(query.sort_key.parse()?, query.sort_order.parse()?),
            postcode: config.catalog.postcode.clone(),
            ..Self::default()
        })
    }

    pub fn apply(&self, action: Action) -> Self {
        debug!("browse action {action:?}");
        let mut next = self.clone();
        match action {
            Action::Select(id) => next.selected = Some(id),
            Action::ClearSelection => next.selected = None,
            Action::UpdateFilter(update) => next.filters = updated(&self.filters, update),
            Action::ClearFilters => {
                next.filters = FilterCriteria::default();
                next.search_query.clear();
            }
            Action::ApplyQuickFilter(quick) => {
                next.filters = updated(&self.filters, quick.update())
            }
            Action::UpdateSort(spec) => next.sort = spec,
            Action::ToggleSortOrder => next.sort.order = self.sort.order.toggled(),
            Action::UpdateSearchQuery(query) => next.search_query = query,
            Action::SetPostcode(postcode) => next.postcode = postcode,
            Action::SetProjectType(project) => next.project_type = project,
        }
        next
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ContainerRecord> {
        pipeline::run(
            catalog.records(),
            &self.search_query,
            &self.filters,
            self.sort,
        )
    }

    pub fn filter_summary(&self) -> Vec<String> {
        let filters = &self.filters;
        let mut summary = Vec::new();

        if let Some(max) = filters.max_price {
            summary.push(format!("Under £{max}"));
        }
        if filters.road_placement == Some(true) {
            summary.push("Road placement".to_string());
        }
        if filters.heavy_waste == Some(true) {
            summary.push("Heavy waste".to_string());
        }
        if !filters.size_range.is_default() {
            summary.push(format!("{} yards", filters.size_range));
        }
        if let Some(category) = &filters.size_category {
            summary.push(category.label().to_string());
        }
        if !self.search_query.trim().is_empty() {
            summary.push(format!("Search: \"{}\"", self.search_query));
        }
        summary
    }

    pub fn browse_stats(&self, catalog: &Catalog) -> BrowseStats {
        BrowseStats {
            total_containers: catalog.len(),
            filtered_count: self.visible(catalog).len(),
            has_selection: self.selected.is_some(),
            has_filters: !self.filter_summary().is_empty(),
        }
    }

    pub fn selected_container<'a>(&self, catalog: &'a Catalog) -> Option<&'a ContainerRecord> {
        self.selected.and_then(|id| catalog.get(id))
    }
}

fn updated(filters: &FilterCriteria, update: FilterUpdate) -> FilterCriteria {
    let mut filters = filters.clone();
    match update {
        FilterUpdate::MaxPrice(max) => filters.max_price = max,
        FilterUpdate::RoadPlacement(road) => filters.road_placement = road,
        FilterUpdate::HeavyWaste(heavy) => filters.heavy_waste = heavy,
        FilterUpdate::SizeRange(range) => filters.size_range = range,
        FilterUpdate::SizeCategory(category) => filters.size_category = category,
    }
    filters
}

use crate::error::CatalogError;
use crate::model::{ContainerRecord, SortKey, SortOrder, SortSpec};
use crate::sort::sort;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sizes offered when no project type is known.
pub const DEFAULT_SIZES: &[f64] = &[6.0, 8.0, 10.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    BathroomRenovation,
    KitchenRenovation,
    GardenClearance,
    HouseClearance,
    OfficeClearance,
    ConstructionSmall,
    ConstructionLarge,
    Commercial,
    Roofing,
    Flooring,
}

impl ProjectType {
    pub const ALL: [ProjectType; 10] = [
        Self::BathroomRenovation,
        Self::KitchenRenovation,
        Self::GardenClearance,
        Self::HouseClearance,
        Self::OfficeClearance,
        Self::ConstructionSmall,
        Self::ConstructionLarge,
        Self::Commercial,
        Self::Roofing,
        Self::Flooring,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BathroomRenovation => "bathroom-renovation",
            Self::KitchenRenovation => "kitchen-renovation",
            Self::GardenClearance => "garden-clearance",
            Self::HouseClearance => "house-clearance",
            Self::OfficeClearance => "office-clearance",
            Self::ConstructionSmall => "construction-small",
            Self::ConstructionLarge => "construction-large",
            Self::Commercial => "commercial",
            Self::Roofing => "roofing",
            Self::Flooring => "flooring",
        }
    }

    pub fn sizes(self) -> &'static [f64] {
        match self {
            Self::BathroomRenovation | Self::GardenClearance => &[4.0, 6.0, 8.0],
            Self::KitchenRenovation => &[6.0, 8.0, 10.0],
            Self::HouseClearance | Self::Roofing => &[12.0, 14.0, 16.0],
            Self::OfficeClearance | Self::Flooring => &[8.0, 10.0, 12.0],
            Self::ConstructionSmall => &[10.0, 12.0, 14.0],
            Self::ConstructionLarge => &[16.0, 20.0, 40.0],
            Self::Commercial => &[20.0, 40.0],
        }
    }
}

impl FromStr for ProjectType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|project| project.name() == s)
            .ok_or_else(|| CatalogError::UnknownProjectType(s.to_string()))
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn recommended_sizes(project: Option<ProjectType>) -> &'static [f64] {
    project.map_or(DEFAULT_SIZES, ProjectType::sizes)
}

/// Containers sized for the project, smallest first.
pub fn recommend<'a, I>(records: I, project: Option<ProjectType>) -> Vec<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    let sizes = recommended_sizes(project);
    sort(
        records.into_iter().filter(|r| sizes.contains(&r.size)),
        SortSpec::new(SortKey::Size, SortOrder::Asc),
    )
}

const CAPACITY_DESCRIPTIONS: [(f64, &str); 9] = [
    (4.0, "Perfect for small garden clearances"),
    (6.0, "Ideal for bathroom renovations"),
    (8.0, "Great for kitchen renovations"),
    (10.0, "Suitable for single room clearouts"),
    (12.0, "Perfect for home renovations"),
    (14.0, "Ideal for house clearances"),
    (16.0, "Great for large renovations"),
    (20.0, "Suitable for construction projects"),
    (40.0, "Perfect for commercial projects"),
];

pub fn capacity_description(size: f64) -> String {
    CAPACITY_DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == size)
        .map_or_else(
            || format!("{size} cubic yard capacity"),
            |(_, description)| description.to_string(),
        )
}

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type ContainerId = i64;

/// A skip as it appears in the static dataset. Surcharges are informational
/// and never part of the displayed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: ContainerId,
    /// cubic yards
    pub size: f64,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    /// percentage, 0..=100
    pub vat: f64,
    pub postcode: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_tonne_cost: Option<f64>,
}

impl ContainerRecord {
    pub fn vat_amount(&self) -> f64 {
        self.price_before_vat * self.vat / 100.0
    }

    pub fn total_price(&self) -> f64 {
        self.price_before_vat + self.vat_amount()
    }
}

pub const DEFAULT_SIZE_RANGE: SizeRange = SizeRange::new(4.0, 40.0);

/// Closed interval on `size`, `[min, max]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, size: f64) -> bool {
        self.min <= size && size <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == DEFAULT_SIZE_RANGE
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        DEFAULT_SIZE_RANGE
    }
}

impl From<[f64; 2]> for SizeRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<SizeRange> for [f64; 2] {
    fn from(value: SizeRange) -> Self {
        [value.min, value.max]
    }
}

impl Display for SizeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Named size filter. Labels outside the known set are kept as `Unlisted` and
/// match no container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Unlisted(String),
}

impl SizeCategory {
    pub fn label(&self) -> &str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
            Self::Unlisted(label) => label,
        }
    }

    pub fn sizes(&self) -> &'static [f64] {
        match self {
            Self::Small => &[4.0, 6.0, 8.0],
            Self::Medium => &[10.0, 12.0, 14.0],
            Self::Large => &[16.0, 20.0],
            Self::ExtraLarge => &[40.0],
            Self::Unlisted(_) => &[],
        }
    }

    pub fn contains(&self, size: f64) -> bool {
        self.sizes().contains(&size)
    }
}

impl From<&str> for SizeCategory {
    fn from(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "extra-large" => Self::ExtraLarge,
            other => Self::Unlisted(other.to_string()),
        }
    }
}

impl From<String> for SizeCategory {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Unlisted(_) => Self::Unlisted(value),
            known => known,
        }
    }
}

impl From<SizeCategory> for String {
    fn from(value: SizeCategory) -> Self {
        match value {
            SizeCategory::Unlisted(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl Display for SizeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Every key is optional on the wire; a missing key has no filtering effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub max_price: Option<f64>,
    pub road_placement: Option<bool>,
    pub heavy_waste: Option<bool>,
    pub size_range: SizeRange,
    pub size_category: Option<SizeCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SortKey {
    Size,
    Price,
    TotalPrice,
    PricePerYard,
    RoadPlacement,
    HeavyWaste,
    Id,
    HirePeriodDays,
    Vat,
    TransportCost,
    PerTonneCost,
}

impl SortKey {
    pub const ALL: [SortKey; 11] = [
        Self::Size,
        Self::Price,
        Self::TotalPrice,
        Self::PricePerYard,
        Self::RoadPlacement,
        Self::HeavyWaste,
        Self::Id,
        Self::HirePeriodDays,
        Self::Vat,
        Self::TransportCost,
        Self::PerTonneCost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Price => "price",
            Self::TotalPrice => "total-price",
            Self::PricePerYard => "price-per-yard",
            Self::RoadPlacement => "road-placement",
            Self::HeavyWaste => "heavy-waste",
            // raw record fields keep their dataset names
            Self::Id => "id",
            Self::HirePeriodDays => "hire_period_days",
            Self::Vat => "vat",
            Self::TransportCost => "transport_cost",
            Self::PerTonneCost => "per_tonne_cost",
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

impl TryFrom<String> for SortKey {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for &'static str {
    fn from(value: SortKey) -> Self {
        value.name()
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CatalogError::UnknownSortOrder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortKey::Size, SortOrder::Asc)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_decodes_without_surcharges() {
        let record: ContainerRecord = serde_json::from_str(
            r#"{"id": 1, "size": 6, "hire_period_days": 14, "price_before_vat": 200,
                "vat": 20, "postcode": "LE10", "allowed_on_road": true,
                "allows_heavy_waste": false, "area": "", "forbidden": false}"#,
        )
        .unwrap();

        assert_eq!(record.size, 6.0);
        assert_eq!(record.transport_cost, None);
        assert_eq!(record.per_tonne_cost, None);
        assert_eq!(record.vat_amount(), 40.0);
        assert_eq!(record.total_price(), 240.0);
    }

    #[test]
    fn test_filter_criteria_missing_keys_are_defaults() {
        let criteria: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.size_range, SizeRange::new(4.0, 40.0));

        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"roadPlacement": false, "sizeRange": [4, 8]}"#).unwrap();
        assert_eq!(criteria.road_placement, Some(false));
        assert_eq!(criteria.heavy_waste, None);
        assert_eq!(criteria.size_range, SizeRange::new(4.0, 8.0));
    }

    #[test]
    fn test_size_category_labels() {
        assert_eq!(SizeCategory::from("small"), SizeCategory::Small);
        assert_eq!(SizeCategory::from("extra-large"), SizeCategory::ExtraLarge);
        assert_eq!(
            SizeCategory::from("huge"),
            SizeCategory::Unlisted("huge".to_string())
        );
        assert!(SizeCategory::Unlisted("huge".to_string()).sizes().is_empty());

        let json = serde_json::to_string(&SizeCategory::ExtraLarge).unwrap();
        assert_eq!(json, r#""extra-large""#);
        let parsed: SizeCategory = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(parsed, SizeCategory::Medium);
    }

    #[test]
    fn test_sort_key_names_round_trip_through_from_str() {
        for key in SortKey::ALL {
            assert_eq!(key.name().parse::<SortKey>().unwrap(), key);
        }
        assert!(matches!(
            "colour".parse::<SortKey>(),
            Err(CatalogError::UnknownSortKey(name)) if name == "colour"
        ));
    }

    #[test]
    fn test_sort_spec_serde_uses_key_names() {
        let spec = SortSpec::new(SortKey::PricePerYard, SortOrder::Desc);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"key":"price-per-yard","order":"desc"}"#);
        assert_eq!(serde_json::from_str::<SortSpec>(&json).unwrap(), spec);
        assert!(serde_json::from_str::<SortSpec>(r#"{"key":"nope","order":"asc"}"#).is_err());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert!("up".parse::<SortOrder>().is_err());
    }
}

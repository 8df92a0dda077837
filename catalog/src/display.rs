use crate::model::ContainerRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub road_placement: bool,
    pub heavy_waste: bool,
    pub has_additional_costs: bool,
}

/// A record plus the labels a listing shows next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayContainer<'a> {
    #[serde(flatten)]
    pub record: &'a ContainerRecord,
    pub display_size: String,
    pub display_hire_period: String,
    pub features: Features,
}

pub fn display(record: &ContainerRecord) -> DisplayContainer<'_> {
    DisplayContainer {
        record,
        display_size: format!("{} Yard{}", record.size, plural(record.size == 1.0)),
        display_hire_period: format!(
            "{} day{}",
            record.hire_period_days,
            plural(record.hire_period_days == 1)
        ),
        features: Features {
            road_placement: record.allowed_on_road,
            heavy_waste: record.allows_heavy_waste,
            has_additional_costs: record.transport_cost.is_some_and(|c| c > 0.0)
                || record.per_tonne_cost.is_some_and(|c| c > 0.0),
        },
    }
}

fn plural(singular: bool) -> &'static str {
    if singular { "" } else { "s" }
}

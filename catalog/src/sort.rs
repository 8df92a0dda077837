use crate::model::{ContainerRecord, SortKey, SortOrder, SortSpec};
use std::cmp::Ordering;
use tracing::debug;

impl SortKey {
    /// Numeric value a record is ordered by. Absent surcharges are NaN.
    pub fn value_of(self, record: &ContainerRecord) -> f64 {
        match self {
            Self::Size => record.size,
            Self::Price => record.price_before_vat,
            Self::TotalPrice => record.total_price(),
            Self::PricePerYard => record.total_price() / record.size,
            Self::RoadPlacement => flag(record.allowed_on_road),
            Self::HeavyWaste => flag(record.allows_heavy_waste),
            Self::Id => record.id as f64,
            Self::HirePeriodDays => f64::from(record.hire_period_days),
            Self::Vat => record.vat,
            Self::TransportCost => record.transport_cost.unwrap_or(f64::NAN),
            Self::PerTonneCost => record.per_tonne_cost.unwrap_or(f64::NAN),
        }
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

pub fn compare(spec: SortSpec, a: &ContainerRecord, b: &ContainerRecord) -> Ordering {
    let (a, b) = (spec.key.value_of(a), spec.key.value_of(b));
    match spec.order {
        SortOrder::Asc => a.total_cmp(&b),
        SortOrder::Desc => b.total_cmp(&a),
    }
}

/// Stable sort into a new vector; equal keys keep their input order.
pub fn sort<'a, I>(records: I, spec: SortSpec) -> Vec<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    let mut sorted = records.into_iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| compare(spec, a, b));
    debug!(
        "sorted `{}` containers by `{}` {:?}",
        sorted.len(),
        spec.key,
        spec.order
    );
    sorted
}

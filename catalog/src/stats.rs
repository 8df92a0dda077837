use crate::model::ContainerRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStats {
    pub total_containers: usize,
    pub size_range: ValueRange,
    pub price_range: ValueRange,
    pub average_price: f64,
    pub road_placement_count: usize,
    pub heavy_waste_count: usize,
    pub road_placement_percentage: f64,
    pub heavy_waste_percentage: f64,
}

pub fn stats<'a, I>(records: I) -> ContainerStats
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    let records = records.into_iter().collect::<Vec<_>>();
    if records.is_empty() {
        return ContainerStats::default();
    }

    let total = records.len();
    let range = |value: fn(&ContainerRecord) -> f64| {
        records.iter().map(|r| value(r)).fold(
            ValueRange {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| ValueRange {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    };
    let price_sum = records.iter().map(|r| r.price_before_vat).sum::<f64>();
    let road_placement_count = records.iter().filter(|r| r.allowed_on_road).count();
    let heavy_waste_count = records.iter().filter(|r| r.allows_heavy_waste).count();

    ContainerStats {
        total_containers: total,
        size_range: range(|r| r.size),
        price_range: range(|r| r.price_before_vat),
        average_price: price_sum / total as f64,
        road_placement_count,
        heavy_waste_count,
        road_placement_percentage: percentage(road_placement_count, total),
        heavy_waste_percentage: percentage(heavy_waste_count, total),
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

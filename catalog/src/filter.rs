use crate::model::{ContainerRecord, FilterCriteria};
use tracing::debug;

/// A record passes when every criterion that is set holds.
pub fn matches(record: &ContainerRecord, criteria: &FilterCriteria) -> bool {
    if criteria
        .max_price
        .is_some_and(|max| record.price_before_vat > max)
    {
        return false;
    }

    if criteria
        .road_placement
        .is_some_and(|road| record.allowed_on_road != road)
    {
        return false;
    }

    if criteria
        .heavy_waste
        .is_some_and(|heavy| record.allows_heavy_waste != heavy)
    {
        return false;
    }

    let range = criteria.size_range;
    if record.size < range.min || record.size > range.max {
        return false;
    }

    criteria
        .size_category
        .as_ref()
        .is_none_or(|category| category.contains(record.size))
}

pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    let mut considered = 0;
    let kept = records
        .into_iter()
        .inspect(|_| considered += 1)
        .filter(|r| matches(r, criteria))
        .collect::<Vec<_>>();
    debug!("filter kept `{}` of `{}` containers", kept.len(), considered);
    kept
}

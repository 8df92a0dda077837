use crate::filter::filter;
use crate::model::{ContainerRecord, FilterCriteria, SortSpec};
use crate::search::search;
use crate::sort::sort;

/// Search, then filter, then sort. The input is never reordered.
pub fn run<'a, I>(
    records: I,
    query: &str,
    criteria: &FilterCriteria,
    spec: SortSpec,
) -> Vec<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    sort(filter(search(records, query), criteria), spec)
}

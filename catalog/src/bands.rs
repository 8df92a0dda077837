use crate::model::ContainerRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Listing sections, ordered smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SizeBand {
    #[serde(rename = "Small (4-8 yards)")]
    Small,
    #[serde(rename = "Medium (10-14 yards)")]
    Medium,
    #[serde(rename = "Large (16-20 yards)")]
    Large,
    #[serde(rename = "Extra Large (40+ yards)")]
    ExtraLarge,
}

impl SizeBand {
    pub fn of(size: f64) -> Self {
        if size <= 8.0 {
            Self::Small
        } else if size <= 14.0 {
            Self::Medium
        } else if size <= 20.0 {
            Self::Large
        } else {
            Self::ExtraLarge
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (4-8 yards)",
            Self::Medium => "Medium (10-14 yards)",
            Self::Large => "Large (16-20 yards)",
            Self::ExtraLarge => "Extra Large (40+ yards)",
        }
    }
}

impl Display for SizeBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn group_by_band<'a, I>(records: I) -> BTreeMap<SizeBand, Vec<&'a ContainerRecord>>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    records.into_iter().fold(BTreeMap::new(), |mut groups, record| {
        groups.entry(SizeBand::of(record.size)).or_default().push(record);
        groups
    })
}

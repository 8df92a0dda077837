use crate::model::ContainerRecord;
use serde::{Deserialize, Serialize};

/// How much larger than the estimate a container may be before it is flagged.
pub const OVERSIZE_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Requirements {
    pub needs_road_placement: bool,
    pub has_heavy_waste: bool,
    /// cubic yards
    pub estimated_volume: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionCheck {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub has_warnings: bool,
}

/// Issues make a selection invalid, warnings only advise.
pub fn check_selection(record: &ContainerRecord, requirements: &Requirements) -> SelectionCheck {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if requirements.needs_road_placement && !record.allowed_on_road {
        issues.push("This container cannot be placed on the road".to_string());
    }
    if requirements.has_heavy_waste && !record.allows_heavy_waste {
        issues.push("This container does not accept heavy waste".to_string());
    }

    if let Some(volume) = requirements.estimated_volume.filter(|v| *v > 0.0) {
        if record.size < volume {
            warnings.push(
                "This container might be too small for your estimated waste volume".to_string(),
            );
        }
        if record.size > volume * OVERSIZE_FACTOR {
            warnings.push(
                "This container might be larger than needed, consider a smaller size to save money"
                    .to_string(),
            );
        }
    }

    SelectionCheck {
        is_valid: issues.is_empty(),
        has_warnings: !warnings.is_empty(),
        issues,
        warnings,
    }
}

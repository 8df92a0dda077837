use crate::model::ContainerRecord;
use serde::Serialize;
use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 8] = [
    "id",
    "size",
    "hire_period_days",
    "price_before_vat",
    "vat",
    "postcode",
    "allowed_on_road",
    "allows_heavy_waste",
];

pub const LARGE_SIZE_WARNING: f64 = 50.0;
pub const HIGH_PRICE_WARNING: f64 = 2000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub has_warnings: bool,
}

impl ValidationReport {
    fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            has_warnings: !warnings.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Checks the untyped shape of a record. Errors block the record, warnings
/// only flag unusual values.
pub fn validate(value: &Value) -> ValidationReport {
    let mut errors = vec![];
    let mut warnings = vec![];

    for field in REQUIRED_FIELDS {
        if value.get(field).is_none_or(Value::is_null) {
            errors.push(format!("Missing required field: {field}"));
        }
    }

    let number = |field: &str| value.get(field).and_then(Value::as_f64);
    let size = number("size");
    let price = number("price_before_vat");

    if !size.is_some_and(|s| s > 0.0) {
        errors.push("Size must be a positive number".to_string());
    }
    if !price.is_some_and(|p| p > 0.0) {
        errors.push("Price before VAT must be a positive number".to_string());
    }
    if !number("vat").is_some_and(|v| (0.0..=100.0).contains(&v)) {
        errors.push("VAT must be a number between 0 and 100".to_string());
    }
    if !number("hire_period_days").is_some_and(|d| d > 0.0) {
        errors.push("Hire period must be a positive number".to_string());
    }

    if size.is_some_and(|s| s > LARGE_SIZE_WARNING) {
        warnings.push("Unusually large container size".to_string());
    }
    if price.is_some_and(|p| p > HIGH_PRICE_WARNING) {
        warnings.push("Unusually high price".to_string());
    }

    ValidationReport::new(errors, warnings)
}

pub fn validate_record(record: &ContainerRecord) -> ValidationReport {
    match serde_json::to_value(record) {
        Ok(value) => validate(&value),
        Err(e) => ValidationReport::new(vec![e.to_string()], vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_value() -> Value {
        json!({
            "id": 1,
            "size": 6,
            "hire_period_days": 14,
            "price_before_vat": 200,
            "vat": 20,
            "postcode": "LE10",
            "allowed_on_road": true,
            "allows_heavy_waste": false
        })
    }

    #[test]
    fn test_valid_record() {
        let report = validate(&valid_value());
        assert_eq!(report, ValidationReport::new(vec![], vec![]));
        assert!(report.is_valid);
        assert!(!report.has_warnings);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let mut value = valid_value();
        let object = value.as_object_mut().unwrap();
        object.remove("postcode");
        object.insert("allowed_on_road".to_string(), Value::Null);

        let report = validate(&value);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                "Missing required field: postcode".to_string(),
                "Missing required field: allowed_on_road".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_size_reports_both_errors() {
        let mut value = valid_value();
        value.as_object_mut().unwrap().remove("size");

        let report = validate(&value);
        assert_eq!(
            report.errors,
            vec![
                "Missing required field: size".to_string(),
                "Size must be a positive number".to_string(),
            ]
        );
    }

    #[test]
    fn test_ranges_and_types() {
        let value = json!({
            "id": 1,
            "size": "6",
            "hire_period_days": 0,
            "price_before_vat": -10,
            "vat": 120,
            "postcode": "LE10",
            "allowed_on_road": true,
            "allows_heavy_waste": false
        });

        let report = validate(&value);
        assert_eq!(
            report.errors,
            vec![
                "Size must be a positive number".to_string(),
                "Price before VAT must be a positive number".to_string(),
                "VAT must be a number between 0 and 100".to_string(),
                "Hire period must be a positive number".to_string(),
            ]
        );
    }

    #[test]
    fn test_vat_bounds_are_inclusive() {
        for vat in [0, 100] {
            let mut value = valid_value();
            value["vat"] = json!(vat);
            assert!(validate(&value).is_valid, "vat {vat} should be valid");
        }
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut value = valid_value();
        value["size"] = json!(60);
        value["price_before_vat"] = json!(2500.5);

        let report = validate(&value);
        assert!(report.is_valid);
        assert!(report.has_warnings);
        assert_eq!(
            report.warnings,
            vec![
                "Unusually large container size".to_string(),
                "Unusually high price".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_object_is_missing_everything() {
        let report = validate(&json!([1, 2, 3]));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), REQUIRED_FIELDS.len() + 4);
    }

    #[test]
    fn test_typed_record() {
        assert!(validate_record(&record(1, 8.0, 295.0)).is_valid);

        let broken = ContainerRecord {
            vat: 150.0,
            ..record(2, 0.0, 295.0)
        };
        let report = validate_record(&broken);
        assert_eq!(
            report.errors,
            vec![
                "Size must be a positive number".to_string(),
                "VAT must be a number between 0 and 100".to_string(),
            ]
        );
    }
}

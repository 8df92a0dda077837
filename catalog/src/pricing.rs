use crate::model::{ContainerRecord, SizeRange};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: f64,
    pub vat_amount: f64,
    pub total: f64,
    pub formatted_base: String,
    #[serde(rename = "formattedVAT")]
    pub formatted_vat: String,
    pub formatted_total: String,
    pub additional_costs: AdditionalCosts,
    pub has_additional_costs: bool,
}

/// Formatted surcharges, shown next to the price but never added to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCosts {
    pub transport: Option<String>,
    pub per_tonne: Option<String>,
}

pub fn price(record: &ContainerRecord) -> PriceBreakdown {
    let base = record.price_before_vat;
    let vat_amount = record.vat_amount();
    let total = base + vat_amount;

    let additional_costs = AdditionalCosts {
        transport: surcharge(record.transport_cost),
        per_tonne: surcharge(record.per_tonne_cost),
    };
    let has_additional_costs =
        additional_costs.transport.is_some() || additional_costs.per_tonne.is_some();

    PriceBreakdown {
        base,
        vat_amount,
        total,
        formatted_base: format_currency(base),
        formatted_vat: format_currency(vat_amount),
        formatted_total: format_currency(total),
        additional_costs,
        has_additional_costs,
    }
}

fn surcharge(cost: Option<f64>) -> Option<String> {
    cost.filter(|c| *c > 0.0).map(format_currency)
}

/// en-GB pound formatting: `£` prefix, comma grouping, up to two fraction
/// digits with trailing zeros dropped.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "£NaN".to_string();
    }
    let sign = if amount.is_sign_negative() && amount.abs() >= 0.005 {
        "-"
    } else {
        ""
    };
    if amount.is_infinite() {
        return format!("{sign}£∞");
    }

    let pence = (amount.abs() * 100.0).round();
    let pounds = format!("{:.0}", (pence / 100.0).trunc());
    let fraction = (pence % 100.0) as u8;

    let mut text = format!("{sign}£{}", group_thousands(&pounds));
    match fraction {
        0 => {}
        f if f % 10 == 0 => text.push_str(&format!(".{}", f / 10)),
        f => text.push_str(&format!(".{f:02}")),
    }
    text
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn price_per_cubic_yard(record: &ContainerRecord) -> f64 {
    price(record).total / record.size
}

/// Cheapest container per cubic yard inside `window`. On ties the earlier
/// record wins.
pub fn find_most_economical<'a, I>(records: I, window: SizeRange) -> Option<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    records
        .into_iter()
        .filter(|r| r.size >= window.min && r.size <= window.max)
        .fold(None, |best, current| match best {
            Some(best) if price_per_cubic_yard(current) < price_per_cubic_yard(best) => {
                Some(current)
            }
            Some(best) => Some(best),
            None => Some(current),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub amount: f64,
    /// one decimal place
    pub percentage: f64,
    pub formatted_amount: String,
    pub is_saving: bool,
    pub is_more_expensive: bool,
}

/// Compares total prices against `reference`; a positive saving means
/// `record` is cheaper.
pub fn savings(record: &ContainerRecord, reference: &ContainerRecord) -> Savings {
    let current = price(record).total;
    let reference = price(reference).total;
    let saving = reference - current;
    let percentage = ((saving / reference * 100.0).abs() * 10.0).round() / 10.0;

    Savings {
        amount: saving.abs(),
        percentage,
        formatted_amount: format_currency(saving.abs()),
        is_saving: saving > 0.0,
        is_more_expensive: saving < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;
    use crate::model::DEFAULT_SIZE_RANGE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_six_yard_scenario() {
        let breakdown = price(&record(1, 6.0, 200.0));
        assert_eq!(
            breakdown,
            PriceBreakdown {
                base: 200.0,
                vat_amount: 40.0,
                total: 240.0,
                formatted_base: "£200".to_string(),
                formatted_vat: "£40".to_string(),
                formatted_total: "£240".to_string(),
                additional_costs: AdditionalCosts::default(),
                has_additional_costs: false,
            }
        );
    }

    #[test]
    fn test_total_is_base_plus_vat() {
        for (price_before_vat, vat) in [(211.0, 20.0), (992.0, 17.5), (0.1, 5.0), (434.0, 0.0)] {
            let r = ContainerRecord {
                vat,
                ..record(1, 8.0, price_before_vat)
            };
            let breakdown = price(&r);
            assert_eq!(breakdown.vat_amount, breakdown.base * vat / 100.0);
            assert_eq!(breakdown.total, breakdown.base + breakdown.vat_amount);
        }
    }

    #[test]
    fn test_surcharges_are_not_added() {
        let r = ContainerRecord {
            transport_cost: Some(248.0),
            per_tonne_cost: Some(0.0),
            ..record(1, 20.0, 992.0)
        };
        let breakdown = price(&r);
        assert_eq!(breakdown.total, 992.0 + 992.0 * 20.0 / 100.0);
        assert_eq!(breakdown.additional_costs.transport.as_deref(), Some("£248"));
        assert_eq!(breakdown.additional_costs.per_tonne, None);
        assert!(breakdown.has_additional_costs);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let json = serde_json::to_value(price(&record(1, 6.0, 200.0))).unwrap();
        assert_eq!(json["formattedVAT"], "£40");
        assert_eq!(json["vatAmount"], 40.0);
        assert_eq!(json["additionalCosts"]["perTonne"], serde_json::Value::Null);
        assert_eq!(json["hasAdditionalCosts"], false);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "£0");
        assert_eq!(format_currency(240.0), "£240");
        assert_eq!(format_currency(253.2), "£253.2");
        assert_eq!(format_currency(42.25), "£42.25");
        assert_eq!(format_currency(1190.4), "£1,190.4");
        assert_eq!(format_currency(1234567.891), "£1,234,567.89");
        assert_eq!(format_currency(999.999), "£1,000");
        assert_eq!(format_currency(-12.5), "-£12.5");
        assert_eq!(format_currency(100000.0), "£100,000");
    }

    #[test]
    fn test_price_per_cubic_yard() {
        assert_eq!(price_per_cubic_yard(&record(1, 8.0, 200.0)), 30.0);
    }

    #[test]
    fn test_most_economical_prefers_lower_per_yard() {
        // per yard 10 then 8
        let records = vec![
            ContainerRecord {
                vat: 0.0,
                ..record(1, 8.0, 80.0)
            },
            ContainerRecord {
                vat: 0.0,
                ..record(2, 8.0, 64.0)
            },
        ];
        let best = find_most_economical(&records, DEFAULT_SIZE_RANGE).unwrap();
        assert_eq!(best.id, 2);
    }

    #[test]
    fn test_most_economical_ties_keep_first() {
        let records = vec![record(1, 4.0, 100.0), record(2, 8.0, 200.0)];
        let best = find_most_economical(&records, DEFAULT_SIZE_RANGE).unwrap();
        assert_eq!(best.id, 1);
    }

    #[test]
    fn test_most_economical_respects_window() {
        let records = vec![
            record(1, 4.0, 211.0),
            record(2, 14.0, 434.0),
            record(3, 40.0, 992.0),
        ];
        let best = find_most_economical(&records, SizeRange::new(4.0, 16.0)).unwrap();
        assert_eq!(best.id, 2);
        assert!(find_most_economical(&records, SizeRange::new(50.0, 60.0)).is_none());
        assert!(find_most_economical(Vec::<&ContainerRecord>::new(), DEFAULT_SIZE_RANGE).is_none());
    }

    #[test]
    fn test_savings() {
        let cheap = record(1, 6.0, 200.0);
        let dear = record(2, 8.0, 300.0);

        let s = savings(&cheap, &dear);
        assert_eq!(s.amount, 120.0);
        assert_eq!(s.percentage, 33.3);
        assert_eq!(s.formatted_amount, "£120");
        assert!(s.is_saving);
        assert!(!s.is_more_expensive);

        let s = savings(&dear, &cheap);
        assert_eq!(s.amount, 120.0);
        assert_eq!(s.percentage, 50.0);
        assert!(!s.is_saving);
        assert!(s.is_more_expensive);

        let s = savings(&cheap, &cheap);
        assert_eq!(s.amount, 0.0);
        assert!(!s.is_saving && !s.is_more_expensive);
    }
}
